use std::path::PathBuf;
use std::time::Duration;

use vanish_core::error::VanishError;
use vanish_core::remote::{EditRequest, RemoteConfig};
use vanish_core::source::SourceImage;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Read and decode a photo off the UI thread.
    OpenImage { path: PathBuf },

    /// Send a prepared edit request to the service. The config travels with
    /// the command so the client is built (and the credential checked) on
    /// the worker.
    Submit {
        request: EditRequest,
        config: RemoteConfig,
    },

    /// Write the edited result to disk.
    SaveResult { bytes: Vec<u8>, path: PathBuf },
}

/// Events delivered to the UI thread: worker outcomes plus file-dialog
/// picks (dialogs run on their own short-lived threads and report back
/// through the same channel).
pub enum WorkerResult {
    /// A photo picked through the file dialog.
    PhotoPicked {
        path: PathBuf,
    },

    ImageOpened {
        path: PathBuf,
        source: SourceImage,
    },

    /// A save destination picked for the edited result.
    SaveTargetPicked {
        path: PathBuf,
    },

    /// The service answered with an edited image.
    SubmitComplete {
        bytes: Vec<u8>,
        mime: String,
        elapsed: Duration,
    },

    ResultSaved {
        path: PathBuf,
    },

    /// A service config picked through the file dialog.
    ConfigImported {
        config: RemoteConfig,
    },

    /// Typed failure so the UI can react to credential problems.
    Failed {
        error: VanishError,
    },

    Log {
        message: String,
    },
}
