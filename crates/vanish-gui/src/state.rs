use std::fmt;
use std::path::PathBuf;

use vanish_core::remote::RemoteConfig;

/// What the worker is currently doing (None = idle).
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Opening,
    Submitting,
    Saving,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activity::Opening => write!(f, "Opening"),
            Activity::Submitting => write!(f, "Removing object"),
            Activity::Saving => write!(f, "Saving"),
        }
    }
}

/// Overall UI state.
pub struct UIState {
    pub image_path: Option<PathBuf>,
    pub running: Option<Activity>,

    /// Service settings edited in the controls panel. The key lives here and
    /// nowhere else; it is handed to the worker with each submit.
    pub remote: RemoteConfig,
    /// Set when the service rejected the credential; highlights the key field.
    pub key_rejected: bool,
    pub show_key: bool,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            image_path: None,
            running: None,
            remote: RemoteConfig::default(),
            key_rejected: false,
            show_key: false,
            log_messages: Vec::new(),
        }
    }
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.running.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

/// Canvas display state.
#[derive(Default)]
pub struct ViewState {
    pub photo_texture: Option<egui::TextureHandle>,
    pub mask_texture: Option<egui::TextureHandle>,
    /// Mask pixels changed since the texture was last uploaded.
    pub mask_dirty: bool,
    /// Show the edited result instead of the editing canvas.
    pub viewing_result: bool,
}

/// An edited image returned by the service, kept until the user saves it or
/// goes back to editing.
pub struct ResultState {
    pub bytes: Vec<u8>,
    pub mime: String,
    pub texture: Option<egui::TextureHandle>,
}
