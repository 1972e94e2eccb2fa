use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Instant;

use vanish_core::error::VanishError;
use vanish_core::remote::{EditOutcome, EditRequest, EditService, GeminiClient, RemoteConfig};
use vanish_core::source::SourceImage;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("vanish-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_failed(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, error: VanishError) {
    send(tx, ctx, WorkerResult::Failed { error });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::OpenImage { path } => {
                handle_open_image(&path, &tx, &ctx);
            }
            WorkerCommand::Submit { request, config } => {
                handle_submit(request, config, &tx, &ctx);
            }
            WorkerCommand::SaveResult { bytes, path } => {
                handle_save_result(&bytes, &path, &tx, &ctx);
            }
        }
    }
}

fn handle_open_image(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    match SourceImage::from_path(path) {
        Ok(source) => send(
            tx,
            ctx,
            WorkerResult::ImageOpened {
                path: path.to_path_buf(),
                source,
            },
        ),
        Err(e) => send_failed(tx, ctx, e),
    }
}

fn handle_submit(
    request: EditRequest,
    config: RemoteConfig,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    // Credential problems surface here, before any network traffic.
    let client = match GeminiClient::new(config) {
        Ok(c) => c,
        Err(e) => {
            send_failed(tx, ctx, e);
            return;
        }
    };

    let payload: usize = request.images.iter().map(|i| i.bytes.len()).sum();
    send_log(
        tx,
        ctx,
        format!("Sending {} KiB to the edit service...", payload / 1024),
    );

    let started = Instant::now();
    match client.edit(&request) {
        Ok(EditOutcome::Image { bytes, mime }) => send(
            tx,
            ctx,
            WorkerResult::SubmitComplete {
                bytes,
                mime,
                elapsed: started.elapsed(),
            },
        ),
        Ok(EditOutcome::Refusal) => send_failed(tx, ctx, VanishError::ServiceRefusal),
        Err(e) => send_failed(tx, ctx, e),
    }
}

/// Write the result bytes as the service returned them; no re-encoding.
fn handle_save_result(
    bytes: &[u8],
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match std::fs::write(path, bytes) {
        Ok(()) => send(
            tx,
            ctx,
            WorkerResult::ResultSaved {
                path: path.to_path_buf(),
            },
        ),
        Err(e) => send_failed(tx, ctx, VanishError::Io(e)),
    }
}
