use std::path::PathBuf;
use std::sync::mpsc;

use image::imageops::{self, FilterType};
use vanish_core::error::VanishError;
use vanish_core::geometry::ContainerSize;
use vanish_core::session::EditSession;
use vanish_core::source::SourceImage;

use crate::convert::rgba_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{Activity, ResultState, UIState, ViewState};
use crate::worker;

pub struct VanishApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    /// Cloned into file-dialog threads so picks flow back through the same
    /// channel the worker uses.
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    /// Current editing session; None until a photo has been opened.
    pub session: Option<EditSession>,
    pub ui_state: UIState,
    pub view: ViewState,
    pub result: Option<ResultState>,
    /// Canvas area measured on the last frame; fixes the display geometry
    /// for the next loaded photo.
    pub canvas_area: Option<ContainerSize>,
    pub show_about: bool,
}

impl VanishApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            session: None,
            ui_state: UIState::default(),
            view: ViewState::default(),
            result: None,
            canvas_area: None,
            show_about: false,
        }
    }

    /// Drain all pending results from the worker and the dialog threads.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::PhotoPicked { path } => {
                    self.ui_state.running = Some(Activity::Opening);
                    self.send_command(WorkerCommand::OpenImage { path });
                }
                WorkerResult::ImageOpened { path, source } => {
                    self.ui_state.running = None;
                    self.start_session(ctx, path, source);
                }
                WorkerResult::SubmitComplete {
                    bytes,
                    mime,
                    elapsed,
                } => {
                    self.ui_state.running = None;
                    let texture = image::load_from_memory(&bytes).ok().map(|decoded| {
                        ctx.load_texture(
                            "result",
                            rgba_to_color_image(&decoded.to_rgba8()),
                            egui::TextureOptions::LINEAR,
                        )
                    });
                    if texture.is_none() {
                        self.ui_state
                            .add_log("Result preview unavailable (undecodable image)".into());
                    }
                    self.ui_state.add_log(format!(
                        "Object removed in {} ({mime}, {} bytes)",
                        format_duration(elapsed),
                        bytes.len()
                    ));
                    self.result = Some(ResultState {
                        bytes,
                        mime,
                        texture,
                    });
                    self.view.viewing_result = true;
                }
                WorkerResult::SaveTargetPicked { path } => {
                    if let Some(result) = &self.result {
                        self.ui_state.running = Some(Activity::Saving);
                        self.send_command(WorkerCommand::SaveResult {
                            bytes: result.bytes.clone(),
                            path,
                        });
                    }
                }
                WorkerResult::ResultSaved { path } => {
                    self.ui_state.running = None;
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                WorkerResult::ConfigImported { config } => {
                    self.ui_state.remote = config;
                    self.ui_state.key_rejected = false;
                    self.ui_state.add_log("Service config imported".into());
                }
                WorkerResult::Failed { error } => {
                    self.ui_state.running = None;
                    self.handle_failure(error);
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Failures never touch the mask or the history; the one process-wide
    /// reaction is dropping a rejected credential so the user re-enters it.
    fn handle_failure(&mut self, error: VanishError) {
        match &error {
            VanishError::Auth(message) => {
                self.ui_state.remote.api_key.clear();
                self.ui_state.key_rejected = true;
                self.ui_state.add_log(format!("API key rejected: {message}"));
            }
            VanishError::MissingCredential => {
                self.ui_state.key_rejected = true;
                self.ui_state.add_log(error.to_string());
            }
            _ => self.ui_state.add_log(format!("ERROR: {error}")),
        }
    }

    fn start_session(&mut self, ctx: &egui::Context, path: PathBuf, source: SourceImage) {
        let container = self.canvas_area.unwrap_or(ContainerSize {
            width: 960.0,
            viewport_height: 720.0,
        });

        match EditSession::load(source, container) {
            Ok(session) => {
                self.ui_state.add_log(format!(
                    "Opened: {} ({}x{}, {})",
                    path.display(),
                    session.source().width(),
                    session.source().height(),
                    session.source().payload_mime()
                ));
                self.upload_photo_texture(ctx, &session);
                self.view.mask_texture = Some(ctx.load_texture(
                    "mask",
                    rgba_to_color_image(session.mask().image()),
                    egui::TextureOptions::NEAREST,
                ));
                self.view.mask_dirty = false;
                self.view.viewing_result = false;
                self.result = None;
                self.ui_state.image_path = Some(path);
                self.session = Some(session);
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    /// Upload the photo at canvas resolution so photo and mask textures map
    /// onto the same rect one-to-one.
    fn upload_photo_texture(&mut self, ctx: &egui::Context, session: &EditSession) {
        let geometry = session.geometry();
        let source = session.source();
        let photo = if (geometry.width, geometry.height) == (source.width(), source.height()) {
            source.image().to_rgba8()
        } else {
            imageops::resize(
                &source.image().to_rgba8(),
                geometry.width,
                geometry.height,
                FilterType::Triangle,
            )
        };
        self.view.photo_texture = Some(ctx.load_texture(
            "photo",
            rgba_to_color_image(&photo),
            egui::TextureOptions::LINEAR,
        ));
    }

    /// Re-upload the mask texture after any pixel change (stroke, undo,
    /// redo, clear).
    fn refresh_mask_texture(&mut self, ctx: &egui::Context) {
        let Some(session) = &self.session else {
            return;
        };
        let image = rgba_to_color_image(session.mask().image());
        match &mut self.view.mask_texture {
            Some(handle) => handle.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.view.mask_texture =
                    Some(ctx.load_texture("mask", image, egui::TextureOptions::NEAREST))
            }
        }
        self.view.mask_dirty = false;
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    pub fn undo(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.undo() {
                self.view.mask_dirty = true;
            }
        }
    }

    pub fn redo(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.redo() {
                self.view.mask_dirty = true;
            }
        }
    }

    /// Clear all marks. No-op on an already blank mask so the history does
    /// not collect empty-to-empty entries.
    pub fn clear_marks(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.has_marks() {
                session.clear();
                self.view.mask_dirty = true;
            }
        }
    }

    /// Composite the current mask and hand the request to the worker. An
    /// empty mask is reported locally and never reaches the wire.
    pub fn submit(&mut self) {
        if self.ui_state.is_busy() {
            return;
        }
        let Some(session) = &self.session else {
            return;
        };
        match session.prepare_submission(&self.ui_state.remote.instruction) {
            Ok(request) => {
                self.ui_state.running = Some(Activity::Submitting);
                self.send_command(WorkerCommand::Submit {
                    request,
                    config: self.ui_state.remote.clone(),
                });
            }
            Err(e) => self.ui_state.add_log(e.to_string()),
        }
    }
}

impl eframe::App for VanishApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        if self.view.mask_dirty {
            self.refresh_mask_texture(ctx);
        }

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::canvas::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Vanish")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Vanish");
                        ui.label("Paint over an object, let the edit service remove it");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}min")
    }
}
