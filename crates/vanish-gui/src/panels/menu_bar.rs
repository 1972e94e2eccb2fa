use vanish_core::remote::RemoteConfig;

use crate::app::VanishApp;
use crate::messages::WorkerResult;

pub fn show(ctx: &egui::Context, app: &mut VanishApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui
                    .add(
                        egui::Button::new("Open Photo...")
                            .shortcut_text(ctx.format_shortcut(&open_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    super::pick_photo(app);
                }

                let save_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
                let save_btn = egui::Button::new("Save Result...")
                    .shortcut_text(ctx.format_shortcut(&save_shortcut));
                if ui.add_enabled(app.result.is_some(), save_btn).clicked() {
                    ui.close();
                    super::pick_save_target(app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let quit_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui
                    .add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut)))
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                let undo_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Z);
                let can_undo = app.session.as_ref().is_some_and(|s| s.can_undo());
                if ui
                    .add_enabled(
                        can_undo,
                        egui::Button::new("Undo Stroke")
                            .shortcut_text(ctx.format_shortcut(&undo_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    app.undo();
                }

                let redo_shortcut = egui::KeyboardShortcut::new(
                    egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
                    egui::Key::Z,
                );
                let can_redo = app.session.as_ref().is_some_and(|s| s.can_redo());
                if ui
                    .add_enabled(
                        can_redo,
                        egui::Button::new("Redo Stroke")
                            .shortcut_text(ctx.format_shortcut(&redo_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    app.redo();
                }

                let has_marks = app.session.as_ref().is_some_and(|s| s.has_marks());
                if ui
                    .add_enabled(has_marks, egui::Button::new("Clear Marks"))
                    .clicked()
                {
                    ui.close();
                    app.clear_marks();
                }

                ui.separator();

                if ui.button("Reset Service Defaults").clicked() {
                    ui.close();
                    let key = std::mem::take(&mut app.ui_state.remote.api_key);
                    app.ui_state.remote = RemoteConfig::new(key);
                    app.ui_state.add_log("Service settings reset to defaults".into());
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::O,
            ))
        }) {
            super::pick_photo(app);
        }
        if app.result.is_some()
            && ctx.input_mut(|i| {
                i.consume_shortcut(&egui::KeyboardShortcut::new(
                    egui::Modifiers::COMMAND,
                    egui::Key::S,
                ))
            })
        {
            super::pick_save_target(app);
        }
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::Q,
            ))
        }) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        // Stroke undo/redo stay out of text fields, which handle their own
        // editing keys. Redo is checked first; its shortcut includes undo's
        // modifiers.
        if !ctx.wants_keyboard_input() {
            if ctx.input_mut(|i| {
                i.consume_shortcut(&egui::KeyboardShortcut::new(
                    egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
                    egui::Key::Z,
                ))
            }) {
                app.redo();
            }
            if ctx.input_mut(|i| {
                i.consume_shortcut(&egui::KeyboardShortcut::new(
                    egui::Modifiers::COMMAND,
                    egui::Key::Z,
                ))
            }) {
                app.undo();
            }
        }
    });
}

fn import_config(app: &mut VanishApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let config = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
            .and_then(|path| {
                let content = std::fs::read_to_string(&path).ok()?;
                toml::from_str(&content).ok()
            });
        if let Some(config) = config {
            let _ = result_tx.send(WorkerResult::ConfigImported { config });
        }
    });
}

fn export_config(app: &mut VanishApp) {
    let config = app.ui_state.remote.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("vanish.toml")
            .save_file()
        {
            if let Ok(content) = toml::to_string_pretty(&config) {
                let _ = std::fs::write(path, content);
            }
        }
    });
}
