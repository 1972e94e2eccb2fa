use vanish_core::consts::{
    DEFAULT_INSTRUCTION, MAX_BRUSH_SIZE, MAX_SUBMIT_DIMENSION, MIN_BRUSH_SIZE,
};

use crate::app::VanishApp;
use crate::state::Activity;

const LEFT_PANEL_WIDTH: f32 = 280.0;

pub fn show(ctx: &egui::Context, app: &mut VanishApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                photo_section(ui, app);
                ui.separator();
                brush_section(ui, app);
                ui.separator();
                service_section(ui, app);
                ui.separator();
                actions_section(ui, app);
            });
        });
}

fn photo_section(ui: &mut egui::Ui, app: &mut VanishApp) {
    super::section_header(ui, "Photo", None);
    ui.add_space(4.0);

    if ui.button("Open...").clicked() {
        super::pick_photo(app);
    }

    if let Some(ref path) = app.ui_state.image_path {
        ui.label(
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        );
    }

    if let Some(ref session) = app.session {
        let source = session.source();
        let geometry = session.geometry();
        ui.small(format!("{}x{} px", source.width(), source.height()));
        ui.small(format!("Canvas {}x{}", geometry.width, geometry.height));
        if source.width().max(source.height()) > MAX_SUBMIT_DIMENSION {
            ui.small(format!("Sent at {MAX_SUBMIT_DIMENSION} px long edge"));
        }
    }
}

fn brush_section(ui: &mut egui::Ui, app: &mut VanishApp) {
    super::section_header(ui, "Brush", None);
    ui.add_space(4.0);

    let Some(session) = app.session.as_mut() else {
        ui.small("Open a photo to paint marks");
        return;
    };

    let mut size = session.brush_size();
    if ui
        .add(
            egui::Slider::new(&mut size, MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE)
                .text("Size")
                .suffix(" px")
                .clamping(egui::SliderClamping::Always),
        )
        .changed()
    {
        session.set_brush_size(size);
    }

    let can_undo = session.can_undo();
    let can_redo = session.can_redo();
    let has_marks = session.has_marks();
    let position = session.history().index();
    let recorded = session.history().len() - 1;

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
            app.undo();
        }
        if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
            app.redo();
        }
        if ui.add_enabled(has_marks, egui::Button::new("Clear")).clicked() {
            app.clear_marks();
        }
    });
    ui.small(format!("Stroke {position} of {recorded}"));
}

fn service_section(ui: &mut egui::Ui, app: &mut VanishApp) {
    let status = if app.ui_state.remote.api_key.is_empty() {
        Some("no key")
    } else {
        None
    };
    super::section_header(ui, "Service", status);
    ui.add_space(4.0);

    ui.label("API key");
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut app.ui_state.remote.api_key)
                .password(!app.ui_state.show_key)
                .desired_width(180.0),
        );
        if response.changed() {
            app.ui_state.key_rejected = false;
        }
        ui.checkbox(&mut app.ui_state.show_key, "Show");
    });
    if app.ui_state.key_rejected {
        ui.colored_label(
            egui::Color32::from_rgb(230, 90, 70),
            "The service rejected this key",
        );
    }

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Model:");
        ui.text_edit_singleline(&mut app.ui_state.remote.model);
    });

    ui.add_space(4.0);
    ui.label("Instruction");
    ui.add(
        egui::TextEdit::multiline(&mut app.ui_state.remote.instruction)
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );
    if ui.small_button("Reset instruction").clicked() {
        app.ui_state.remote.instruction = DEFAULT_INSTRUCTION.to_string();
    }
}

fn actions_section(ui: &mut egui::Ui, app: &mut VanishApp) {
    super::section_header(ui, "Actions", None);
    ui.add_space(4.0);

    let can_submit = app.session.is_some() && !app.ui_state.is_busy();
    if ui
        .add_enabled(
            can_submit,
            egui::Button::new("Remove Object").min_size(egui::vec2(ui.available_width(), 28.0)),
        )
        .clicked()
    {
        app.submit();
    }

    if app.ui_state.running == Some(Activity::Submitting) {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.small("Waiting for the edit service...");
        });
    }

    if app.result.is_some() {
        ui.add_space(4.0);
        let view_label = if app.view.viewing_result {
            "Back to Editing"
        } else {
            "View Result"
        };
        if ui
            .add(egui::Button::new(view_label).min_size(egui::vec2(ui.available_width(), 24.0)))
            .clicked()
        {
            app.view.viewing_result = !app.view.viewing_result;
        }
        if ui
            .add_enabled(
                !app.ui_state.is_busy(),
                egui::Button::new("Save Result...").min_size(egui::vec2(ui.available_width(), 24.0)),
            )
            .clicked()
        {
            super::pick_save_target(app);
        }
    }
}
