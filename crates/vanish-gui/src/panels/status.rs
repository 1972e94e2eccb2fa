use crate::app::VanishApp;

pub fn show(ctx: &egui::Context, app: &mut VanishApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Activity bar. The remote call reports no intermediate progress, so
        // the bar stays indeterminate while something runs.
        if let Some(activity) = app.ui_state.running {
            ui.add(
                egui::ProgressBar::new(0.0)
                    .text(format!("{activity}..."))
                    .animate(true),
            );
        } else {
            // Invisible placeholder — same height, no animation
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area — fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(ref session) = app.session {
                let source = session.source();
                let geometry = session.geometry();
                ui.label(format!("{}x{}", source.width(), source.height()));
                ui.separator();
                ui.label(format!("Canvas: {}x{}", geometry.width, geometry.height));
                ui.separator();
                ui.label(format!("Brush: {:.0} px", session.brush_size()));
            } else {
                ui.label("No photo loaded");
            }
        });

        ui.add_space(2.0);
    });
}
