pub mod canvas;
pub mod controls;
pub mod menu_bar;
pub mod status;

use crate::app::VanishApp;
use crate::messages::WorkerResult;

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}

/// Open a photo picker off the UI thread; the chosen path comes back
/// through the result channel.
pub(crate) fn pick_photo(app: &VanishApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "webp", "bmp", "gif", "tiff"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = result_tx.send(WorkerResult::PhotoPicked { path });
        }
    });
}

/// Save dialog for the edited result. Default file name follows the mime
/// type the service declared.
pub(crate) fn pick_save_target(app: &VanishApp) {
    let Some(result) = &app.result else {
        return;
    };
    let default_name = if result.mime == "image/jpeg" {
        "edited.jpg".to_string()
    } else {
        "edited.png".to_string()
    };

    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .add_filter("JPEG", &["jpg", "jpeg"])
            .set_file_name(default_name)
            .save_file()
        {
            let _ = result_tx.send(WorkerResult::SaveTargetPicked { path });
        }
    });
}
