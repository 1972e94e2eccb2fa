mod app;
mod convert;
mod messages;
mod panels;
mod state;
mod worker;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([720.0, 540.0])
            .with_title("Vanish"),
        ..Default::default()
    };

    eframe::run_native(
        "Vanish",
        options,
        Box::new(|cc| Ok(Box::new(app::VanishApp::new(&cc.egui_ctx)))),
    )
}
