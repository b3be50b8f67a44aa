mod app;
mod convert;
mod input;
mod panels;
mod settings;
mod shortcuts;

use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = settings::load();
    let initial_file = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([320.0, 240.0])
            .with_title(config.window.title.clone())
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "imview",
        options,
        Box::new(|cc| Ok(Box::new(app::ImviewApp::new(&cc.egui_ctx, config, initial_file)))),
    )
}
