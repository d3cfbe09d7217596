use std::path::PathBuf;

use clap::Parser;
use eframe::egui;

use cropdock::app::EditorApp;

#[derive(Parser, Debug)]
#[command(name = "cropdock", about = "Crop, resize, and export images", version)]
struct Cli {
    /// Image to open on startup.
    image: Option<PathBuf>,
}

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cropdock=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "cropdock",
        options,
        Box::new(move |_cc| Ok(Box::new(EditorApp::new(cli.image)))),
    )
}
