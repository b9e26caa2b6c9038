mod app;
mod config;
mod data;
mod projection;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use app::StatsheetApp;
use config::ViewerConfig;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    let config = ViewerConfig::load(std::env::args_os().nth(1).map(PathBuf::from))?;
    log::info!("reading stat tables from {}", config.data_dir.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Statsheet – Team Stats",
        options,
        Box::new(|_cc| Ok(Box::new(StatsheetApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("running viewer: {e}"))
}
