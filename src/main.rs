mod app;
mod color;
mod config;
mod data;
mod geo;
mod state;
mod ui;
mod view;

use std::path::Path;

use anyhow::{Context, Result};
use app::DashboardApp;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    // The dashboard cannot run without its data; fail before opening a window.
    let dataset = data::loader::load_csv(Path::new(config::DATA_PATH))
        .with_context(|| format!("loading {}", config::DATA_PATH))
        .inspect_err(|e| log::error!("Failed to load dataset: {e:#}"))?;
    log::info!(
        "Loaded {} cities with columns {:?}",
        dataset.len(),
        dataset.column_names
    );
    if dataset.is_empty() {
        log::warn!("Dataset has no rows; charts will stay empty");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::WINDOW_MIN_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        config::WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
