//! App Download - Store banner, review form and rating dashboard
//!
//! A single-window egui application. Reviews live only for the session.

mod assets;
mod charts;
mod config;
mod data;
mod gui;
mod stats;

use anyhow::Context;
use config::AppConfig;
use eframe::egui;
use gui::AppDownloadApp;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = AppConfig::default_path();
    let config = AppConfig::load(&config_path).context("Failed to load configuration")?;

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([400.0, 500.0])
            .with_title(&config.window_title),
        ..Default::default()
    };

    log::info!(
        "Starting {} ({}x{})",
        config.window_title,
        config.window_size[0],
        config.window_size[1]
    );

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(AppDownloadApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {e}"))
}
