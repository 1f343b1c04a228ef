//! Twinscope - Digital twin dashboard
//!
//! Desktop front end for CSV insights, mock sensor charts and the process
//! simulation.

use anyhow::Context;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;
use twinscope::config::AppConfig;
use twinscope::gui::TwinscopeApp;

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    init_tracing(&config.log_filter);
    info!(tick_ms = config.tick_interval_ms, "starting Twinscope");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([1000.0, 640.0])
            .with_title("Twinscope"),
        ..Default::default()
    };

    eframe::run_native(
        "Twinscope",
        options,
        Box::new(move |cc| Ok(Box::new(TwinscopeApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
