//! SearchPad - desktop search window.
//!
//! This binary provides the user-facing search interface:
//! - Query input with Ctrl/Cmd+K to refocus from anywhere
//! - Preset selector (general, news, papers, ...)
//! - Result cards with open-in-browser and copy-link actions

use eframe::egui;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use searchpad::config::AppConfig;
use searchpad::ui::SearchApp;

/// Main entry point for the SearchPad UI.
fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "searchpad=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("SearchPad starting");

    let config = AppConfig::load();
    info!(endpoint = %config.endpoint, preset = %config.default_preset, "configuration loaded");

    // Create tokio runtime for backend requests
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    // Configure eframe window
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "SearchPad",
        options,
        Box::new(move |cc| {
            Ok(Box::new(SearchApp::new(
                cc,
                runtime.handle().clone(),
                config,
            )))
        }),
    )
}
