//! Terminal application entry point.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use storefront_catalog::HttpCatalogClient;
use storefront_core::Settings;
use storefront_core::settings::LOG_FILE_NAME;
use storefront_desktop::{AppState, frontend};

fn main() -> anyhow::Result<()> {
    // The terminal belongs to the UI, so logs go to a file.
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE_NAME)
        .with_context(|| format!("failed to open log file {LOG_FILE_NAME}"))?;
    storefront_observability::init_with_writer(Mutex::new(log_file));

    let settings = Settings::default();
    let client = HttpCatalogClient::new(settings.api_url.clone());

    // One blocking fetch before the interface comes up.
    let mut app = AppState::start(settings, &client);
    tracing::info!(status = %app.status().message, "application started");

    frontend::run(&mut app)?;

    tracing::info!("application closed");
    Ok(())
}
