//! # Location Registry
//!
//! Application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Storage backend
//! - HTTP server

use anyhow::Result;
use tracing::info;

use location_registry::config::Settings;
use location_registry::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    location_registry::telemetry::init_tracing();

    info!("Starting Location Registry...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        backend = ?settings.storage.backend,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
