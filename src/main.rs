//! # Enrollment Gateway
//!
//! HTTP gateway in front of the course, enrollment and student services.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Redis request/reply transport
//! - HTTP server

use anyhow::Result;
use tracing::info;

use enrollment_gateway::config::Settings;
use enrollment_gateway::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    enrollment_gateway::telemetry::init_tracing();

    info!("Starting Enrollment Gateway...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Gateway ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
