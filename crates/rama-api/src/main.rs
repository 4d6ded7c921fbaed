//! # rama-api: Binary Entry Point
//!
//! Starts the Axum HTTP server for the case lookup gateway.
//! Binds to all interfaces on `PORT` (default 8080).

use anyhow::Context;
use rama_api::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment. There is no fallback secret.
    let config = AppConfig::from_env()
        .inspect_err(|e| tracing::error!("Configuration invalid: {e}"))
        .context("failed to load configuration from environment")?;
    let port = config.port;

    let state = AppState::new(config);
    tracing::info!(
        provider = state.provider.provider_name(),
        "case provider configured"
    );

    let app = rama_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Rama API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
