//! HTTP service: page extraction and recipe suggestions.
//!
//! Configuration comes from flags or the matching environment variables, see
//! `leftover-server --help`.

use anyhow::Context;
use clap::Parser;
use leftover_chef::config::ServiceConfig;
use leftover_chef::service::{self, AppState};
use leftover_chef::telemetry;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::parse();
    telemetry::init_logging(config.log_format)?;

    let state = AppState::from_config(&config)?;
    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    service::serve(listener, state, shutdown_signal()).await?;
    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until killed.
        std::future::pending::<()>().await;
    }
}
