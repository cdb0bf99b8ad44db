//! SatSweep - Application Entry Point
//!
//! Loads configuration, initializes tracing, and runs the solver sweep.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use satsweep::{config::Config, error::AppResult, sweep::SweepRunner};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        tracing::error!(code = e.error_code(), "Sweep failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}

async fn run() -> AppResult<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.runner.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting satsweep...");

    let runner = SweepRunner::new(config);
    runner.run().await
}
