//! aqmon — a live air quality (PM2.5) dashboard fed by simulated readings.
//!
//! Run with:  `RUST_LOG=info aqmon`
//! Headless:  `aqmon --headless` logs each reading instead of opening a window.

use aqmon_config::{default_path, load as load_config};
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("aqmon v{} starting", env!("CARGO_PKG_VERSION"));

    if std::env::args().skip(1).any(|arg| arg == "--headless") {
        return run_headless();
    }

    aqmon_ui::run().map_err(Into::into)
}

/// Drive the sampling loop without a window, logging every tick.
fn run_headless() -> Result<()> {
    let config = load_config(default_path())?;
    let capacity = config
        .sampler
        .capacity()
        .context("sampler.capacity must be at least 1")?;
    let rows = config.sampler.table_rows;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let (_interval_tx, interval_rx) = tokio::sync::watch::channel(config.sampler.interval());
        let mut updates = aqmon_sampler::spawn_sampler(capacity, interval_rx);

        loop {
            tokio::select! {
                update = updates.recv() => {
                    let Some(update) = update else { break };
                    tracing::info!(
                        value = update.reading.value(),
                        timestamp = update.reading.timestamp(),
                        severity = update.severity.label(),
                        window = update.table.len(),
                        "reading"
                    );
                    for row in update.table.tail(rows).rows() {
                        tracing::debug!("  {:>5.1}  {}", row.value, row.timestamp);
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("interrupted; shutting down");
                    break;
                }
            }
        }
    });

    Ok(())
}
