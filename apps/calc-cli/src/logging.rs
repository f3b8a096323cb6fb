//! `tracing` subscriber setup.
//!
//! Logs go to stderr so stdout carries only results.

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Build the event filter. `RUST_LOG` wins over the configured level.
///
/// # Errors
/// Fails when the configured level is not a valid filter directive.
pub fn build_filter(cfg: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&cfg.level)
        .with_context(|| format!("invalid logging level: {:?}", cfg.level))
}

/// Install the global subscriber.
///
/// # Errors
/// Fails on an invalid filter or when a global subscriber is already set.
pub fn init_logging(cfg: &LoggingConfig) -> Result<()> {
    let filter = build_filter(cfg)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = if cfg.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
