//! Tracing subscriber initialization.
//!
//! Builds the global subscriber from `LoggerConfig`: env-filter level
//! (overridable via `RUST_LOG`), pretty or JSON formatting.

use tracing_subscriber::EnvFilter;

use crate::config::LoggerConfig;

/// Installs the global tracing subscriber. Call once at startup.
pub fn init_logger(config: &LoggerConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| anyhow::anyhow!("Invalid log level '{}': {e}", config.level))?;

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to install subscriber: {e}"))?;
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to install subscriber: {e}"))?;
        }
    }

    Ok(())
}
