//! Telemetry initialization
//!
//! Logging is set up by an explicit call from the hosting binary before
//! first use, never as a module-load side effect.

use crate::config::Settings;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber. Call once from `main`; a second call
/// returns an error instead of silently replacing the subscriber.
pub fn init(settings: &Settings) -> Result<()> {
    let default_level = if settings.general.debug {
        "serpbait=debug,info"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("telemetry already initialized: {}", e))?;

    Ok(())
}
