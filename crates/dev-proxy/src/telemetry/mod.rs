//! Telemetry initialisation for the dev-proxy sidecar.
//!
//! The proxy is a local development tool, so it uses human-readable compact
//! logs rather than the backend's JSON output.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialise the tracing subscriber for the dev-proxy sidecar.
///
/// # Errors
///
/// Returns an error if the subscriber has already been set.
pub fn init(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise dev-proxy tracing subscriber: {e}"))
}
