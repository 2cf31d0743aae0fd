//! `dev-proxy` — local development sidecar binary entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise logging.
//! 3. Start the HTTP accept loop, forwarding `/api` requests to the backend.
//!
//! This binary exists for local development only; production builds serve
//! the frontend and backend from the same origin and never ship it.
//!
//! [`Config`]: config::Config

mod config;
mod proxy;
mod telemetry;

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = config::Config::from_env().map_err(|e| {
        eprintln!("ERROR: dev-proxy configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;

    // -----------------------------------------------------------------------
    // 3. Proxy
    // -----------------------------------------------------------------------
    proxy::run(&cfg).await
}
