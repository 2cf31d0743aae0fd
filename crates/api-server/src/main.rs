//! `api-server` — backend binary entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise structured JSON logging.
//! 3. Run the boot hook: construct the [`UrlGenerator`], forcing the `https`
//!    scheme when `APP_FORCE_HTTPS` is enabled (the default).
//! 4. Build the Axum router and start serving.
//!
//! [`UrlGenerator`]: urls::UrlGenerator

mod config;
mod server;
mod telemetry;
mod urls;

use anyhow::Result;
use tracing::info;
use url::Url;

use config::Config;
use server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        listen_port = cfg.listen_port,
        "api-server starting"
    );

    // -----------------------------------------------------------------------
    // 3. Boot hook: URL scheme enforcement, once, before any request
    // -----------------------------------------------------------------------
    let listen_port = cfg.listen_port;
    let force_https = cfg.force_https;
    let state = AppState::new(cfg);
    match state.urls.base().map(Url::as_str) {
        Some(base) => info!(force_https, base_url = base, "URL generation configured"),
        None => info!(force_https, "URL generation configured without a base URL"),
    }

    // -----------------------------------------------------------------------
    // 4. HTTP server
    // -----------------------------------------------------------------------
    let router = server::router::build(state);

    let addr: std::net::SocketAddr = ([0, 0, 0, 0], listen_port).into();
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
