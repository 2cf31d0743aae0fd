//! Configuration loading and validation for the dev-proxy sidecar.

use anyhow::{Context, Result};
use axum::http::{
    uri::{Authority, Scheme},
    Uri,
};
use serde::Deserialize;
use tracing::warn;

/// Fallback backend target when `VITE_PROXY_API` is unset or malformed.
const DEFAULT_TARGET: &str = "http://localhost:8000";

/// Validated dev-proxy configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// TCP port the dev server listens on.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Base URL of the backend API that the `/api` prefix is forwarded to.
    #[serde(default = "default_target")]
    pub vite_proxy_api: String,

    /// Tracing log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_listen_port() -> u16 {
    5173
}
fn default_target() -> String {
    DEFAULT_TARGET.into()
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment cannot be read or `LISTEN_PORT`
    /// cannot be parsed. A malformed `VITE_PROXY_API` is not fatal; it falls
    /// back to the default target in [`Config::target`].
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build dev-proxy configuration")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise dev-proxy configuration")?;

        Ok(c)
    }

    /// Resolve the backend target into its scheme and authority.
    ///
    /// Called once at startup. A value that is not an absolute URL falls back
    /// to `http://localhost:8000` with a warning; the dev server must come up
    /// regardless.
    pub fn target(&self) -> (Scheme, Authority) {
        match self.vite_proxy_api.parse::<Uri>() {
            Ok(uri) => {
                let parts = uri.into_parts();
                if let (Some(scheme), Some(authority)) = (parts.scheme, parts.authority) {
                    return (scheme, authority);
                }
                warn!(
                    configured = %self.vite_proxy_api,
                    "VITE_PROXY_API is not an absolute URL, falling back to default target"
                );
            }
            Err(e) => {
                warn!(
                    configured = %self.vite_proxy_api,
                    error = %e,
                    "VITE_PROXY_API does not parse, falling back to default target"
                );
            }
        }
        (Scheme::HTTP, Authority::from_static("localhost:8000"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(target: &str) -> Config {
        Config {
            listen_port: default_listen_port(),
            vite_proxy_api: target.into(),
            log_level: default_log_level(),
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(default_listen_port(), 5173);
        assert_eq!(default_target(), "http://localhost:8000");
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn target_resolves_default() {
        let (scheme, authority) = config(DEFAULT_TARGET).target();
        assert_eq!(scheme, Scheme::HTTP);
        assert_eq!(authority.as_str(), "localhost:8000");
    }

    #[test]
    fn target_resolves_override() {
        let (scheme, authority) = config("http://example.internal:9000").target();
        assert_eq!(scheme, Scheme::HTTP);
        assert_eq!(authority.as_str(), "example.internal:9000");
    }

    #[test]
    fn target_falls_back_on_relative_value() {
        let (scheme, authority) = config("/not-absolute").target();
        assert_eq!(scheme, Scheme::HTTP);
        assert_eq!(authority.as_str(), "localhost:8000");
    }

    #[test]
    fn target_falls_back_on_garbage() {
        let (_, authority) = config("not a url at all").target();
        assert_eq!(authority.as_str(), "localhost:8000");
    }
}
