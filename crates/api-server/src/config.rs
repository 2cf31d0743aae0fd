//! Configuration loading for the backend service.
//!
//! All values are read from environment variables exactly once at startup and
//! parsed into a typed, immutable [`Config`]. Handlers never re-read or
//! re-parse the environment.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Raw environment values as the `config` crate hands them over. Everything
/// stays a string here; typing happens in [`Config::from_raw`].
#[derive(Debug, Clone, Deserialize)]
struct RawConfig {
    /// Whether generated URLs must use the `https` scheme.
    app_force_https: Option<String>,

    /// Public application name, surfaced verbatim by `GET /env`.
    app_name: Option<String>,

    /// Public base URL of the application, surfaced verbatim by `GET /env`
    /// and used as the base for generated absolute URLs.
    app_url: Option<String>,

    /// TCP port the HTTP server listens on.
    #[serde(default = "default_listen_port")]
    listen_port: u16,

    /// Tracing log level.
    #[serde(default = "default_log_level")]
    log_level: String,
}

/// Validated, typed backend configuration. Immutable after load.
#[derive(Debug, Clone)]
pub struct Config {
    /// Parsed `APP_FORCE_HTTPS`; `true` when absent or unparseable.
    pub force_https: bool,
    /// `APP_NAME`, kept absent when unset — never synthesised.
    pub app_name: Option<String>,
    /// `APP_URL`, kept absent when unset.
    pub app_url: Option<String>,
    /// `LISTEN_PORT`, default 8000.
    pub listen_port: u16,
    /// `LOG_LEVEL`, default `"info"`.
    pub log_level: String,
}

fn default_listen_port() -> u16 {
    8000
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error only when the environment cannot be read or a numeric
    /// variable such as `LISTEN_PORT` cannot be parsed. Malformed boolean
    /// values are not errors; they fall back to their documented defaults.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let raw: RawConfig = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        Self {
            force_https: parse_lenient_bool(raw.app_force_https.as_deref(), true),
            app_name: raw.app_name,
            app_url: raw.app_url,
            listen_port: raw.listen_port,
            log_level: raw.log_level,
        }
    }
}

impl Default for Config {
    /// Configuration as if the environment were empty. Used by tests.
    fn default() -> Self {
        Self {
            force_https: true,
            app_name: None,
            app_url: None,
            listen_port: default_listen_port(),
            log_level: default_log_level(),
        }
    }
}

/// Parse a boolean environment value leniently.
///
/// Absent and unrecognised spellings both yield `default`; a malformed flag
/// must never abort the boot sequence.
fn parse_lenient_bool(value: Option<&str>, default: bool) -> bool {
    match value {
        None => default,
        Some(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "on" | "yes" => true,
            "false" | "0" | "off" | "no" => false,
            _ => default,
        },
    }
}
