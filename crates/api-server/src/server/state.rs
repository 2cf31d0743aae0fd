//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::config::Config;
use crate::urls::UrlGenerator;

/// Application state shared across all request handlers.
///
/// Everything in here is immutable after construction, so concurrent requests
/// read it without locking. Cloning is cheap (`Arc` plus a small value type).
#[derive(Clone)]
pub struct AppState {
    /// The configuration snapshot loaded at process start.
    pub config: Arc<Config>,
    /// The scheme-enforced URL generator built by the boot hook.
    pub urls: UrlGenerator,
}

impl AppState {
    /// Create a new [`AppState`], running the URL-scheme boot hook once.
    pub fn new(config: Config) -> Self {
        let urls = UrlGenerator::from_config(&config);
        Self {
            config: Arc::new(config),
            urls,
        }
    }
}

impl Default for AppState {
    /// Creates an [`AppState`] from an empty environment, suitable for tests.
    fn default() -> Self {
        Self::new(Config::default())
    }
}
