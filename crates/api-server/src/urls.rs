//! URL generation with boot-time scheme enforcement.
//!
//! The generator is constructed exactly once, before the listener binds, so
//! the scheme decision holds for every URL produced during the process
//! lifetime. Handlers receive it through [`AppState`] — there is no ambient
//! global to mutate.
//!
//! [`AppState`]: crate::server::state::AppState

use tracing::warn;
use url::Url;

use crate::config::Config;

/// Generates absolute URLs from the configured application base URL.
#[derive(Debug, Clone)]
pub struct UrlGenerator {
    /// Scheme-enforced base URL. `None` when `APP_URL` is unset or does not
    /// parse; generated URLs then stay path-relative.
    base: Option<Url>,
}

impl UrlGenerator {
    /// Build the generator from the loaded configuration.
    ///
    /// When `force_https` is set, the base URL's scheme is rewritten to
    /// `https` here and never touched again. Construction cannot fail: a
    /// malformed `APP_URL` is logged and treated as absent.
    pub fn from_config(cfg: &Config) -> Self {
        let base = cfg.app_url.as_deref().and_then(|raw| match Url::parse(raw) {
            Ok(mut url) => {
                if cfg.force_https && url.scheme() != "https" && url.set_scheme("https").is_err() {
                    warn!(url = raw, "could not force https scheme on base URL");
                }
                Some(url)
            }
            Err(e) => {
                warn!(url = raw, error = %e, "APP_URL does not parse; generated URLs will be relative");
                None
            }
        });
        Self { base }
    }

    /// The scheme-enforced base URL, if one was configured.
    pub fn base(&self) -> Option<&Url> {
        self.base.as_ref()
    }

    /// Generate an absolute URL for `path`.
    ///
    /// Without a base URL the path is returned unchanged, which keeps links
    /// usable as same-origin relative references.
    pub fn absolute(&self, path: &str) -> String {
        match &self.base {
            Some(base) => base
                .join(path)
                .map_or_else(|_| path.to_owned(), |joined| joined.to_string()),
            None => path.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(app_url: Option<&str>, force_https: bool) -> Config {
        Config {
            force_https,
            app_url: app_url.map(str::to_owned),
            ..Config::default()
        }
    }

    #[test]
    fn forces_https_on_http_base() {
        let urls = UrlGenerator::from_config(&config(Some("http://example.test"), true));
        assert_eq!(urls.absolute("/login"), "https://example.test/login");
    }

    #[test]
    fn https_base_is_untouched() {
        let urls = UrlGenerator::from_config(&config(Some("https://example.test"), true));
        assert_eq!(urls.base().unwrap().scheme(), "https");
    }

    #[test]
    fn disabled_flag_leaves_scheme_alone() {
        let urls = UrlGenerator::from_config(&config(Some("http://example.test"), false));
        assert_eq!(urls.absolute("/login"), "http://example.test/login");
    }

    #[test]
    fn absent_base_yields_relative_paths() {
        let urls = UrlGenerator::from_config(&config(None, true));
        assert!(urls.base().is_none());
        assert_eq!(urls.absolute("/login"), "/login");
    }

    #[test]
    fn malformed_base_is_treated_as_absent() {
        let urls = UrlGenerator::from_config(&config(Some("not a url"), true));
        assert!(urls.base().is_none());
        assert_eq!(urls.absolute("/health"), "/health");
    }

    #[test]
    fn join_replaces_base_path() {
        let urls = UrlGenerator::from_config(&config(Some("http://example.test/app/"), true));
        assert_eq!(urls.absolute("/login"), "https://example.test/login");
    }
}
