//! Common error types shared across crates.

use thiserror::Error;

/// Top-level service error type.
///
/// The taxonomy is deliberately small: configuration parse anomalies fall
/// back to documented defaults and never become errors, and bind failures
/// abort startup through `anyhow` before any of these can be produced.
///
/// Variants map to HTTP status codes returned to callers:
/// - [`ServiceError::NotFound`] → 404
/// - [`ServiceError::UpstreamUnreachable`] → 502
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No route matched the request path.
    #[error("not found: {0}")]
    NotFound(String),

    /// The dev-proxy could not reach the configured backend target.
    #[error("upstream unreachable: {0}")]
    UpstreamUnreachable(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 404,
            ServiceError::UpstreamUnreachable(_) => 502,
        }
    }

    /// Short machine-readable code used in [`ErrorResponse`] bodies.
    ///
    /// [`ErrorResponse`]: crate::protocol::ErrorResponse
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => "not_found",
            ServiceError::UpstreamUnreachable(_) => "upstream_unreachable",
        }
    }
}
