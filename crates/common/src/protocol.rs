//! Response types exchanged between components.
//!
//! These types are serialised as JSON over the public API and are also what
//! the dev-proxy sidecar returns when it cannot reach the backend.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Health endpoint
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
///
/// The `time` field is the RFC 3339 instant captured when the request was
/// handled, with sub-second precision and an explicit UTC offset. Liveness
/// probes may compare successive values; within one process they never go
/// backwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Fixed literal `"ok"`.
    pub status: String,
    /// RFC 3339 timestamp captured at request time.
    pub time: String,
}

// ---------------------------------------------------------------------------
// Environment endpoint
// ---------------------------------------------------------------------------

/// Response body for `GET /env`.
///
/// Mirrors the non-secret application identity configuration. Keys that were
/// never set serialise as `null` rather than a synthesised fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvResponse {
    /// Value of `APP_NAME`, or `null` when unset.
    pub app: Option<String>,
    /// Value of `APP_URL`, or `null` when unset.
    pub url: Option<String>,
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable error code (e.g. `"not_found"`).
    pub code: String,
    /// Human-readable description safe to expose to callers.
    pub message: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
