//! HTTP forwarding from the dev-server origin to the backend API.
//!
//! For each incoming request the proxy:
//! 1. Checks the `/api` path prefix; anything else is answered `404`.
//! 2. Rewrites the request URI onto the configured target, keeping the path
//!    and query intact, and rewrites `Origin` and `Host` to the target so the
//!    backend sees a same-origin call.
//! 3. Forwards method, body, and the remaining headers unmodified.
//!
//! There is no retry: an unreachable backend surfaces to the caller as `502`.

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::State,
    http::{
        header,
        uri::{Authority, PathAndQuery, Scheme},
        HeaderValue, Request, StatusCode, Uri,
    },
    response::{IntoResponse, Response},
    Json, Router,
};
use common::{protocol::ErrorResponse, ServiceError};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;

type HttpClient = Client<HttpConnector, Body>;

/// Shared proxy state: one pooled client plus the resolved target.
#[derive(Clone)]
pub struct ProxyState {
    client: HttpClient,
    scheme: Scheme,
    authority: Authority,
}

impl ProxyState {
    /// Create the proxy state for a resolved backend target.
    pub fn new(scheme: Scheme, authority: Authority) -> Self {
        let client = Client::builder(TokioExecutor::new()).build_http();
        Self {
            client,
            scheme,
            authority,
        }
    }
}

/// Build the dev-proxy [`Router`].
///
/// A single fallback handler owns every path; the `/api` prefix check lives
/// in [`forward`] so the rule matches on the raw path string.
pub fn router(state: ProxyState) -> Router {
    Router::new()
        .fallback(forward)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Accept loop: serve the proxy router until the process is killed.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot be bound.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let (scheme, authority) = cfg.target();
    let upstream = format!("{scheme}://{authority}");
    let state = ProxyState::new(scheme, authority);
    let app = router(state);

    // Local development tool: bind the loopback interface only.
    let addr: SocketAddr = ([127, 0, 0, 1], cfg.listen_port).into();
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %addr, upstream = %upstream, "dev-proxy listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Forward one request to the backend target.
async fn forward(State(state): State<ProxyState>, req: Request<Body>) -> Response {
    if !req.uri().path().starts_with("/api") {
        let err = ServiceError::NotFound(req.uri().path().to_owned());
        return error_response(&err);
    }

    let upstream_req = match into_upstream(req, &state.scheme, &state.authority) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "failed to rewrite request for the backend target");
            let err = ServiceError::UpstreamUnreachable(e.to_string());
            return error_response(&err);
        }
    };

    match state.client.request(upstream_req).await {
        Ok(resp) => resp.into_response(),
        Err(e) => {
            warn!(error = %e, "backend target unreachable");
            let err = ServiceError::UpstreamUnreachable(e.to_string());
            error_response(&err)
        }
    }
}

/// Rewrite a dev-origin request onto the backend target.
///
/// The path and query are preserved verbatim; `Origin` and `Host` are
/// replaced with the target's origin and authority. Everything else —
/// method, body, remaining headers — passes through untouched.
fn into_upstream(
    req: Request<Body>,
    scheme: &Scheme,
    authority: &Authority,
) -> Result<Request<Body>, axum::http::Error> {
    let (mut parts, body) = req.into_parts();

    let path_and_query = parts
        .uri
        .path_and_query()
        .cloned()
        .unwrap_or_else(|| PathAndQuery::from_static("/"));

    parts.uri = Uri::builder()
        .scheme(scheme.clone())
        .authority(authority.clone())
        .path_and_query(path_and_query)
        .build()?;

    let origin = HeaderValue::from_str(&format!("{scheme}://{authority}"))?;
    let host = HeaderValue::from_str(authority.as_str())?;
    parts.headers.insert(header::ORIGIN, origin);
    parts.headers.insert(header::HOST, host);

    Ok(Request::from_parts(parts, body))
}

fn error_response(err: &ServiceError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(err.code(), err.to_string()))).into_response()
}
