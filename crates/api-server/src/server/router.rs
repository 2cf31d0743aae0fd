//! Axum router construction.

use axum::{routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::{handlers, middleware, state::AppState};

/// Build the application [`Router`] with all routes and middleware attached.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/env", get(handlers::env))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(middleware::REQUEST_TIMEOUT))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{body::Body, http::Request};
    use axum_test::TestServer;
    use common::protocol::{EnvResponse, HealthResponse};
    use tower::ServiceExt;

    fn state(app_name: Option<&str>, app_url: Option<&str>) -> AppState {
        AppState::new(Config {
            app_name: app_name.map(str::to_owned),
            app_url: app_url.map(str::to_owned),
            ..Config::default()
        })
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let app = build(AppState::default());
        let req = Request::builder()
            .uri("/unknown")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn health_route_returns_ok() {
        let server = TestServer::new(build(AppState::default())).unwrap();
        let resp = server.get("/health").await;
        resp.assert_status_ok();

        let body: HealthResponse = resp.json();
        assert_eq!(body.status, "ok");
    }

    #[tokio::test]
    async fn env_reflects_configuration() {
        let app = build(state(Some("demo"), Some("https://demo.test")));
        let server = TestServer::new(app).unwrap();
        let resp = server.get("/env").await;
        resp.assert_status_ok();

        let body: EnvResponse = resp.json();
        assert_eq!(body.app.as_deref(), Some("demo"));
        assert_eq!(body.url.as_deref(), Some("https://demo.test"));
    }

    #[tokio::test]
    async fn env_returns_null_for_unset_keys() {
        let server = TestServer::new(build(state(None, None))).unwrap();
        let resp = server.get("/env").await;
        resp.assert_status_ok();

        let body: serde_json::Value = resp.json();
        assert!(body["app"].is_null());
        assert!(body["url"].is_null());
    }

    #[tokio::test]
    async fn env_preserves_empty_strings() {
        let server = TestServer::new(build(state(Some(""), Some("")))).unwrap();
        let resp = server.get("/env").await;

        let body: EnvResponse = resp.json();
        assert_eq!(body.app.as_deref(), Some(""));
        assert_eq!(body.url.as_deref(), Some(""));
    }
}
