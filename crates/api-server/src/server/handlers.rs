//! Axum request handlers for all service endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use common::protocol::{EnvResponse, ErrorResponse, HealthResponse};

use super::state::AppState;

/// `GET /health` — liveness probe.
///
/// Always `200 OK`. Reads nothing but the system clock; in particular it
/// never consults configuration, so it stays green regardless of how the
/// process was configured.
pub async fn health() -> Response {
    let body = HealthResponse {
        status: "ok".into(),
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// `GET /env` — non-secret environment introspection.
///
/// Surfaces `APP_NAME` and `APP_URL` exactly as configured. Unset keys come
/// back as `null`, never an error. No credentials pass through here.
pub async fn env(State(state): State<AppState>) -> Response {
    let body = EnvResponse {
        app: state.config.app_name.clone(),
        url: state.config.app_url.clone(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    let err = ErrorResponse::new("not_found", "the requested resource does not exist");
    (StatusCode::NOT_FOUND, Json(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[tokio::test]
    async fn health_reports_ok_with_parseable_time() {
        let resp = health().await;
        assert_eq!(resp.status(), 200);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.status, "ok");
        assert!(DateTime::parse_from_rfc3339(&body.time).is_ok());
    }

    #[tokio::test]
    async fn health_time_is_monotonic() {
        let first = health().await;
        let second = health().await;

        let t1 = time_of(first).await;
        let t2 = time_of(second).await;
        assert!(t2 >= t1, "{t2} should not precede {t1}");
    }

    async fn time_of(resp: Response) -> DateTime<chrono::FixedOffset> {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: HealthResponse = serde_json::from_slice(&bytes).unwrap();
        DateTime::parse_from_rfc3339(&body.time).unwrap()
    }
}
