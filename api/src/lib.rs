//! Game-version proxy for the statistics dashboard.
//!
//! The browser never talks to the upstream statistics service directly; this
//! thin axum layer forwards the version-list request and collapses every
//! failure into one fixed 500 body. No retry.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

/// Upstream fallback when `EWGF_UPSTREAM_URL` is unset.
pub const DEFAULT_UPSTREAM: &str = "http://localhost:8080";

#[derive(Clone)]
pub struct ProxyConfig {
    upstream: String,
    client: reqwest::Client,
}

impl ProxyConfig {
    pub fn new(upstream: impl Into<String>) -> Self {
        Self {
            upstream: upstream.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        let upstream =
            std::env::var("EWGF_UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM.to_string());
        Self::new(upstream)
    }
}

pub fn router(config: ProxyConfig) -> Router {
    Router::new()
        .route("/api/versions", get(game_versions))
        .with_state(config)
        .layer(TraceLayer::new_for_http())
}

async fn game_versions(State(config): State<ProxyConfig>) -> Response {
    match fetch_versions(&config).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "game version fetch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to fetch game versions"})),
            )
                .into_response()
        }
    }
}

async fn fetch_versions(config: &ProxyConfig) -> Result<Value, reqwest::Error> {
    config
        .client
        .get(format!("{}/statistics/gameVersions", config.upstream))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    async fn response_for(upstream: &str) -> (StatusCode, Value) {
        let app = router(ProxyConfig::new(upstream));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/versions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn unreachable_upstream_yields_fixed_error_body() {
        // Nothing listens on the discard port, so the forward fails fast.
        let (status, body) = response_for("http://127.0.0.1:9").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to fetch game versions"}));
    }

    #[tokio::test]
    async fn unknown_route_is_not_proxied() {
        let app = router(ProxyConfig::new("http://127.0.0.1:9"));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/players")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
