//! Health / heartbeat endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use utoipa::OpenApi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_health))]
pub struct HealthApi;

/// Register health-check routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(get_health))
}

/// Heartbeat endpoint.
///
/// The gateway itself is always `"ok"` when this answers; the upstream
/// server is probed and reported as `"ok"` or `"down"`. Always 200.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Gateway and upstream status", body = Value)
    )
)]
pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let upstream_ok = state.client.health_async().await;
    Json(json!({
        "api_status": "ok",
        "ollama_status": if upstream_ok { "ok" } else { "down" },
    }))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use crate::routes::test_support::{state_with_upstream, state_without_upstream};

    #[tokio::test(flavor = "multi_thread")]
    async fn reports_upstream_ok() {
        let upstream = Router::new().route("/api/health", get(|| async { "ok" }));
        let state = state_with_upstream(upstream).await;

        let Json(body) = get_health(State(state)).await;
        assert_eq!(body["api_status"], "ok");
        assert_eq!(body["ollama_status"], "ok");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn reports_upstream_down_without_failing() {
        let state = state_without_upstream().await;

        let Json(body) = get_health(State(state)).await;
        assert_eq!(body["api_status"], "ok");
        assert_eq!(body["ollama_status"], "down");
    }
}
