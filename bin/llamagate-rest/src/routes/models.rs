//! Model-listing endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::error::GatewayError;
use crate::schemas::{ModelInfo, ModelListResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(list_models), components(schemas(ModelInfo, ModelListResponse)))]
pub struct ModelsApi;

/// Register model routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/models", get(list_models))
}

/// List the models known to the upstream server (`GET /models`),
/// preserving upstream order.
#[utoipa::path(
    get,
    path = "/models",
    tag = "models",
    responses(
        (status = 200, description = "Available models", body = ModelListResponse),
        (status = 500, description = "Upstream failure"),
    )
)]
pub async fn list_models(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ModelListResponse>, GatewayError> {
    let models = state.client.list_models_async().await?;
    Ok(Json(ModelListResponse {
        models: models.into_iter().map(ModelInfo::from).collect(),
    }))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use crate::routes::test_support::{state_with_upstream, state_without_upstream};
    use axum::response::IntoResponse;
    use serde_json::json;

    #[tokio::test(flavor = "multi_thread")]
    async fn passes_upstream_list_through_in_order() {
        let upstream = Router::new().route(
            "/api/tags",
            get(|| async {
                Json(json!({
                    "models": [
                        { "name": "llama3", "size": 42, "modified_at": "t1" },
                        { "name": "mistral" },
                    ]
                }))
            }),
        );
        let state = state_with_upstream(upstream).await;

        let Json(reply) = list_models(State(state)).await.unwrap();
        assert_eq!(reply.models.len(), 2);
        assert_eq!(reply.models[0].name, "llama3");
        assert_eq!(reply.models[1].name, "mistral");
        assert_eq!(reply.models[1].size, 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn upstream_failure_becomes_500_with_detail() {
        let state = state_without_upstream().await;

        let err = list_models(State(state)).await.unwrap_err();
        let resp = err.into_response();
        assert_eq!(resp.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        let body = crate::routes::test_support::body_json(resp).await;
        assert!(body["detail"].as_str().unwrap().contains("cannot reach server"));
    }
}
