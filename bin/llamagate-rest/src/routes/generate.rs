//! Text-generation endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::debug;
use utoipa::OpenApi;

use crate::error::GatewayError;
use crate::routes::validate_sampling;
use crate::schemas::{GenerateRequest, GenerateResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(generate), components(schemas(GenerateRequest, GenerateResponse)))]
pub struct GenerateApi;

/// Register generation routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/generate", post(generate))
}

/// Generate text from a prompt (`POST /generate`).
///
/// Missing model / sampling fields fall back to the configured
/// defaults; supplied values are validated against the same bounds the
/// upstream contract documents.
#[utoipa::path(
    post,
    path = "/generate",
    tag = "generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated text", body = GenerateResponse),
        (status = 400, description = "Invalid sampling parameters"),
        (status = 500, description = "Upstream failure"),
    )
)]
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, GatewayError> {
    let model = req.model.unwrap_or_else(|| state.config.default_model.clone());
    let temperature = req.temperature.unwrap_or(state.config.temperature);
    let max_tokens = req.max_tokens.unwrap_or(state.config.max_tokens);

    validate_sampling(temperature, max_tokens)?;

    debug!(model = %model, prompt_len = req.prompt.len(), "generate request");

    let result = state
        .client
        .generate_async(&req.prompt, &model, temperature, max_tokens)
        .await?;

    Ok(Json(GenerateResponse {
        text: result.text,
        model,
    }))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use crate::routes::test_support::{body_json, state_with_upstream};
    use axum::response::IntoResponse;
    use serde_json::json;

    fn request(prompt: &str) -> GenerateRequest {
        GenerateRequest {
            prompt: prompt.into(),
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn returns_upstream_text_with_default_model() {
        let upstream = Router::new().route(
            "/api/generate",
            post(|| async { Json(json!({ "response": "hi", "done": true })) }),
        );
        let state = state_with_upstream(upstream).await;

        let Json(reply) = generate(State(state), Json(request("hello"))).await.unwrap();
        assert_eq!(reply.text, "hi");
        assert_eq!(reply.model, "llama3");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn out_of_range_temperature_is_rejected_before_any_call() {
        let state = crate::routes::test_support::state_without_upstream().await;

        let req = GenerateRequest {
            temperature: Some(1.5),
            ..request("hello")
        };
        let err = generate(State(state), Json(req)).await.unwrap_err();
        let resp = err.into_response();
        assert_eq!(resp.status(), axum::http::StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert!(body["detail"].as_str().unwrap().contains("temperature"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn zero_max_tokens_is_rejected() {
        let state = crate::routes::test_support::state_without_upstream().await;

        let req = GenerateRequest {
            max_tokens: Some(0),
            ..request("hello")
        };
        let err = generate(State(state), Json(req)).await.unwrap_err();
        assert_eq!(
            err.into_response().status(),
            axum::http::StatusCode::BAD_REQUEST
        );
    }
}
