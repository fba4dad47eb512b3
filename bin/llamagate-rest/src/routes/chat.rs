//! Chat endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::debug;
use utoipa::OpenApi;

use crate::error::GatewayError;
use crate::routes::validate_sampling;
use crate::schemas::{ChatMessage, ChatRequest, ChatResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(chat), components(schemas(ChatMessage, ChatRequest, ChatResponse)))]
pub struct ChatApi;

/// Register chat routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/chat", post(chat))
}

/// Chat with the model using a conversation history (`POST /chat`).
#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply", body = ChatResponse),
        (status = 400, description = "Invalid sampling parameters"),
        (status = 500, description = "Upstream failure"),
    )
)]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, GatewayError> {
    let model = req.model.unwrap_or_else(|| state.config.default_model.clone());
    let temperature = req.temperature.unwrap_or(state.config.temperature);
    let max_tokens = req.max_tokens.unwrap_or(state.config.max_tokens);

    validate_sampling(temperature, max_tokens)?;

    let messages: Vec<llamagate_client::ChatMessage> =
        req.messages.into_iter().map(Into::into).collect();

    debug!(model = %model, turns = messages.len(), "chat request");

    let result = state
        .client
        .chat_async(&messages, &model, temperature, max_tokens)
        .await?;

    Ok(Json(ChatResponse {
        message: ChatMessage {
            role: "assistant".into(),
            content: result.text,
        },
        model,
    }))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use crate::routes::test_support::state_with_upstream;
    use axum::response::IntoResponse;
    use serde_json::json;

    #[tokio::test(flavor = "multi_thread")]
    async fn wraps_upstream_reply_as_assistant_message() {
        let upstream = Router::new().route(
            "/api/chat",
            post(|| async {
                Json(json!({
                    "message": { "role": "assistant", "content": "hello there" }
                }))
            }),
        );
        let state = state_with_upstream(upstream).await;

        let req = ChatRequest {
            messages: vec![ChatMessage {
                role: "user".into(),
                content: "hi".into(),
            }],
            model: Some("mistral".into()),
            temperature: None,
            max_tokens: None,
        };
        let Json(reply) = chat(State(state), Json(req)).await.unwrap();
        assert_eq!(reply.message.role, "assistant");
        assert_eq!(reply.message.content, "hello there");
        assert_eq!(reply.model, "mistral");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn sampling_validation_applies_here_too() {
        let state = crate::routes::test_support::state_without_upstream().await;

        let req = ChatRequest {
            messages: vec![],
            model: None,
            temperature: Some(-0.5),
            max_tokens: None,
        };
        let err = chat(State(state), Json(req)).await.unwrap_err();
        assert_eq!(
            err.into_response().status(),
            axum::http::StatusCode::BAD_REQUEST
        );
    }
}
