//! Request / response types for the REST surface.
//!
//! These are deliberately separate from the core library types: the
//! REST surface exposes a smaller shape (`{"text", "model"}`) than the
//! full [`llamagate_client::GenerationResult`].

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /generate`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Prompt text to generate from.
    pub prompt: String,
    /// Model to use; falls back to the configured default.
    pub model: Option<String>,
    /// Sampling temperature, must be within `[0, 1]`.
    pub temperature: Option<f32>,
    /// Generation budget in tokens, must be positive.
    pub max_tokens: Option<u32>,
}

/// Response body for `POST /generate`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    pub text: String,
    pub model: String,
}

/// One chat turn on the REST surface.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl From<ChatMessage> for llamagate_client::ChatMessage {
    fn from(msg: ChatMessage) -> Self {
        llamagate_client::ChatMessage::new(msg.role, msg.content)
    }
}

/// Request body for `POST /chat`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// Ordered conversation history.
    pub messages: Vec<ChatMessage>,
    pub model: Option<String>,
    /// Sampling temperature, must be within `[0, 1]`.
    pub temperature: Option<f32>,
    /// Generation budget in tokens, must be positive.
    pub max_tokens: Option<u32>,
}

/// Response body for `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub message: ChatMessage,
    pub model: String,
}

/// One model entry as exposed by `GET /models`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModelInfo {
    pub name: String,
    pub size: u64,
    pub modified_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<llamagate_client::ModelInfo> for ModelInfo {
    fn from(m: llamagate_client::ModelInfo) -> Self {
        Self {
            name: m.name,
            size: m.size,
            modified_at: m.modified_at,
            digest: m.digest,
            details: m.details,
        }
    }
}

/// Response body for `GET /models`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModelListResponse {
    pub models: Vec<ModelInfo>,
}
