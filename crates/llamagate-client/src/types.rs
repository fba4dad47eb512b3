//! Wire-facing data model shared by the client and the front-ends.
//!
//! Every value here is a fresh snapshot built from one server response;
//! nothing is cached or shared between calls.

use serde::{Deserialize, Serialize};

/// One entry from the server's model registry (`GET /api/tags`).
///
/// `name` is the identity key across list / get / delete operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    /// Size in bytes; `0` when the server omits it.
    #[serde(default)]
    pub size: u64,
    /// Server-formatted timestamp string; empty when omitted.
    #[serde(default)]
    pub modified_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    /// Free-form detail mapping, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Result of a generate or chat call.
///
/// `model` always echoes the caller-supplied model name. The performance
/// counters are only present when the server reports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub text: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default = "default_done")]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_eval_duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eval_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eval_duration: Option<i64>,
}

fn default_done() -> bool {
    true
}

/// A single turn in a chat conversation. The role string is forwarded
/// verbatim; validating it is the server's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}
