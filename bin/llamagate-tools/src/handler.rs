//! Frame handling and action dispatch.

use serde_json::{json, Value};
use tracing::error;

use crate::proto::ToolRequest;
use crate::AppState;

const KNOWN_ACTIONS: &[&str] = &["generate", "chat", "list_models"];

/// Handle one inbound text frame and build the reply.
///
/// Protocol errors (malformed JSON, unknown action) are reported in the
/// reply; handler failures are reported inside `result` with
/// `status: "error"`. Nothing here closes the connection.
pub async fn handle_frame(state: &AppState, text: &str) -> Value {
    let frame: Value = match serde_json::from_str(text) {
        Ok(frame) => frame,
        Err(e) => return json!({ "error": format!("invalid JSON: {e}") }),
    };

    let id = frame.get("id").cloned().unwrap_or(Value::Null);
    let action = frame
        .get("action")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();

    if !KNOWN_ACTIONS.contains(&action.as_str()) {
        return json!({ "id": id, "error": format!("unknown action: {action}") });
    }

    let result = match serde_json::from_value::<ToolRequest>(frame) {
        Ok(request) => dispatch(state, request).await,
        Err(e) => error_result(format!("invalid {action} request: {e}")),
    };

    json!({ "id": id, "result": result })
}

/// Run one action against the upstream client and shape its result.
async fn dispatch(state: &AppState, request: ToolRequest) -> Value {
    match request {
        ToolRequest::Generate {
            prompt,
            model,
            temperature,
            max_tokens,
        } => {
            if prompt.is_empty() {
                return error_result("prompt is required");
            }
            let model = model.unwrap_or_else(|| state.config.default_model.clone());
            let temperature = temperature.unwrap_or(state.config.temperature);
            let max_tokens = max_tokens.unwrap_or(state.config.max_tokens);

            match state
                .client
                .generate_async(&prompt, &model, temperature, max_tokens)
                .await
            {
                Ok(result) => json!({
                    "text": result.text,
                    "model": model,
                    "status": "success",
                }),
                Err(e) => {
                    error!(error = %e, "generate failed");
                    error_result(e.to_string())
                }
            }
        }

        ToolRequest::Chat {
            messages,
            model,
            temperature,
            max_tokens,
        } => {
            if messages.is_empty() {
                return error_result("messages are required");
            }
            let model = model.unwrap_or_else(|| state.config.default_model.clone());
            let temperature = temperature.unwrap_or(state.config.temperature);
            let max_tokens = max_tokens.unwrap_or(state.config.max_tokens);

            match state
                .client
                .chat_async(&messages, &model, temperature, max_tokens)
                .await
            {
                Ok(result) => json!({
                    "message": { "role": "assistant", "content": result.text },
                    "model": model,
                    "status": "success",
                }),
                Err(e) => {
                    error!(error = %e, "chat failed");
                    error_result(e.to_string())
                }
            }
        }

        ToolRequest::ListModels {} => match state.client.list_models_async().await {
            Ok(models) => {
                let models: Vec<Value> = models
                    .into_iter()
                    .map(|m| {
                        json!({
                            "name": m.name,
                            "size": m.size,
                            "modified_at": m.modified_at,
                        })
                    })
                    .collect();
                json!({ "models": models, "status": "success" })
            }
            Err(e) => {
                error!(error = %e, "list_models failed");
                error_result(e.to_string())
            }
        },
    }
}

fn error_result(message: impl Into<String>) -> Value {
    json!({ "error": message.into(), "status": "error" })
}

// ── Tests ──────────────────────────────────────────────────────────────────────
