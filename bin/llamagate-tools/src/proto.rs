//! The inbound action protocol.
//!
//! Actions form a closed set: each variant carries its typed
//! parameters and dispatch is an exhaustive match, not a runtime name
//! lookup. The `id` is extracted separately from the raw frame so it
//! can be echoed even when the rest of the frame does not parse.

use serde::Deserialize;

use llamagate_client::ChatMessage;

/// One parsed tool request.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ToolRequest {
    Generate {
        #[serde(default)]
        prompt: String,
        #[serde(default)]
        model: Option<String>,
        #[serde(default)]
        temperature: Option<f32>,
        #[serde(default)]
        max_tokens: Option<u32>,
    },
    Chat {
        #[serde(default)]
        messages: Vec<ChatMessage>,
        #[serde(default)]
        model: Option<String>,
        #[serde(default)]
        temperature: Option<f32>,
        #[serde(default)]
        max_tokens: Option<u32>,
    },
    ListModels {},
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn generate_parses_with_defaults() {
        let req: ToolRequest =
            serde_json::from_value(json!({ "action": "generate", "prompt": "hi", "id": 1 }))
                .unwrap();
        match req {
            ToolRequest::Generate {
                prompt,
                model,
                temperature,
                max_tokens,
            } => {
                assert_eq!(prompt, "hi");
                assert!(model.is_none());
                assert!(temperature.is_none());
                assert!(max_tokens.is_none());
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn list_models_takes_no_parameters() {
        let req: ToolRequest =
            serde_json::from_value(json!({ "action": "list_models", "id": 7 })).unwrap();
        assert_eq!(req, ToolRequest::ListModels {});
    }

    #[test]
    fn unknown_action_fails_to_parse() {
        let err =
            serde_json::from_value::<ToolRequest>(json!({ "action": "explode" })).unwrap_err();
        assert!(err.to_string().contains("explode"));
    }

    #[test]
    fn chat_parses_messages() {
        let req: ToolRequest = serde_json::from_value(json!({
            "action": "chat",
            "messages": [{ "role": "user", "content": "hi" }],
            "model": "mistral",
        }))
        .unwrap();
        match req {
            ToolRequest::Chat {
                messages, model, ..
            } => {
                assert_eq!(messages.len(), 1);
                assert_eq!(messages[0].role, "user");
                assert_eq!(model.as_deref(), Some("mistral"));
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }
}
