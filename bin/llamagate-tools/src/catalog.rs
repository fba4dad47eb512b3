//! The advertised tool catalog.

use serde_json::{json, Value};

/// Description of every callable action, sent once per connection.
pub fn tool_catalog() -> Value {
    json!({
        "generate": {
            "description": "Generate text based on a prompt",
            "parameters": [
                {
                    "name": "prompt",
                    "description": "The prompt text to generate from",
                    "type": "string",
                    "required": true
                },
                {
                    "name": "model",
                    "description": "The model to use for generation",
                    "type": "string",
                    "required": false,
                    "default": "llama3"
                },
                {
                    "name": "temperature",
                    "description": "The sampling temperature (0-1)",
                    "type": "number",
                    "required": false,
                    "default": 0.7
                },
                {
                    "name": "max_tokens",
                    "description": "Maximum number of tokens to generate",
                    "type": "integer",
                    "required": false,
                    "default": 512
                }
            ]
        },
        "chat": {
            "description": "Chat with a model using a conversation history",
            "parameters": [
                {
                    "name": "messages",
                    "description": "List of chat messages",
                    "type": "array",
                    "required": true
                },
                {
                    "name": "model",
                    "description": "The model to use for chat",
                    "type": "string",
                    "required": false,
                    "default": "llama3"
                },
                {
                    "name": "temperature",
                    "description": "The sampling temperature (0-1)",
                    "type": "number",
                    "required": false,
                    "default": 0.7
                },
                {
                    "name": "max_tokens",
                    "description": "Maximum number of tokens to generate",
                    "type": "integer",
                    "required": false,
                    "default": 512
                }
            ]
        },
        "list_models": {
            "description": "List available models",
            "parameters": []
        }
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn catalog_covers_every_action() {
        let catalog = tool_catalog();
        for action in ["generate", "chat", "list_models"] {
            assert!(catalog.get(action).is_some(), "missing {action}");
            assert!(catalog[action].get("parameters").is_some());
        }
    }

    #[test]
    fn generate_defaults_match_the_client_contract() {
        let params = tool_catalog()["generate"]["parameters"].clone();
        let model = params
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["name"] == "model")
            .cloned()
            .unwrap();
        assert_eq!(model["default"], "llama3");
    }
}
