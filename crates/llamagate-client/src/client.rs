//! HTTP transport client for the local LLM server.
//!
//! Every operation exists in a synchronous and an asynchronous variant.
//! Both build their request body and decode their response through the
//! same helpers, so identical server responses produce identical
//! results on either path. Each call opens a fresh transport session;
//! there is no connection pooling, retrying, or caching here.

use serde_json::{json, Value};

use crate::error::ClientError;
use crate::types::{ChatMessage, GenerationResult, ModelInfo};

/// Client for a single server base address, e.g. `http://localhost:11434`.
#[derive(Debug, Clone)]
pub struct Client {
    host: String,
}

impl Client {
    /// Create a client for `host`. A trailing `/` is trimmed so that
    /// endpoint paths can be appended unconditionally.
    pub fn new(host: impl Into<String>) -> Self {
        let mut host = host.into();
        while host.ends_with('/') {
            host.pop();
        }
        Self { host }
    }

    /// The configured base address (without trailing slash).
    pub fn host(&self) -> &str {
        &self.host
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.host, path)
    }

    // ── generate ─────────────────────────────────────────────────────────────

    /// Generate text from a prompt (`POST /api/generate`).
    ///
    /// Callers are expected to keep `temperature` within `[0, 1]` and
    /// `max_tokens` above zero; the values are forwarded unchecked.
    pub fn generate(
        &self,
        prompt: &str,
        model: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<GenerationResult, ClientError> {
        let body = generate_body(prompt, model, temperature, max_tokens);
        let data = self.post_sync("/api/generate", &body)?;
        Ok(parse_generate(&data, model))
    }

    /// Non-blocking variant of [`Client::generate`].
    pub async fn generate_async(
        &self,
        prompt: &str,
        model: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<GenerationResult, ClientError> {
        let body = generate_body(prompt, model, temperature, max_tokens);
        let data = self.post_async("/api/generate", &body).await?;
        Ok(parse_generate(&data, model))
    }

    // ── chat ─────────────────────────────────────────────────────────────────

    /// Chat with a model using a conversation history (`POST /api/chat`).
    ///
    /// The result's `done` flag is always `true`; the server's own value
    /// is ignored on this endpoint.
    pub fn chat(
        &self,
        messages: &[ChatMessage],
        model: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<GenerationResult, ClientError> {
        let body = chat_body(messages, model, temperature, max_tokens)?;
        let data = self.post_sync("/api/chat", &body)?;
        Ok(parse_chat(&data, model))
    }

    /// Non-blocking variant of [`Client::chat`].
    pub async fn chat_async(
        &self,
        messages: &[ChatMessage],
        model: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<GenerationResult, ClientError> {
        let body = chat_body(messages, model, temperature, max_tokens)?;
        let data = self.post_async("/api/chat", &body).await?;
        Ok(parse_chat(&data, model))
    }

    // ── model registry ───────────────────────────────────────────────────────

    /// List the models known to the server (`GET /api/tags`), in server
    /// response order.
    pub fn list_models(&self) -> Result<Vec<ModelInfo>, ClientError> {
        let data = self.get_sync("/api/tags")?;
        parse_models(&data)
    }

    /// Non-blocking variant of [`Client::list_models`].
    pub async fn list_models_async(&self) -> Result<Vec<ModelInfo>, ClientError> {
        let data = self.get_async("/api/tags").await?;
        parse_models(&data)
    }

    /// Create a named model from a modelfile on disk (`POST /api/create`).
    ///
    /// The create response shape is not fixed by this layer, so the
    /// decoded JSON body is returned verbatim.
    pub fn create_model(
        &self,
        name: &str,
        modelfile_path: &std::path::Path,
        system_prompt: Option<&str>,
    ) -> Result<Value, ClientError> {
        let modelfile = std::fs::read_to_string(modelfile_path)?;
        let body = create_body(name, &modelfile, system_prompt);
        self.post_sync("/api/create", &body)
    }

    /// Non-blocking variant of [`Client::create_model`].
    pub async fn create_model_async(
        &self,
        name: &str,
        modelfile_path: &std::path::Path,
        system_prompt: Option<&str>,
    ) -> Result<Value, ClientError> {
        let modelfile = std::fs::read_to_string(modelfile_path)?;
        let body = create_body(name, &modelfile, system_prompt);
        self.post_async("/api/create", &body).await
    }

    /// Delete a named model (`DELETE /api/delete`).
    pub fn delete_model(&self, name: &str) -> Result<Value, ClientError> {
        let body = json!({ "name": name });
        let resp = reqwest::blocking::Client::new()
            .delete(self.url("/api/delete"))
            .json(&body)
            .send()
            .map_err(ClientError::from_transport)?;
        decode_sync(resp)
    }

    /// Non-blocking variant of [`Client::delete_model`].
    pub async fn delete_model_async(&self, name: &str) -> Result<Value, ClientError> {
        let body = json!({ "name": name });
        let resp = reqwest::Client::new()
            .delete(self.url("/api/delete"))
            .json(&body)
            .send()
            .await
            .map_err(ClientError::from_transport)?;
        decode_async(resp).await
    }

    // ── health ───────────────────────────────────────────────────────────────

    /// Probe the server (`GET /api/health`). Returns `true` only for a
    /// 200 response; every failure, including transport errors, is
    /// absorbed into `false`. This is the one operation with no error
    /// channel.
    pub fn health(&self) -> bool {
        match reqwest::blocking::Client::new()
            .get(self.url("/api/health"))
            .send()
        {
            Ok(resp) => resp.status() == reqwest::StatusCode::OK,
            Err(_) => false,
        }
    }

    /// Non-blocking variant of [`Client::health`].
    pub async fn health_async(&self) -> bool {
        match reqwest::Client::new()
            .get(self.url("/api/health"))
            .send()
            .await
        {
            Ok(resp) => resp.status() == reqwest::StatusCode::OK,
            Err(_) => false,
        }
    }

    // ── transport ────────────────────────────────────────────────────────────

    fn get_sync(&self, path: &str) -> Result<Value, ClientError> {
        let resp = reqwest::blocking::Client::new()
            .get(self.url(path))
            .send()
            .map_err(ClientError::from_transport)?;
        decode_sync(resp)
    }

    fn post_sync(&self, path: &str, body: &Value) -> Result<Value, ClientError> {
        let resp = reqwest::blocking::Client::new()
            .post(self.url(path))
            .json(body)
            .send()
            .map_err(ClientError::from_transport)?;
        decode_sync(resp)
    }

    async fn get_async(&self, path: &str) -> Result<Value, ClientError> {
        let resp = reqwest::Client::new()
            .get(self.url(path))
            .send()
            .await
            .map_err(ClientError::from_transport)?;
        decode_async(resp).await
    }

    async fn post_async(&self, path: &str, body: &Value) -> Result<Value, ClientError> {
        let resp = reqwest::Client::new()
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(ClientError::from_transport)?;
        decode_async(resp).await
    }
}

// ── request bodies ────────────────────────────────────────────────────────────

fn generate_body(prompt: &str, model: &str, temperature: f32, max_tokens: u32) -> Value {
    json!({
        "model": model,
        "prompt": prompt,
        "temperature": temperature,
        "max_tokens": max_tokens,
    })
}

fn chat_body(
    messages: &[ChatMessage],
    model: &str,
    temperature: f32,
    max_tokens: u32,
) -> Result<Value, ClientError> {
    Ok(json!({
        "model": model,
        "messages": serde_json::to_value(messages)?,
        "temperature": temperature,
        "max_tokens": max_tokens,
    }))
}

fn create_body(name: &str, modelfile: &str, system_prompt: Option<&str>) -> Value {
    let mut body = json!({
        "name": name,
        "modelfile": modelfile,
    });
    if let Some(system) = system_prompt {
        body["system"] = Value::String(system.to_owned());
    }
    body
}

// ── response decoding ─────────────────────────────────────────────────────────

fn decode_sync(resp: reqwest::blocking::Response) -> Result<Value, ClientError> {
    let status = resp.status();
    let text = resp.text().map_err(ClientError::from_transport)?;
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: text,
        });
    }
    Ok(serde_json::from_str(&text)?)
}

async fn decode_async(resp: reqwest::Response) -> Result<Value, ClientError> {
    let status = resp.status();
    let text = resp.text().await.map_err(ClientError::from_transport)?;
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: text,
        });
    }
    Ok(serde_json::from_str(&text)?)
}

/// Map a generate response, defaulting every field the server omitted.
fn parse_generate(data: &Value, model: &str) -> GenerationResult {
    GenerationResult {
        text: str_field(data, "response"),
        model: model.to_owned(),
        created_at: opt_str_field(data, "created_at"),
        done: data.get("done").and_then(Value::as_bool).unwrap_or(true),
        total_duration: int_field(data, "total_duration"),
        load_duration: int_field(data, "load_duration"),
        prompt_eval_duration: int_field(data, "prompt_eval_duration"),
        eval_count: int_field(data, "eval_count"),
        eval_duration: int_field(data, "eval_duration"),
    }
}

/// Map a chat response. Text comes from the nested `message.content`
/// field and `done` is reported as `true` regardless of the server.
fn parse_chat(data: &Value, model: &str) -> GenerationResult {
    let text = data
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();
    GenerationResult {
        text,
        model: model.to_owned(),
        created_at: opt_str_field(data, "created_at"),
        done: true,
        total_duration: None,
        load_duration: None,
        prompt_eval_duration: None,
        eval_count: None,
        eval_duration: None,
    }
}

fn parse_models(data: &Value) -> Result<Vec<ModelInfo>, ClientError> {
    let entries = data
        .get("models")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let mut models = Vec::with_capacity(entries.len());
    for entry in entries {
        models.push(ModelInfo {
            name: str_field(&entry, "name"),
            size: entry.get("size").and_then(Value::as_u64).unwrap_or(0),
            modified_at: str_field(&entry, "modified_at"),
            digest: opt_str_field(&entry, "digest"),
            details: entry.get("details").filter(|d| !d.is_null()).cloned(),
        });
    }
    Ok(models)
}

fn str_field(data: &Value, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

fn opt_str_field(data: &Value, key: &str) -> Option<String> {
    data.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn int_field(data: &Value, key: &str) -> Option<i64> {
    data.get(key).and_then(Value::as_i64)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn host_trailing_slash_is_trimmed() {
        assert_eq!(Client::new("http://localhost:11434/").host(), "http://localhost:11434");
        assert_eq!(Client::new("http://localhost:11434").host(), "http://localhost:11434");
    }

    #[test]
    fn generate_body_has_exactly_four_fields() {
        let body = generate_body("hello", "llama3", 0.7, 512);
        let obj = body.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(body["model"], "llama3");
        assert_eq!(body["prompt"], "hello");
        assert_eq!(body["max_tokens"], 512);
    }

    #[test]
    fn create_body_system_is_optional() {
        let without = create_body("m", "FROM llama3\n", None);
        assert!(without.get("system").is_none());
        let with = create_body("m", "FROM llama3\n", Some("be concise"));
        assert_eq!(with["system"], "be concise");
    }

    #[test]
    fn parse_generate_defaults_missing_fields() {
        let data = json!({});
        let result = parse_generate(&data, "llama3");
        assert_eq!(result.text, "");
        assert_eq!(result.model, "llama3");
        assert!(result.done);
        assert!(result.created_at.is_none());
        assert!(result.total_duration.is_none());
    }

    #[test]
    fn parse_generate_maps_all_counters() {
        let data = json!({
            "response": "hi",
            "created_at": "2023-11-09T12:34:56Z",
            "done": false,
            "total_duration": 1234567890i64,
            "load_duration": 123456,
            "prompt_eval_duration": 234567,
            "eval_count": 100,
            "eval_duration": 345678,
        });
        let result = parse_generate(&data, "llama3");
        assert_eq!(result.text, "hi");
        assert_eq!(result.created_at.as_deref(), Some("2023-11-09T12:34:56Z"));
        assert!(!result.done);
        assert_eq!(result.total_duration, Some(1234567890));
        assert_eq!(result.eval_count, Some(100));
        assert_eq!(result.eval_duration, Some(345678));
    }

    #[test]
    fn parse_chat_reads_nested_content_and_forces_done() {
        let data = json!({
            "message": { "role": "assistant", "content": "hello there" },
            "done": false,
        });
        let result = parse_chat(&data, "llama3");
        assert_eq!(result.text, "hello there");
        assert!(result.done);
    }

    #[test]
    fn parse_chat_defaults_to_empty_text() {
        let result = parse_chat(&json!({}), "llama3");
        assert_eq!(result.text, "");
    }

    #[test]
    fn parse_models_preserves_order_and_defaults() {
        let data = json!({
            "models": [
                {
                    "name": "llama3",
                    "size": 4200000000u64,
                    "modified_at": "2023-11-09T12:34:56Z",
                    "digest": "sha256:abc123",
                    "details": { "some": "details" },
                },
                { "name": "mistral" },
            ]
        });
        let models = parse_models(&data).unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].name, "llama3");
        assert_eq!(models[0].size, 4200000000);
        assert_eq!(models[0].digest.as_deref(), Some("sha256:abc123"));
        assert_eq!(models[1].name, "mistral");
        assert_eq!(models[1].size, 0);
        assert_eq!(models[1].modified_at, "");
        assert!(models[1].digest.is_none());
        assert!(models[1].details.is_none());
    }

    #[test]
    fn parse_models_tolerates_missing_list() {
        assert!(parse_models(&json!({})).unwrap().is_empty());
    }
}
