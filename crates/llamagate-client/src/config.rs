//! Configuration shared by every front-end.
//!
//! Resolution order: built-in defaults, then an optional JSON config
//! file, then environment variable overrides. The resolved [`Config`]
//! is constructed once at each entry point and passed by reference;
//! nothing here reads the environment after load time.

use std::path::PathBuf;

use serde::Deserialize;
use tracing::warn;

/// Bind address for one of the server front-ends.
#[derive(Debug, Clone, PartialEq)]
pub struct BindAddr {
    pub host: String,
    pub port: u16,
}

impl BindAddr {
    /// `host:port`, ready for a TCP listener.
    pub fn to_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the upstream LLM server.
    pub ollama_host: String,
    /// Model used when a request does not name one.
    pub default_model: String,
    /// Default sampling temperature.
    pub temperature: f32,
    /// Default generation budget in tokens.
    pub max_tokens: u32,
    /// Bind address for the REST front-end.
    pub rest: BindAddr,
    /// Bind address for the WebSocket tool adapter.
    pub tools: BindAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ollama_host: "http://localhost:11434".to_owned(),
            default_model: "llama3".to_owned(),
            temperature: 0.7,
            max_tokens: 512,
            rest: BindAddr {
                host: "0.0.0.0".to_owned(),
                port: 8000,
            },
            tools: BindAddr {
                host: "0.0.0.0".to_owned(),
                port: 8080,
            },
        }
    }
}

/// On-disk shape of the config file. Every field is optional; missing
/// fields keep their current value, unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    ollama_host: Option<String>,
    default_model: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    api: Option<FileBind>,
    tools: Option<FileBind>,
}

#[derive(Debug, Default, Deserialize)]
struct FileBind {
    host: Option<String>,
    port: Option<u16>,
}

impl Config {
    /// Resolve configuration from defaults, the default config file
    /// location, and the process environment.
    pub fn load() -> Self {
        let path = std::env::var("LLAMAGATE_CONFIG")
            .map(PathBuf::from)
            .ok()
            .or_else(default_config_path);
        Self::load_from(path.as_deref(), |key| std::env::var(key).ok())
    }

    /// Resolve configuration with an explicit file path and environment
    /// lookup. The lookup is injected so precedence is testable without
    /// touching process state.
    pub fn load_from(
        path: Option<&std::path::Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let mut config = Config::default();
        if let Some(path) = path {
            config.apply_file(path);
        }
        config.apply_env(env);
        config
    }

    fn apply_file(&mut self, path: &std::path::Path) {
        if !path.exists() {
            return;
        }
        let file: FileConfig = match std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()))
        {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable config file");
                return;
            }
        };

        if let Some(v) = file.ollama_host {
            self.ollama_host = v;
        }
        if let Some(v) = file.default_model {
            self.default_model = v;
        }
        if let Some(v) = file.temperature {
            self.temperature = v;
        }
        if let Some(v) = file.max_tokens {
            self.max_tokens = v;
        }
        if let Some(api) = file.api {
            if let Some(host) = api.host {
                self.rest.host = host;
            }
            if let Some(port) = api.port {
                self.rest.port = port;
            }
        }
        if let Some(tools) = file.tools {
            if let Some(host) = tools.host {
                self.tools.host = host;
            }
            if let Some(port) = tools.port {
                self.tools.port = port;
            }
        }
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(v) = env("OLLAMA_HOST") {
            self.ollama_host = v;
        }
        if let Some(v) = env("OLLAMA_MODEL") {
            self.default_model = v;
        }
        if let Some(v) = env("API_HOST") {
            self.rest.host = v;
        }
        if let Some(port) = env("API_PORT").and_then(|v| v.parse().ok()) {
            self.rest.port = port;
        }
        if let Some(v) = env("TOOLS_HOST") {
            self.tools.host = v;
        }
        if let Some(port) = env("TOOLS_PORT").and_then(|v| v.parse().ok()) {
            self.tools.port = port;
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|dir| dir.join("llamagate").join("config.json"))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
