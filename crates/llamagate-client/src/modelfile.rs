//! Model-definition documents.
//!
//! A modelfile is an ordered list of directive lines: one mandatory
//! `FROM` line, an optional `SYSTEM` line, and one `PARAMETER` line per
//! key/value pair. It is rendered to a transient text document for the
//! create-model endpoint and discarded afterwards.

/// Builder for a model-definition document.
#[derive(Debug, Clone, PartialEq)]
pub struct Modelfile {
    base_model: String,
    system_prompt: Option<String>,
    parameters: Vec<(String, String)>,
}

impl Modelfile {
    /// Start a definition deriving from `base_model`.
    pub fn new(base_model: impl Into<String>) -> Self {
        Self {
            base_model: base_model.into(),
            system_prompt: None,
            parameters: Vec::new(),
        }
    }

    /// Set the `SYSTEM` directive.
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Append one `PARAMETER` directive. Directives render in insertion
    /// order.
    pub fn parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push((key.into(), value.into()));
        self
    }

    /// Append `PARAMETER` directives for every pair, preserving order.
    pub fn parameters<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.parameters.push((key.into(), value.into()));
        }
        self
    }

    /// Render the directive list, one newline-terminated line each.
    pub fn render(&self) -> String {
        let mut out = format!("FROM {}\n", self.base_model);
        if let Some(prompt) = &self.system_prompt {
            out.push_str(&format!("SYSTEM {prompt}\n"));
        }
        for (key, value) in &self.parameters {
            out.push_str(&format!("PARAMETER {key} {value}\n"));
        }
        out
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
