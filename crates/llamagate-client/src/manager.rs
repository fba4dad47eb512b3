//! Model lifecycle management on top of the transport client.
//!
//! Handles the two resources that need disciplined release: the
//! transient modelfile document (a [`tempfile::NamedTempFile`], removed
//! when the guard drops on any exit path) and ephemeral remote models
//! (deleted on scope exit, best-effort).

use std::io::Write;

use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::client::Client;
use crate::error::ClientError;
use crate::modelfile::Modelfile;
use crate::types::ModelInfo;

/// Manager for named models on one server.
pub struct ModelManager<'a> {
    client: &'a Client,
}

impl<'a> ModelManager<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List all models known to the server.
    pub fn list_models(&self) -> Result<Vec<ModelInfo>, ClientError> {
        self.client.list_models()
    }

    /// Find a model by name. Returns `None` when no model matches;
    /// absence is not an error.
    pub fn get_model(&self, name: &str) -> Result<Option<ModelInfo>, ClientError> {
        let models = self.list_models()?;
        Ok(models.into_iter().find(|m| m.name == name))
    }

    /// Create a named model derived from `base_model`, with an optional
    /// system prompt and parameter directives in the given order.
    ///
    /// The rendered modelfile lives in a temporary file only for the
    /// duration of the create call; the file is removed on every exit
    /// path, including API failure.
    pub fn create_model_from_template(
        &self,
        name: &str,
        base_model: &str,
        system_prompt: Option<&str>,
        parameters: &[(String, String)],
    ) -> Result<Value, ClientError> {
        let mut modelfile = Modelfile::new(base_model);
        if let Some(prompt) = system_prompt {
            modelfile = modelfile.system_prompt(prompt);
        }
        let modelfile = modelfile.parameters(parameters.iter().cloned());

        // The guard deletes the file when it drops, whether we return
        // normally or propagate an error.
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(modelfile.render().as_bytes())?;
        file.flush()?;

        self.client.create_model(name, file.path(), None)
    }

    /// Delete a named model.
    pub fn delete_model(&self, name: &str) -> Result<Value, ClientError> {
        self.client.delete_model(name)
    }

    /// Run `scope` with a freshly created ephemeral model.
    ///
    /// A unique name (`temp-` plus a random suffix) is generated per
    /// invocation and never reused. The model is deleted when the scope
    /// exits, normally or with an error. A deletion failure is logged
    /// as a warning and swallowed so it never masks the scope's own
    /// result.
    pub fn temporary_model<T, F>(
        &self,
        base_model: &str,
        system_prompt: Option<&str>,
        parameters: &[(String, String)],
        scope: F,
    ) -> Result<T, ClientError>
    where
        F: FnOnce(&str) -> Result<T, ClientError>,
    {
        let name = temp_model_name();

        self.create_model_from_template(&name, base_model, system_prompt, parameters)?;

        let result = scope(&name);

        if let Err(e) = self.delete_model(&name) {
            warn!(model = %name, error = %e, "failed to delete temporary model");
        }

        result
    }
}

/// `temp-` plus the first 8 hex digits of a fresh UUID. Collisions are
/// negligible, not cryptographically excluded.
fn temp_model_name() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("temp-{}", &suffix[..8])
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn temp_names_have_prefix_and_random_suffix() {
        let a = temp_model_name();
        let b = temp_model_name();
        assert!(a.starts_with("temp-"));
        assert_eq!(a.len(), "temp-".len() + 8);
        assert_ne!(a, b);
    }
}
