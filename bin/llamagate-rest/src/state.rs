//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use llamagate_client::{Client, Config};

/// State shared across all HTTP handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Upstream transport client (one configured base address).
    pub client: Client,
    /// Resolved configuration (defaults / file / env).
    pub config: Arc<Config>,
}
