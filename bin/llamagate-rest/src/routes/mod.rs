//! Axum router construction.
//!
//! [`build`] assembles the complete application router: the four
//! gateway routes, CORS and trace-ID middleware, and the Swagger UI.

mod chat;
mod generate;
mod health;
mod models;

use std::sync::Arc;

use axum::{middleware, Router};
use utoipa_swagger_ui::SwaggerUi;

use crate::error::GatewayError;
use crate::middleware::{cors, trace};
use crate::state::AppState;

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: Arc<AppState>) -> Router {
    api_router()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", crate::doc::get_docs()))
        .layer(cors::cors_layer())
        .layer(middleware::from_fn(trace::trace_middleware))
        .with_state(state)
}

/// The gateway routes without middleware; tests call handlers through
/// this router directly.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health::router())
        .merge(models::router())
        .merge(generate::router())
        .merge(chat::router())
}

/// OpenAPI docs for every gateway route.
pub fn api_docs() -> utoipa::openapi::OpenApi {
    use utoipa::OpenApi;

    let mut docs = health::HealthApi::openapi();
    docs.merge(models::ModelsApi::openapi());
    docs.merge(generate::GenerateApi::openapi());
    docs.merge(chat::ChatApi::openapi());
    docs
}

/// Reject sampling parameters outside the bounds the upstream contract
/// mirrors: temperature within `[0, 1]`, max_tokens positive.
fn validate_sampling(temperature: f32, max_tokens: u32) -> Result<(), GatewayError> {
    if !(0.0..=1.0).contains(&temperature) {
        return Err(GatewayError::BadRequest(format!(
            "invalid temperature ({temperature}): must be between 0.0 and 1.0"
        )));
    }
    if max_tokens == 0 {
        return Err(GatewayError::BadRequest(
            "invalid max_tokens (0): must be positive".into(),
        ));
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────


#[cfg(test)]
pub(crate) mod test_support {
    //! Helpers shared by the per-route handler tests.

    use std::sync::Arc;

    use axum::Router;

    use llamagate_client::{Client, Config};

    use crate::state::AppState;

    /// Serve `upstream` on an ephemeral port and return a gateway state
    /// pointing at it.
    pub async fn state_with_upstream(upstream: Router) -> Arc<AppState> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, upstream).await.unwrap();
        });

        let mut config = Config::default();
        config.ollama_host = format!("http://{addr}");
        Arc::new(AppState {
            client: Client::new(config.ollama_host.clone()),
            config: Arc::new(config),
        })
    }

    /// A state whose upstream address has nothing listening on it.
    pub async fn state_without_upstream() -> Arc<AppState> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mut config = Config::default();
        config.ollama_host = format!("http://{addr}");
        Arc::new(AppState {
            client: Client::new(config.ollama_host.clone()),
            config: Arc::new(config),
        })
    }

    pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}
