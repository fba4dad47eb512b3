//! Unified gateway error type.
//!
//! Every handler returns `Result<T, GatewayError>`, which implements
//! [`axum::response::IntoResponse`] so errors are automatically
//! converted to a JSON-body HTTP response of the shape
//! `{"detail": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use llamagate_client::ClientError;

/// All errors that can occur in the gateway request lifecycle.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The upstream call failed; the error string becomes the detail.
    #[error("{0}")]
    Upstream(#[from] ClientError),

    /// The caller sent an invalid or malformed request.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            GatewayError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
            GatewayError::Upstream(e) => {
                error!(error = %e, "upstream call failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bad_request_maps_to_400() {
        let resp = GatewayError::BadRequest("nope".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_errors_map_to_500() {
        let err = GatewayError::Upstream(ClientError::Api {
            status: 404,
            message: "model not found".into(),
        });
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
