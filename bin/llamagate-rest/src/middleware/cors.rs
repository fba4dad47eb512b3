use tower_http::cors::{Any, CorsLayer};

/// Wildcard CORS, matching the surface this gateway re-exposes. There
/// is no credentialed access on this API.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any)
}
