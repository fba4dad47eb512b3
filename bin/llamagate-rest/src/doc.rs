use utoipa::OpenApi;

use crate::routes;

#[derive(OpenApi)]
#[openapi(info(
    title = "llamagate-rest",
    description = "REST gateway for a local LLM server",
    version = env!("CARGO_PKG_VERSION"),
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(routes::api_docs());
    root
}
