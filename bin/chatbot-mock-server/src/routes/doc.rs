use crate::routes::{external, health, v1};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "chatbot-mock-server",
    description = "Mock ChatBot Platform API: chat sessions, scenarios, NLU stub, orchestrator and external test endpoints",
    version = "0.1.0"
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(v1::api_docs());
    root.merge(external::ExternalApi::openapi());
    root.merge(health::HealthApi::openapi());
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_surface() {
        let doc = get_docs();
        for path in [
            "/api/v1/chat/sessions",
            "/api/v1/nlu/analyze",
            "/api/v1/orchestrator/process",
            "/api/v1/scenarios",
            "/chat/demo",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path} missing");
        }
    }
}
