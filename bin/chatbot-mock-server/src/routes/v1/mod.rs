pub mod chat;
pub mod nlu;
pub mod orchestrator;
pub mod scenarios;

use crate::state::AppState;
use utoipa::OpenApi;

use axum::Router;
use std::sync::Arc;

/// Platform routes nested under `/api/v1`.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(chat::router())
        .merge(scenarios::router())
        .merge(nlu::router())
        .merge(orchestrator::router())
}

#[derive(OpenApi)]
#[openapi()]
pub struct V1Api;

pub fn api_docs() -> utoipa::openapi::OpenApi {
    let mut spec = V1Api::openapi();
    spec.merge(chat::ChatApi::openapi());
    spec.merge(scenarios::ScenariosApi::openapi());
    spec.merge(nlu::NluApi::openapi());
    spec.merge(orchestrator::OrchestratorApi::openapi());
    spec
}
