//! Health endpoint with a single-shot probe of the ChatBot Platform.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::schemas::external::HealthResponse;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_health), components(schemas(HealthResponse)))]
pub struct HealthApi;

/// Register health-check routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(get_health))
}

/// Always `"UP"`. `chatbot_available` reflects one `GET {platform}/health`
/// bounded by the probe timeout.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    )
)]
pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_owned(),
        service: state.config.service_name.clone(),
        chatbot_available: state.platform.is_available().await,
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────────
