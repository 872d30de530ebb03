use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::debug;
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::extract::AppJson;
use crate::schemas::now_millis;
use crate::schemas::v1::ServiceStatusResponse;
use crate::schemas::v1::nlu::{AnalyzeRequest, AnalyzeResponse};
use crate::services::nlu::{self, Intent};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(nlu_status, analyze_text),
    components(schemas(AnalyzeRequest, AnalyzeResponse, Intent))
)]
pub struct NluApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/nlu/status", get(nlu_status))
        .route("/nlu/analyze", post(analyze_text))
}

#[utoipa::path(
    get,
    path = "/api/v1/nlu/status",
    tag = "nlu",
    responses((status = 200, description = "NLU service metadata", body = ServiceStatusResponse))
)]
pub async fn nlu_status(State(state): State<Arc<AppState>>) -> Json<ServiceStatusResponse> {
    Json(ServiceStatusResponse::running(&state.fixtures.services.nlu))
}

/// Keyword intent detection. `entities` is always empty.
#[utoipa::path(
    post,
    path = "/api/v1/nlu/analyze",
    tag = "nlu",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Detected intent", body = AnalyzeResponse),
        (status = 400, description = "Missing text"),
    )
)]
pub async fn analyze_text(
    AppJson(req): AppJson<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ServerError> {
    let text = req.text.ok_or_else(|| ServerError::missing("text"))?;
    let result = nlu::classify(&text);
    debug!(intent = %result.intent, confidence = result.confidence, "text analyzed");

    Ok(Json(AnalyzeResponse {
        intent: result.intent,
        confidence: result.confidence,
        entities: Vec::new(),
        suggested_scenario: result.intent.suggested_scenario().to_owned(),
        timestamp: now_millis(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::testing::{get_json, post_json, test_app};

    #[tokio::test]
    async fn status_reports_version() {
        let (_, app) = test_app();
        let (status, body) = get_json(&app, "/api/v1/nlu/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "nlu-service");
        assert_eq!(body["role"], "natural_language_understanding");
        assert_eq!(body["version"], "1.0.0");
    }

    #[tokio::test]
    async fn greeting_suggests_greeting_scenario() {
        let (_, app) = test_app();
        let (status, body) =
            post_json(&app, "/api/v1/nlu/analyze", Some(json!({ "text": "Привет, как дела" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["intent"], "greeting");
        assert_eq!(body["confidence"], 0.95);
        assert_eq!(body["entities"], json!([]));
        assert_eq!(body["suggested_scenario"], "greeting-001");
    }

    #[tokio::test]
    async fn balance_and_unknown_suggest_help() {
        let (_, app) = test_app();
        let (_, body) =
            post_json(&app, "/api/v1/nlu/analyze", Some(json!({ "text": "проверить баланс" }))).await;
        assert_eq!(body["intent"], "check_balance");
        assert_eq!(body["confidence"], 0.89);
        assert_eq!(body["suggested_scenario"], "help-001");

        let (_, body) =
            post_json(&app, "/api/v1/nlu/analyze", Some(json!({ "text": "что угодно ещё" }))).await;
        assert_eq!(body["intent"], "unknown");
        assert_eq!(body["confidence"], 0.5);
        assert_eq!(body["suggested_scenario"], "help-001");
    }

    #[tokio::test]
    async fn missing_text_is_400() {
        let (_, app) = test_app();
        let (status, body) = post_json(&app, "/api/v1/nlu/analyze", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing text");
    }
}
