use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::debug;
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::extract::AppJson;
use crate::schemas::v1::ServiceStatusResponse;
use crate::schemas::v1::orchestrator::{ProcessRequest, ProcessResponse};
use crate::schemas::{now_millis, present};
use crate::services::nlu;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(orchestrator_status, process_message),
    components(schemas(ProcessRequest, ProcessResponse))
)]
pub struct OrchestratorApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/orchestrator/status", get(orchestrator_status))
        .route("/orchestrator/process", post(process_message))
}

#[utoipa::path(
    get,
    path = "/api/v1/orchestrator/status",
    tag = "orchestrator",
    responses((status = 200, description = "Orchestrator metadata", body = ServiceStatusResponse))
)]
pub async fn orchestrator_status(State(state): State<Arc<AppState>>) -> Json<ServiceStatusResponse> {
    Json(ServiceStatusResponse::running(&state.fixtures.services.orchestrator))
}

/// Answers a user message with one of the canned bot replies.
///
/// The session store is not consulted; any `session_id` is echoed back.
#[utoipa::path(
    post,
    path = "/api/v1/orchestrator/process",
    tag = "orchestrator",
    request_body = ProcessRequest,
    responses(
        (status = 200, description = "Bot reply", body = ProcessResponse),
        (status = 400, description = "Missing session_id or message"),
    )
)]
pub async fn process_message(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<ProcessRequest>,
) -> Result<Json<ProcessResponse>, ServerError> {
    let (Some(session_id), Some(message)) = (present(&req.session_id), present(&req.message))
    else {
        return Err(ServerError::missing("session_id or message"));
    };

    let bot_response = nlu::bot_reply(message, &state.fixtures.replies);
    debug!(session_id, bot_response, "orchestrator reply selected");

    Ok(Json(ProcessResponse {
        session_id: session_id.to_owned(),
        user_message: message.to_owned(),
        bot_response: bot_response.to_owned(),
        node_type: "announce".to_owned(),
        context_updated: true,
        timestamp: now_millis(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::testing::{get_json, post_json, test_app};

    async fn reply_for(message: &str) -> serde_json::Value {
        let (_, app) = test_app();
        let (status, body) = post_json(
            &app,
            "/api/v1/orchestrator/process",
            Some(json!({ "session_id": "s-1", "message": message })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body
    }

    #[tokio::test]
    async fn status_reports_coordinator_role() {
        let (_, app) = test_app();
        let (_, body) = get_json(&app, "/api/v1/orchestrator/status").await;
        assert_eq!(body["service"], "orchestrator");
        assert_eq!(body["role"], "main_coordinator");
        assert_eq!(body["status"], "running");
    }

    #[tokio::test]
    async fn greeting_gets_assistant_intro() {
        let body = reply_for("Привет!").await;
        assert_eq!(body["session_id"], "s-1");
        assert_eq!(body["user_message"], "Привет!");
        assert_eq!(
            body["bot_response"],
            "Привет! Я ваш банковский помощник. Що саме вас цікавить?"
        );
        assert_eq!(body["type"], "announce");
        assert_eq!(body["context_updated"], true);
    }

    #[tokio::test]
    async fn balance_and_fallback_replies() {
        assert_eq!(reply_for("мой баланс").await["bot_response"], "Проверяю ваш баланс...");
        assert_eq!(reply_for("пока").await["bot_response"], "Спасибо за ваше сообщение!");
    }

    #[tokio::test]
    async fn missing_message_is_400() {
        let (_, app) = test_app();
        let (status, body) = post_json(
            &app,
            "/api/v1/orchestrator/process",
            Some(json!({ "session_id": "s-1" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing session_id or message");
    }
}
