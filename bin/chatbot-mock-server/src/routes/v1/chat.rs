//! Chat service routes: status, sessions, messages, legacy dialogs view.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::info;
use utoipa::OpenApi;

use crate::entities::Session;
use crate::error::ServerError;
use crate::extract::AppJson;
use crate::schemas::v1::ServiceStatusResponse;
use crate::schemas::v1::chat::{
    AddMessageRequest, DialogSummary, DialogsResponse, MessageSavedResponse,
    SessionCreatedResponse, SessionListResponse, SessionMessagesResponse,
};
use crate::schemas::{now_millis, present};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        chat_status,
        create_session,
        list_sessions,
        get_session,
        list_session_messages,
        add_message,
        list_dialogs
    ),
    components(schemas(
        ServiceStatusResponse,
        SessionCreatedResponse,
        SessionListResponse,
        AddMessageRequest,
        MessageSavedResponse,
        SessionMessagesResponse,
        DialogsResponse,
        DialogSummary
    ))
)]
pub struct ChatApi;

/// Register chat routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/chat/status", get(chat_status))
        .route("/chat/sessions", post(create_session).get(list_sessions))
        .route("/chat/sessions/{id}", get(get_session))
        .route("/chat/sessions/{id}/messages", get(list_session_messages))
        .route("/chat/messages", post(add_message))
        .route("/dialogs", get(list_dialogs))
}

#[utoipa::path(
    get,
    path = "/api/v1/chat/status",
    tag = "chat",
    responses((status = 200, description = "Chat service metadata and session counts", body = ServiceStatusResponse))
)]
pub async fn chat_status(State(state): State<Arc<AppState>>) -> Json<ServiceStatusResponse> {
    Json(ServiceStatusResponse {
        active_sessions: Some(state.store.active_sessions()),
        total_sessions: Some(state.store.total_sessions()),
        ..ServiceStatusResponse::running(&state.fixtures.services.chat)
    })
}

// ── Session handlers ──────────────────────────────────────────────────────────

#[utoipa::path(
    post,
    path = "/api/v1/chat/sessions",
    tag = "chat",
    responses((status = 200, description = "Session created", body = SessionCreatedResponse))
)]
pub async fn create_session(State(state): State<Arc<AppState>>) -> Json<SessionCreatedResponse> {
    let session = state.store.create_session();
    info!(session_id = %session.session_id, "chat session created");
    Json(SessionCreatedResponse {
        session_id: session.session_id,
        status: "created".to_owned(),
        timestamp: now_millis(),
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/chat/sessions",
    tag = "chat",
    responses((status = 200, description = "All sessions in insertion order", body = SessionListResponse))
)]
pub async fn list_sessions(State(state): State<Arc<AppState>>) -> Json<SessionListResponse> {
    let sessions = state.store.list_sessions();
    Json(SessionListResponse {
        total: sessions.len(),
        sessions,
        timestamp: now_millis(),
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/chat/sessions/{id}",
    tag = "chat",
    params(("id" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session found", body = Session),
        (status = 404, description = "Session not found"),
    )
)]
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Session>, ServerError> {
    state
        .store
        .get_session(&id)
        .map(Json)
        .ok_or_else(|| ServerError::NotFound("Session not found".to_owned()))
}

#[utoipa::path(
    get,
    path = "/api/v1/chat/sessions/{id}/messages",
    tag = "chat",
    params(("id" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Messages recorded in this process", body = SessionMessagesResponse),
        (status = 404, description = "Session not found"),
    )
)]
pub async fn list_session_messages(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionMessagesResponse>, ServerError> {
    let messages = state.store.list_messages(&id)?;
    Ok(Json(SessionMessagesResponse {
        session_id: id,
        total: messages.len(),
        messages,
        timestamp: now_millis(),
    }))
}

// ── Message handlers ──────────────────────────────────────────────────────────

#[utoipa::path(
    post,
    path = "/api/v1/chat/messages",
    tag = "chat",
    request_body = AddMessageRequest,
    responses(
        (status = 200, description = "Message recorded", body = MessageSavedResponse),
        (status = 400, description = "Missing session_id or content"),
        (status = 404, description = "Session not found"),
    )
)]
pub async fn add_message(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<AddMessageRequest>,
) -> Result<Json<MessageSavedResponse>, ServerError> {
    let (Some(session_id), Some(content)) = (present(&req.session_id), present(&req.content))
    else {
        return Err(ServerError::missing("session_id or content"));
    };

    let message = state
        .store
        .append_message(session_id, content, req.message_type, req.intent.clone())?;
    info!(session_id, message_id = %message.id, "message saved");

    Ok(Json(MessageSavedResponse {
        session_id: message.session_id,
        message_saved: true,
        timestamp: now_millis(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/dialogs",
    tag = "chat",
    responses((status = 200, description = "Condensed session list", body = DialogsResponse))
)]
pub async fn list_dialogs(State(state): State<Arc<AppState>>) -> Json<DialogsResponse> {
    let dialogs: Vec<DialogSummary> = state
        .store
        .list_sessions()
        .into_iter()
        .map(DialogSummary::from)
        .collect();
    Json(DialogsResponse {
        total: dialogs.len(),
        dialogs,
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::testing::{get_json, post_json, test_app};

    #[tokio::test]
    async fn status_counts_seed_sessions() {
        let (_, app) = test_app();
        let (status, body) = get_json(&app, "/api/v1/chat/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "chat-service");
        assert_eq!(body["status"], "running");
        assert_eq!(body["role"], "session_manager");
        assert_eq!(body["active_sessions"], 1);
        assert_eq!(body["total_sessions"], 2);
        assert!(body["timestamp"].as_i64().unwrap() > 1_700_000_000_000);
        assert!(body.get("version").is_none());
    }

    #[tokio::test]
    async fn created_session_is_listed_fresh() {
        let (_, app) = test_app();
        let (status, created) = post_json(&app, "/api/v1/chat/sessions", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["status"], "created");
        let id = created["session_id"].as_str().unwrap().to_owned();

        let (_, listed) = get_json(&app, "/api/v1/chat/sessions").await;
        assert_eq!(listed["total"], 3);
        let sessions = listed["sessions"].as_array().unwrap();
        assert_eq!(sessions[0]["session_id"], "session-001");
        let fresh = &sessions[2];
        assert_eq!(fresh["session_id"], id.as_str());
        assert_eq!(fresh["status"], "active");
        assert_eq!(fresh["message_count"], 0);
        assert_eq!(fresh["last_message"], "");
        assert!(fresh["user_id"].is_null());
    }

    #[tokio::test]
    async fn scripted_flow_counts_messages() {
        let (state, app) = test_app();
        let (_, created) = post_json(&app, "/api/v1/chat/sessions", None).await;
        let id = created["session_id"].as_str().unwrap().to_owned();

        for text in ["привет", "баланс"] {
            let (status, saved) = post_json(
                &app,
                "/api/v1/chat/messages",
                Some(json!({ "session_id": id, "content": text })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(saved["message_saved"], true);
            assert_eq!(saved["session_id"], id.as_str());
        }

        let (_, session) = get_json(&app, &format!("/api/v1/chat/sessions/{id}")).await;
        assert_eq!(session["message_count"], 2);
        assert_eq!(session["last_message"], "баланс");
        assert_eq!(state.store.list_messages(&id).unwrap().len(), 2);

        let (_, history) = get_json(&app, &format!("/api/v1/chat/sessions/{id}/messages")).await;
        assert_eq!(history["total"], 2);
        assert_eq!(history["messages"][0]["type"], "user");
        assert_eq!(history["messages"][1]["content"], "баланс");
    }

    #[tokio::test]
    async fn message_type_and_intent_are_recorded() {
        let (state, app) = test_app();
        let id = state.store.create_session().session_id;
        let (status, _) = post_json(
            &app,
            "/api/v1/chat/messages",
            Some(json!({
                "session_id": id,
                "content": "Проверяю ваш баланс...",
                "message_type": "bot",
                "intent": "check_balance"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let history = state.store.list_messages(&id).unwrap();
        assert_eq!(history[0].message_type, crate::entities::MessageType::Bot);
        assert_eq!(history[0].intent.as_deref(), Some("check_balance"));
    }

    #[tokio::test]
    async fn missing_fields_are_rejected() {
        let (state, app) = test_app();
        let id = state.store.create_session().session_id;

        for body in [
            json!({ "content": "привет" }),
            json!({ "session_id": id }),
            json!({ "session_id": id, "content": "" }),
        ] {
            let (status, err) = post_json(&app, "/api/v1/chat/messages", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(err["error"], "Missing session_id or content");
        }
        assert_eq!(state.store.get_session(&id).unwrap().message_count, 0);
    }

    #[tokio::test]
    async fn unknown_session_is_404_and_store_unchanged() {
        let (state, app) = test_app();
        let before = state.store.list_sessions();
        let (status, err) = post_json(
            &app,
            "/api/v1/chat/messages",
            Some(json!({ "session_id": "nope", "content": "привет" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(err["error"], "Session not found");
        assert_eq!(state.store.list_sessions(), before);

        let (status, _) = get_json(&app, "/api/v1/chat/sessions/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = get_json(&app, "/api/v1/chat/sessions/nope/messages").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_body_is_400_json() {
        let (_, app) = test_app();
        let (status, err) = crate::routes::testing::send_raw(
            &app,
            "POST",
            "/api/v1/chat/messages",
            Some("application/json"),
            "{not json",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(err["error"].is_string());
    }

    #[tokio::test]
    async fn dialogs_view_condenses_sessions() {
        let (_, app) = test_app();
        let (status, body) = get_json(&app, "/api/v1/dialogs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["dialogs"][0]["session_id"], "session-001");
        assert_eq!(body["dialogs"][0]["status"], "completed");
        assert_eq!(body["dialogs"][0]["message_count"], 8);
        assert!(body["dialogs"][0].get("start_time").is_none());
    }
}
