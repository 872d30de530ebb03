//! External API surface: fixed data endpoints and the chat driver that talks
//! to the ChatBot Platform.

use std::sync::Arc;

use anyhow::Context;
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use tracing::{error, info, warn};
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::extract::AppJson;
use crate::schemas::external::{
    ChatMessageRequest, ChatMessageResponse, ChatStartResponse, DataReceivedResponse, DemoResponse,
    DemoTurn,
};
use crate::schemas::{now_secs, present};
use crate::services::platform::PlatformError;
use crate::state::AppState;

const CHAT_INSTRUCTIONS: &str = "Используйте POST /chat/message для отправки сообщений";

#[derive(OpenApi)]
#[openapi(
    paths(
        get_data,
        post_data,
        get_info,
        get_users,
        get_complex_data,
        chat_start,
        chat_message,
        chat_demo
    ),
    components(schemas(
        DataReceivedResponse,
        ChatStartResponse,
        ChatMessageRequest,
        ChatMessageResponse,
        DemoTurn,
        DemoResponse
    ))
)]
pub struct ExternalApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/data", get(get_data).post(post_data))
        .route("/api/info", get(get_info))
        .route("/api/users", get(get_users))
        .route("/api/complex-data", get(get_complex_data))
        .route("/chat/start", post(chat_start))
        .route("/chat/message", post(chat_message))
        .route("/chat/demo", post(chat_demo))
}

// ── Fixed data endpoints ──────────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/api/data",
    tag = "external",
    responses((status = 200, description = "Data fixture stamped with the current time", body = Value))
)]
pub async fn get_data(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ServerError> {
    let mut data = state
        .fixtures
        .external
        .data
        .as_object()
        .cloned()
        .context("external data fixture is not a JSON object")?;
    data.insert("timestamp".to_owned(), now_secs().into());
    Ok(Json(Value::Object(data)))
}

/// Echoes the posted JSON back. A missing or unparsable body is echoed as `{}`.
#[utoipa::path(
    post,
    path = "/api/data",
    tag = "external",
    request_body = Value,
    responses((status = 200, description = "Body received", body = DataReceivedResponse))
)]
pub async fn post_data(body: Bytes) -> Json<DataReceivedResponse> {
    let received_data = serde_json::from_slice::<Value>(&body)
        .ok()
        .filter(|v| !v.is_null())
        .unwrap_or_else(|| Value::Object(Default::default()));

    Json(DataReceivedResponse {
        message: "Data received successfully".to_owned(),
        received_data,
        processed: true,
        id: format!("req_{}", now_secs()),
        status: "ok".to_owned(),
    })
}

#[utoipa::path(
    get,
    path = "/api/info",
    tag = "external",
    responses((status = 200, description = "Service information fixture", body = Value))
)]
pub async fn get_info(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(state.fixtures.external.info.clone())
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "external",
    responses((status = 200, description = "User list fixture", body = Value))
)]
pub async fn get_users(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(state.fixtures.external.users.clone())
}

#[utoipa::path(
    get,
    path = "/api/complex-data",
    tag = "external",
    responses((status = 200, description = "Nested analytics fixture", body = Value))
)]
pub async fn get_complex_data(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(state.fixtures.external.complex_data.clone())
}

// ── Chat driver ───────────────────────────────────────────────────────────────

fn upstream(context: &str, e: PlatformError) -> ServerError {
    error!(error = %e, "{context}");
    ServerError::Upstream(format!("{context}: {e}"))
}

/// Opens a session on the platform.
#[utoipa::path(
    post,
    path = "/chat/start",
    tag = "chat-driver",
    responses(
        (status = 200, description = "Platform session opened", body = ChatStartResponse),
        (status = 500, description = "Platform unavailable"),
    )
)]
pub async fn chat_start(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChatStartResponse>, ServerError> {
    let started = state
        .platform
        .create_session()
        .await
        .map_err(|e| upstream("Failed to create chat session", e))?;

    info!(
        session_id = started.session_id.as_deref().unwrap_or("-"),
        initial_message = started.initial_message.as_deref().unwrap_or("-"),
        "platform session started"
    );

    Ok(Json(ChatStartResponse {
        status: "chat_started".to_owned(),
        session_id: started.session_id,
        initial_message: started.initial_message,
        instructions: CHAT_INSTRUCTIONS.to_owned(),
    }))
}

/// Forwards one user message to the platform and relays the bot's answer.
#[utoipa::path(
    post,
    path = "/chat/message",
    tag = "chat-driver",
    request_body = ChatMessageRequest,
    responses(
        (status = 200, description = "Message relayed", body = ChatMessageResponse),
        (status = 400, description = "Missing session_id or message"),
        (status = 500, description = "Platform unavailable"),
    )
)]
pub async fn chat_message(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<ChatMessageRequest>,
) -> Result<Json<ChatMessageResponse>, ServerError> {
    let (Some(session_id), Some(message)) = (present(&req.session_id), present(&req.message))
    else {
        return Err(ServerError::missing("session_id or message"));
    };

    let turn = state
        .platform
        .send_message(session_id, message)
        .await
        .map_err(|e| upstream("Failed to send message", e))?;

    info!(
        session_id,
        user = message,
        bot = turn.bot_response.as_deref().unwrap_or("-"),
        "message relayed"
    );

    Ok(Json(ChatMessageResponse {
        status: "message_sent".to_owned(),
        user_message: message.to_owned(),
        bot_response: turn.bot_response,
        session_active: turn.session_active.unwrap_or(true),
    }))
}

/// Runs the scripted demo conversation against the platform.
///
/// An announce node at the start is skipped with a `continue` call. Turns
/// the platform rejects with a non-200 status are left out of the result;
/// a transport failure aborts the demo.
#[utoipa::path(
    post,
    path = "/chat/demo",
    tag = "chat-driver",
    responses(
        (status = 200, description = "Demo finished", body = DemoResponse),
        (status = 500, description = "Platform unavailable"),
    )
)]
pub async fn chat_demo(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DemoResponse>, ServerError> {
    let platform = &state.platform;
    let started = platform
        .create_session()
        .await
        .map_err(|e| upstream("Failed to create chat session", e))?;
    let Some(session_id) = started.session_id.clone().filter(|id| !id.is_empty()) else {
        error!("platform created a session without a session_id");
        return Err(ServerError::Upstream(
            "Failed to create chat session: no session_id in platform response".to_owned(),
        ));
    };
    info!(session_id = %session_id, "demo conversation started");

    if started.node_type.as_deref() == Some("announce") {
        match platform.continue_session(&session_id).await {
            Ok(turn) => info!(bot = turn.bot_response.as_deref().unwrap_or(""), "announce skipped"),
            Err(e) => warn!(error = %e, "continue after announce failed"),
        }
    }

    let mut conversation = Vec::with_capacity(state.fixtures.demo.messages.len());
    for message in &state.fixtures.demo.messages {
        tokio::time::sleep(state.config.demo_delay).await;

        match platform.send_message(&session_id, message).await {
            Ok(turn) => conversation.push(DemoTurn {
                user: message.clone(),
                bot: turn.bot_response,
                timestamp: now_secs(),
            }),
            Err(e @ PlatformError::Status { .. }) => {
                warn!(error = %e, message = %message, "demo message rejected");
            }
            Err(e) => return Err(upstream("Failed to send message", e)),
        }
    }

    info!(session_id = %session_id, turns = conversation.len(), "demo conversation completed");
    Ok(Json(DemoResponse {
        status: "demo_completed".to_owned(),
        session_id: Some(session_id),
        total_messages: conversation.len(),
        conversation,
    }))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
