//! Bodies of the external API surface (`/api/*`, `/chat/*`, `/health`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DataReceivedResponse {
    pub message: String,
    #[schema(value_type = Object)]
    pub received_data: serde_json::Value,
    pub processed: bool,
    pub id: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatStartResponse {
    /// Always `"chat_started"`.
    pub status: String,
    pub session_id: Option<String>,
    pub initial_message: Option<String>,
    pub instructions: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ChatMessageRequest {
    pub session_id: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatMessageResponse {
    /// Always `"message_sent"`.
    pub status: String,
    pub user_message: String,
    pub bot_response: Option<String>,
    pub session_active: bool,
}

/// One scripted exchange of `/chat/demo`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DemoTurn {
    pub user: String,
    pub bot: Option<String>,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DemoResponse {
    /// Always `"demo_completed"`.
    pub status: String,
    pub session_id: Option<String>,
    pub conversation: Vec<DemoTurn>,
    pub total_messages: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"UP"`.
    pub status: String,
    pub service: String,
    /// Result of a single-shot probe of the platform's `/health`.
    pub chatbot_available: bool,
}
