use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{Message, MessageType, Session, SessionStatus};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionCreatedResponse {
    pub session_id: String,
    /// Always `"created"`.
    pub status: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionListResponse {
    pub sessions: Vec<Session>,
    pub total: usize,
    pub timestamp: i64,
}

/// Body of `POST /api/v1/chat/messages`. Presence of `session_id` and
/// `content` is checked by the handler so a missing key yields the mock's
/// own 400 body instead of a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AddMessageRequest {
    pub session_id: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub message_type: MessageType,
    pub intent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageSavedResponse {
    pub session_id: String,
    pub message_saved: bool,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionMessagesResponse {
    pub session_id: String,
    pub messages: Vec<Message>,
    pub total: usize,
    pub timestamp: i64,
}

/// Condensed session view of the legacy dialogs page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DialogSummary {
    pub session_id: String,
    pub status: SessionStatus,
    pub message_count: u64,
    pub last_message: String,
}

impl From<Session> for DialogSummary {
    fn from(s: Session) -> Self {
        Self {
            session_id: s.session_id,
            status: s.status,
            message_count: s.message_count,
            last_message: s.last_message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DialogsResponse {
    pub dialogs: Vec<DialogSummary>,
    pub total: usize,
}
