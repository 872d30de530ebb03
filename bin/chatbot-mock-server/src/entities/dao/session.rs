use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle state of a chat session. Set once, never transitioned by the mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Completed,
}

/// A tracked conversation, as held by the store and listed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Session {
    pub session_id: String,
    pub status: SessionStatus,
    pub start_time: DateTime<Utc>,
    pub message_count: u64,
    /// Content of the most recent message; empty until the first one.
    #[serde(default)]
    pub last_message: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub scenario_id: Option<String>,
}

impl Session {
    /// A fresh, empty, active session.
    pub fn new(session_id: String, start_time: DateTime<Utc>) -> Self {
        Self {
            session_id,
            status: SessionStatus::Active,
            start_time,
            message_count: 0,
            last_message: String::new(),
            user_id: None,
            scenario_id: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }
}
