use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ProcessRequest {
    pub session_id: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProcessResponse {
    pub session_id: String,
    pub user_message: String,
    pub bot_response: String,
    /// Node type of the reply; the mock always answers with `"announce"`.
    #[serde(rename = "type")]
    pub node_type: String,
    pub context_updated: bool,
    pub timestamp: i64,
}
