pub mod chat;
pub mod nlu;
pub mod orchestrator;
pub mod scenarios;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::fixtures::ServiceInfo;

/// Body of every `GET /api/v1/<service>/status`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceStatusResponse {
    pub service: String,
    /// Always `"running"`.
    pub status: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_sessions: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sessions: Option<usize>,
    pub timestamp: i64,
}

impl ServiceStatusResponse {
    pub fn running(info: &ServiceInfo) -> Self {
        Self {
            service: info.service.clone(),
            status: "running".to_owned(),
            role: info.role.clone(),
            version: info.version.clone(),
            active_sessions: None,
            total_sessions: None,
            timestamp: super::now_millis(),
        }
    }
}
