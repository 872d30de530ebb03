use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::nlu::Intent;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    pub intent: Intent,
    pub confidence: f64,
    /// Always empty; the stub extracts no entities.
    #[schema(value_type = Vec<Object>)]
    pub entities: Vec<serde_json::Value>,
    pub suggested_scenario: String,
    pub timestamp: i64,
}
