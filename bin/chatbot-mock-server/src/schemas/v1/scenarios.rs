use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::Scenario;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScenarioListResponse {
    pub scenarios: Vec<Scenario>,
    pub count: usize,
    pub timestamp: i64,
}
