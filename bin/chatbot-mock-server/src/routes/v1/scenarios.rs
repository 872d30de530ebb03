use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::entities::Scenario;
use crate::schemas::now_millis;
use crate::schemas::v1::scenarios::ScenarioListResponse;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(list_scenarios), components(schemas(ScenarioListResponse, Scenario)))]
pub struct ScenariosApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/scenarios", get(list_scenarios))
}

/// The static scenario catalog, served verbatim.
#[utoipa::path(
    get,
    path = "/api/v1/scenarios",
    tag = "scenarios",
    responses((status = 200, description = "Scenario catalog", body = ScenarioListResponse))
)]
pub async fn list_scenarios(State(state): State<Arc<AppState>>) -> Json<ScenarioListResponse> {
    let scenarios = state.catalog.list().to_vec();
    Json(ScenarioListResponse {
        count: scenarios.len(),
        scenarios,
        timestamp: now_millis(),
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::testing::{get_json, test_app};

    #[tokio::test]
    async fn catalog_is_served_unchanged_across_calls() {
        let (_, app) = test_app();
        let (status, first) = get_json(&app, "/api/v1/scenarios").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["count"], 2);
        assert_eq!(first["scenarios"][0]["id"], "greeting-001");
        assert_eq!(first["scenarios"][0]["tags"][0], "приветствие");
        assert_eq!(first["scenarios"][1]["id"], "help-001");
        assert_eq!(first["scenarios"][1]["is_active"], true);

        let (_, second) = get_json(&app, "/api/v1/scenarios").await;
        assert_eq!(first["scenarios"], second["scenarios"]);
    }
}
