use crate::entities::Scenario;

/// Static, read-only scenario list loaded from fixtures.
#[derive(Debug, Clone, Default)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    pub fn list(&self) -> &[Scenario] {
        &self.scenarios
    }
}
