//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use anyhow::Context;

use crate::config::Config;
use crate::entities::{MemoryStore, ScenarioCatalog};
use crate::fixtures::Fixtures;
use crate::services::PlatformClient;

/// State shared across all HTTP handlers.
///
/// Each instance owns its own store, so tests build one per case.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Response fixtures the handlers answer with.
    pub fixtures: Arc<Fixtures>,
    /// Sessions and message history.
    pub store: Arc<MemoryStore>,
    /// Read-only scenario list.
    pub catalog: Arc<ScenarioCatalog>,
    /// Outbound client for the ChatBot Platform.
    pub platform: PlatformClient,
}

impl AppState {
    pub fn new(config: Config, fixtures: Fixtures) -> anyhow::Result<Self> {
        let platform = PlatformClient::new(
            config.platform_url.clone(),
            config.upstream_timeout,
            config.probe_timeout,
        )
        .context("failed to build platform HTTP client")?;

        Ok(Self {
            store: Arc::new(MemoryStore::seeded(fixtures.sessions.clone())),
            catalog: Arc::new(ScenarioCatalog::new(fixtures.scenarios.clone())),
            fixtures: Arc::new(fixtures),
            config: Arc::new(config),
            platform,
        })
    }
}
