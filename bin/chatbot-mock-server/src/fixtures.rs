//! Response fixtures.
//!
//! Everything the mock answers with that is not derived from the store lives
//! in one JSON document: seed sessions, the scenario catalog, canned bot
//! replies, per-service status metadata, the external API payloads and the
//! demo script. The default document is compiled in; `MOCK_FIXTURES` points
//! at a replacement file.

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;

use crate::entities::{Scenario, Session};

const EMBEDDED: &str = include_str!("../fixtures/default.json");

#[derive(Debug, Clone, Deserialize)]
pub struct Fixtures {
    /// Sessions present at startup.
    #[serde(default)]
    pub sessions: Vec<Session>,
    pub scenarios: Vec<Scenario>,
    pub replies: BotReplies,
    pub services: ServiceFixtures,
    pub external: ExternalFixtures,
    pub demo: DemoScript,
}

/// Canned orchestrator replies, one per intent branch.
#[derive(Debug, Clone, Deserialize)]
pub struct BotReplies {
    pub greeting: String,
    pub check_balance: String,
    pub fallback: String,
}

/// Static metadata reported by a `/status` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub role: String,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceFixtures {
    pub chat: ServiceInfo,
    pub nlu: ServiceInfo,
    pub orchestrator: ServiceInfo,
}

/// Opaque payloads served verbatim by the external API surface.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalFixtures {
    pub data: Value,
    pub info: Value,
    pub users: Value,
    pub complex_data: Value,
}

/// User turns sent by `/chat/demo`, in order.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoScript {
    pub messages: Vec<String>,
}

impl Fixtures {
    /// The fixtures compiled into the binary.
    pub fn embedded() -> Result<Self, serde_json::Error> {
        serde_json::from_str(EMBEDDED)
    }

    /// Read fixtures from `path`, or fall back to [`Fixtures::embedded`].
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        match path {
            None => Self::embedded().context("embedded fixtures are malformed"),
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read fixtures file '{path}'"))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("failed to parse fixtures file '{path}'"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::SessionStatus;

    #[test]
    fn embedded_fixtures_parse() {
        let fx = Fixtures::embedded().unwrap();
        assert_eq!(fx.sessions.len(), 2);
        assert_eq!(fx.scenarios.len(), 2);
        assert_eq!(fx.services.nlu.version.as_deref(), Some("1.0.0"));
        assert!(fx.services.chat.version.is_none());
        assert_eq!(fx.demo.messages.first().map(String::as_str), Some("тест"));
    }

    #[test]
    fn seed_sessions_keep_fixture_state() {
        let fx = Fixtures::embedded().unwrap();
        let first = &fx.sessions[0];
        assert_eq!(first.session_id, "session-001");
        assert_eq!(first.status, SessionStatus::Completed);
        assert_eq!(first.message_count, 8);
        assert_eq!(first.user_id.as_deref(), Some("user-123"));
        // Absent keys deserialize to None rather than failing.
        assert!(fx.sessions[1].user_id.is_none());
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let err = Fixtures::load(Some("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn load_without_path_uses_embedded() {
        let fx = Fixtures::load(None).unwrap();
        assert_eq!(fx.replies.fallback, "Спасибо за ваше сообщение!");
    }

    #[test]
    fn file_fixtures_replace_embedded_ones() {
        let mut doc: Value = serde_json::from_str(EMBEDDED).unwrap();
        doc["sessions"] = serde_json::json!([]);
        doc["replies"]["fallback"] = "Ответ из файла".into();
        doc["demo"]["messages"] = serde_json::json!(["один"]);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, doc.to_string().as_bytes()).unwrap();
        let path = file.path().to_str().unwrap();

        let fx = Fixtures::load(Some(path)).unwrap();
        assert!(fx.sessions.is_empty());
        assert_eq!(fx.replies.fallback, "Ответ из файла");
        assert_eq!(fx.demo.messages, ["один"]);
        assert_eq!(fx.scenarios.len(), 2);
    }

    #[test]
    fn malformed_file_is_reported_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"{ \"scenarios\": [").unwrap();
        let path = file.path().to_str().unwrap();

        let err = Fixtures::load(Some(path)).unwrap_err();
        assert!(err.to_string().contains("failed to parse fixtures file"));
        assert!(err.to_string().contains(path));
    }
}
