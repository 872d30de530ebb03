//! HTTP client for the ChatBot Platform API.
//!
//! Used by the external `/chat/*` driver routes and by the `/health` probe.
//! Calls are never retried; a failure is returned once to the caller.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

/// Errors produced by [`PlatformClient`].
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Connection refused, timeout, or a body that could not be decoded.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The platform answered with a non-200 status.
    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },
}

/// Body of the platform's session-creation response. Every field is
/// optional because different platform builds return different subsets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionStarted {
    pub session_id: Option<String>,
    pub initial_message: Option<String>,
    pub node_type: Option<String>,
}

/// Body of the platform's message and continue responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BotTurn {
    pub bot_response: Option<String>,
    pub session_active: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct PlatformClient {
    http: reqwest::Client,
    base_url: String,
    probe_timeout: Duration,
}

impl PlatformClient {
    /// `request_timeout` bounds every call except [`is_available`], which
    /// uses the shorter `probe_timeout`.
    ///
    /// [`is_available`]: PlatformClient::is_available
    pub fn new(
        base_url: impl Into<String>,
        request_timeout: Duration,
        probe_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(request_timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            probe_timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Single-shot `GET {base}/health`. Any error or non-200 counts as down.
    pub async fn is_available(&self) -> bool {
        let url = self.url("health");
        match self.http.get(&url).timeout(self.probe_timeout).send().await {
            Ok(resp) => resp.status() == StatusCode::OK,
            Err(e) => {
                debug!(%url, error = %e, "platform health probe failed");
                false
            }
        }
    }

    /// `POST {base}/chat/sessions`.
    pub async fn create_session(&self) -> Result<SessionStarted, PlatformError> {
        self.post("chat/sessions", &json!({})).await
    }

    /// `POST {base}/chat/messages` with `{session_id, content}`.
    pub async fn send_message(&self, session_id: &str, content: &str) -> Result<BotTurn, PlatformError> {
        self.post(
            "chat/messages",
            &json!({ "session_id": session_id, "content": content }),
        )
        .await
    }

    /// `POST {base}/chat/continue`, used to advance past an announce node.
    pub async fn continue_session(&self, session_id: &str) -> Result<BotTurn, PlatformError> {
        self.post("chat/continue", &json!({ "session_id": session_id })).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, PlatformError> {
        let url = self.url(path);
        let resp = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| PlatformError::Request { url: url.clone(), source })?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(PlatformError::Status { url, status });
        }
        resp.json::<T>()
            .await
            .map_err(|source| PlatformError::Request { url, source })
    }
}
