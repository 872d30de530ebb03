//! Server configuration, loaded from environment variables at startup.

use std::time::Duration;

/// Runtime configuration for chatbot-mock-server.
///
/// Every field has a default so the mock answers on the same port the
/// frontend expects without any environment variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:8099"`).
    pub bind_address: String,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Comma-separated list of allowed CORS origins. `None` allows any origin.
    pub cors_allowed_origins: Option<String>,

    /// Serve Swagger UI and the OpenAPI document.
    pub enable_swagger: bool,

    /// Optional path to a JSON fixtures file replacing the embedded defaults.
    pub fixtures_path: Option<String>,

    /// Value of the `service` field reported by `/health`.
    pub service_name: String,

    /// Base URL of the ChatBot Platform API driven by the `/chat/*` routes.
    pub platform_url: String,

    /// Timeout of the single-shot upstream health probe.
    pub probe_timeout: Duration,

    /// Timeout applied to every other upstream request.
    pub upstream_timeout: Duration,

    /// Pause between scripted messages of `/chat/demo`.
    pub demo_delay: Duration,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: env_or("MOCK_BIND", "0.0.0.0:8099"),
            log_level: env_or("MOCK_LOG", "info"),
            log_json: parse_flag("MOCK_LOG_JSON", false),
            cors_allowed_origins: std::env::var("MOCK_CORS_ORIGINS")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            enable_swagger: parse_flag("MOCK_ENABLE_SWAGGER", true),
            fixtures_path: std::env::var("MOCK_FIXTURES")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            service_name: env_or("MOCK_SERVICE_NAME", "chatbot-mock-server"),
            platform_url: env_or("MOCK_PLATFORM_URL", "http://localhost:8092/api/v1"),
            probe_timeout: Duration::from_millis(parse_env("MOCK_PROBE_TIMEOUT_MS", 2_000)),
            upstream_timeout: Duration::from_millis(parse_env("MOCK_UPSTREAM_TIMEOUT_MS", 10_000)),
            demo_delay: Duration::from_millis(parse_env("MOCK_DEMO_DELAY_MS", 1_000)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8099".to_owned(),
            log_level: "info".to_owned(),
            log_json: false,
            cors_allowed_origins: None,
            enable_swagger: true,
            fixtures_path: None,
            service_name: "chatbot-mock-server".to_owned(),
            platform_url: "http://localhost:8092/api/v1".to_owned(),
            probe_timeout: Duration::from_millis(2_000),
            upstream_timeout: Duration::from_millis(10_000),
            demo_delay: Duration::from_millis(1_000),
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}
