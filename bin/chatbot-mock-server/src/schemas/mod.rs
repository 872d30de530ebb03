//! Request / response bodies of the HTTP API.

pub mod external;
pub mod v1;

/// Milliseconds since the Unix epoch, the timestamp unit of `/api/v1`.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Seconds since the Unix epoch, used by the external API surface.
pub fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Treats absent and empty strings alike when checking required fields.
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
