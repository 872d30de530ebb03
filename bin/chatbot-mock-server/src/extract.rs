//! Request extractors.

use axum::extract::FromRequest;

use crate::error::ServerError;

/// `axum::Json` whose rejection is a [`ServerError::BadRequest`], so a
/// malformed body gets the same `{"error": ...}` shape as a missing field.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ServerError))]
pub struct AppJson<T>(pub T);
