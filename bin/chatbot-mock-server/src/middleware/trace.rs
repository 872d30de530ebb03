use axum::{
    body::{Body, HttpBody},
    extract::Request,
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::{BodyExt, Limited};
use std::time::Instant;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::error::ServerError;

pub static X_TRACE_ID: &str = "x-trace-id";

/// Only JSON bodies with a known size below this are buffered and logged.
const MAX_LOGGED_BODY: usize = 1024;

/// Per-request span with a trace id taken from `x-trace-id` or generated.
///
/// Any non-blank printable header value is accepted as the trace id and
/// echoed back on the response. Small JSON bodies are logged in both
/// directions; everything else streams through untouched.
pub async fn trace_middleware(req: Request<Body>, next: Next) -> Response {
    let start_time = Instant::now();

    let trace_id = req
        .headers()
        .get(X_TRACE_ID)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = info_span!(
        "http_request",
        trace_id = %trace_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    async move {
        info!("→ request started");
        let header_value = HeaderValue::from_str(&trace_id).ok();

        let (parts, body) = req.into_parts();
        let mut response = match log_body("request", &parts.headers, body).await {
            Ok(body) => {
                let mut req = Request::from_parts(parts, body);
                if let Some(v) = &header_value {
                    req.headers_mut().insert(X_TRACE_ID, v.clone());
                }
                let response = next.run(req).await;

                let (parts, body) = response.into_parts();
                match log_body("response", &parts.headers, body).await {
                    Ok(body) => Response::from_parts(parts, body),
                    Err(e) => {
                        ServerError::Internal(format!("failed to read response body: {e}"))
                            .into_response()
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to read request body");
                ServerError::BadRequest("Failed to read request body".to_owned()).into_response()
            }
        };
        if let Some(v) = header_value {
            response.headers_mut().insert(X_TRACE_ID, v);
        }

        info!(
            status = response.status().as_u16(),
            latency_ms = start_time.elapsed().as_millis(),
            "← response finished"
        );
        response
    }
    .instrument(span)
    .await
}

/// Logs `body` when it is small JSON and hands back an equivalent body.
async fn log_body(direction: &str, headers: &HeaderMap, body: Body) -> Result<Body, axum::BoxError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let size = body.size_hint().exact();

    let loggable = content_type.contains("application/json")
        && size.is_some_and(|n| n > 0 && n < MAX_LOGGED_BODY as u64);
    if !loggable {
        if size != Some(0) {
            let size = size.map_or_else(|| "unknown".to_owned(), |n| n.to_string());
            info!("{direction} body: [skipped: type={content_type}, size={size}]");
        }
        return Ok(body);
    }

    let bytes = Limited::new(body, MAX_LOGGED_BODY).collect().await?.to_bytes();
    if let Ok(text) = std::str::from_utf8(&bytes) {
        info!("{direction} body: {text}");
    }
    Ok(Body::from(bytes))
}
