use crate::state::AppState;
use http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS by default, matching what the frontend dev server expects.
///
/// `OPTIONS` on any path is answered by this layer directly with 200 and an
/// empty body. Setting `MOCK_CORS_ORIGINS` narrows the allowed origins.
pub fn cors_layer(state: &AppState) -> CorsLayer {
    let any = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any);

    let Some(origins_str) = &state.config.cors_allowed_origins else {
        return any;
    };
    let origins: Vec<HeaderValue> = origins_str
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect();
    if origins.is_empty() {
        any
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_headers(Any)
            .allow_methods(Any)
    }
}
