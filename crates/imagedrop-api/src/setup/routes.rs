//! Route configuration and setup

use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    routing::{get, post},
    Router,
};
use imagedrop_core::Config;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Setup all application routes
///
/// `/upload` and `/files` are the ingestion and listing endpoints; `/` is
/// the liveness probe; `/public` serves the blob sink directory as-is, so
/// retrieval URLs of the form `/public/images/{filename}` resolve.
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router {
    let cors = setup_cors();
    let transport_cap = transport_body_cap(config.max_file_size_bytes);

    Router::new()
        .route("/upload", post(handlers::upload_file))
        .route("/files", get(handlers::list_files))
        .route("/", get(handlers::health))
        .nest_service("/public", ServeDir::new(&config.storage_path))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(transport_cap))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Hard transport-level body cap. Set above the configured per-file maximum
/// (multipart framing adds overhead, and the validator owns the real cap so
/// oversize files get a 400 with a reason instead of a bare 413); this layer
/// only stops grossly oversized payloads from being buffered at all.
fn transport_body_cap(max_file_size_bytes: usize) -> usize {
    max_file_size_bytes * 2 + 64 * 1024
}

/// Setup CORS configuration
///
/// The API must be reachable from any browser origin with credentials, so
/// the requesting origin is echoed back rather than using a wildcard (a
/// wildcard origin is invalid in credentialed requests).
fn setup_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_cap_exceeds_file_cap() {
        let max = 5 * 1024 * 1024;
        assert!(transport_body_cap(max) > max);
    }
}
