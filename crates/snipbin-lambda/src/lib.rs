//! snipbin-lambda
//!
//! HTTP surface of the snippet service: routing, handlers, and the mapping
//! of every failure to a tagged JSON error body.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Smallest request body limit ever applied; axum's own default.
pub const MIN_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Worst-case JSON bytes per contents character (a `\uXXXX` escape).
const MAX_JSON_BYTES_PER_CHAR: usize = 6;

/// Room for the other create-request fields.
const BODY_OVERHEAD: usize = 64 * 1024;

/// Request body limit for a contents character limit.
///
/// Large enough that any contents the validator could see arrive intact, so
/// an oversized snippet is reported as too large rather than as bad JSON.
pub fn body_limit(contents_character_limit: usize) -> usize {
    contents_character_limit
        .saturating_mul(MAX_JSON_BYTES_PER_CHAR)
        .saturating_add(BODY_OVERHEAD)
        .max(MIN_BODY_LIMIT)
}

/// Build the application router.
///
/// Panics inside handlers are caught and answered as `internal_server_error`
/// before the request log sees the response.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let limit = body_limit(state.validator.contents_character_limit());

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/snippets", post(routes::snippets::create_snippet))
        .route("/snippets/{id}", get(routes::snippets::get_snippet))
        .layer(DefaultBodyLimit::max(limit))
        .layer(CatchPanicLayer::custom(middleware::panic::handle_panic))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
