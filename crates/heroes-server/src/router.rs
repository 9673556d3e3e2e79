//! Router assembly for the heroes HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax. The collection paths keep
/// their trailing slash; `/heroes/` and `/heroes/{hero_id}` are distinct
/// routes. TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root::root))
        .route(
            "/heroes/",
            get(handlers::heroes::list_heroes).post(handlers::heroes::create_hero),
        )
        .route(
            "/heroes/{hero_id}",
            get(handlers::heroes::get_hero).delete(handlers::heroes::delete_hero),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
