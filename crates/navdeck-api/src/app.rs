//! Application builder: wires router, middleware and state into an Axum app.

use axum::Router;
use tower_http::trace::TraceLayer;

use navdeck_core::config::CorsConfig;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors: CorsConfig = state.config.server.cors.clone();
    build_router(state)
        .layer(build_cors_layer(&cors))
        .layer(TraceLayer::new_for_http())
}
