//! Route definitions for the Navdeck HTTP API.
//!
//! All routes are mounted under `/api`. Reads and the secret bootstrap
//! endpoints are public; every mutation runs behind the auth gate.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, patch, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(public_routes(&state))
        .merge(protected_routes(&state).route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::gate::require_credential,
        )));

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Endpoints that never consult the gate.
fn public_routes(state: &AppState) -> Router<AppState> {
    let mut router = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/secret/check", get(handlers::secret::check))
        .route("/secret/setup", post(handlers::secret::setup))
        .route("/secret/verify", post(handlers::secret::verify))
        .route("/secret/change", post(handlers::secret::change))
        .route("/secret/logout", post(handlers::secret::logout))
        .route("/items", get(handlers::items::list_items))
        .route("/countdown", get(handlers::countdown::list_countdowns));

    if state.config.auth.allow_unauthenticated_reset {
        router = router.route("/secret/reset", post(handlers::secret::reset));
    }

    router
}

/// Mutating endpoints, wrapped in the auth gate by the caller.
fn protected_routes(state: &AppState) -> Router<AppState> {
    let mut router = Router::new()
        .route("/items", post(handlers::items::create_item))
        .route("/items/reorder", put(handlers::items::reorder_items))
        .route(
            "/items/{id}",
            put(handlers::items::update_item).delete(handlers::items::delete_item),
        )
        .route("/items/{id}/archive", put(handlers::items::archive_item))
        .route("/countdown", post(handlers::countdown::create_countdown))
        .route(
            "/countdown/reorder",
            put(handlers::countdown::reorder_countdowns),
        )
        .route(
            "/countdown/{id}",
            put(handlers::countdown::update_countdown)
                .delete(handlers::countdown::delete_countdown),
        )
        .route(
            "/countdown/{id}/toggle",
            patch(handlers::countdown::toggle_countdown),
        );

    if !state.config.auth.allow_unauthenticated_reset {
        router = router.route("/secret/reset", post(handlers::secret::reset));
    }

    router
}
