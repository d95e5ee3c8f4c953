//! # navdeck-api
//!
//! HTTP API layer for Navdeck built on Axum.
//!
//! Provides the REST endpoints, the secret-gate middleware, request logging,
//! CORS, extractors and DTOs.

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
