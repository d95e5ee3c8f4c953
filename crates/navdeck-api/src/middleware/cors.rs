//! CORS layer configuration.

use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};

use navdeck_core::config::CorsConfig;

use crate::extractors::{SECRET_KEY_HEADER, SESSION_TOKEN_HEADER};

/// Builds a CORS tower layer from configuration.
///
/// The credential headers are always allowed, and `x-session-token` is
/// exposed so browser code can read a renewed token.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    // Origins
    if config.allowed_origins.iter().any(|o| o == "*") {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    // Methods
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    layer = layer.allow_methods(methods);

    // Headers
    let session = HeaderName::from_static(SESSION_TOKEN_HEADER);
    layer = layer
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(SECRET_KEY_HEADER),
            session.clone(),
        ])
        .expose_headers([session]);

    layer.max_age(std::time::Duration::from_secs(config.max_age_seconds))
}
