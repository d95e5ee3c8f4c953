//! Reads the secret and session-token headers.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

use navdeck_auth::Credentials;

/// Header carrying an issued session token, in both directions.
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

/// Header carrying the raw shared secret.
pub const SECRET_KEY_HEADER: &str = "x-secret-key";

/// Credentials presented by the caller. Never rejects; absent headers are
/// `None`.
#[derive(Debug, Clone, Default)]
pub struct RequestCredentials(pub Credentials);

impl RequestCredentials {
    /// Parses both credential headers. Empty values count as absent.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self(Credentials {
            session_token: header_value(headers, SESSION_TOKEN_HEADER),
            secret: header_value(headers, SECRET_KEY_HEADER),
        })
    }
}

impl std::ops::Deref for RequestCredentials {
    type Target = Credentials;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for RequestCredentials
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
