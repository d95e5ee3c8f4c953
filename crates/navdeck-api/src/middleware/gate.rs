//! Auth-gate middleware for mutating routes.

use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use navdeck_auth::Access;
use navdeck_core::error::AppError;

use crate::extractors::{RequestCredentials, SESSION_TOKEN_HEADER};
use crate::state::AppState;

/// Runs the auth gate before the handler.
///
/// When the caller authenticated with the raw secret, the freshly issued
/// session token is returned in the `x-session-token` response header,
/// unless the handler revoked it (a secret reset drops every session).
pub async fn require_credential(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let credentials = RequestCredentials::from_headers(request.headers());
    let decision = state
        .gate
        .authorize(Access::Protected, &credentials)
        .await?;

    debug!(
        method = %request.method(),
        path = %request.uri().path(),
        grant = ?decision.grant,
        "Request passed auth gate"
    );

    let mut response = next.run(request).await;

    if let Some(token) = decision.issued_token {
        if state.sessions.get(&token).is_some() {
            attach_session_token(&mut response, &token)?;
        }
    }

    Ok(response)
}

/// Sets the `x-session-token` header on a response.
pub fn attach_session_token(response: &mut Response, token: &str) -> Result<(), AppError> {
    let value = HeaderValue::from_str(token)
        .map_err(|_| AppError::internal("Session token is not a valid header value"))?;
    response.headers_mut().insert(SESSION_TOKEN_HEADER, value);
    Ok(())
}
