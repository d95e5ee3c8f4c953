//! Shared-secret lifecycle handlers.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use tracing::info;

use navdeck_core::error::AppError;

use crate::dto::request::{ChangeSecretRequest, SecretKeyRequest};
use crate::dto::response::{LogoutResponse, MessageResponse, SecretStatusResponse, VerifyResponse};
use crate::extractors::{RequestCredentials, ValidatedJson};
use crate::middleware::gate::attach_session_token;
use crate::state::AppState;

/// GET /api/secret/check
pub async fn check(State(state): State<AppState>) -> Result<Json<SecretStatusResponse>, AppError> {
    let has_secret_key = state.secret_store.exists().await?;
    Ok(Json(SecretStatusResponse { has_secret_key }))
}

/// POST /api/secret/setup
pub async fn setup(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SecretKeyRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state.secret_store.setup(&req.secret_key).await?;
    Ok(Json(MessageResponse::new("Secret key set up successfully")))
}

/// POST /api/secret/verify
///
/// Issues a session token in the `x-session-token` response header.
pub async fn verify(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SecretKeyRequest>,
) -> Result<Response, AppError> {
    if !state.secret_store.verify(&req.secret_key).await {
        return Err(AppError::forbidden("Invalid secret key"));
    }

    let token = state.sessions.issue();
    let mut response = Json(VerifyResponse {
        message: "Secret key verified".to_string(),
        authenticated: true,
    })
    .into_response();
    attach_session_token(&mut response, &token)?;
    Ok(response)
}

/// POST /api/secret/change
///
/// Existing sessions stay valid; the caller also receives a new token.
pub async fn change(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ChangeSecretRequest>,
) -> Result<Response, AppError> {
    state
        .secret_store
        .rotate(&req.current_secret_key, &req.new_secret_key)
        .await?;

    let token = state.sessions.issue();
    let mut response = Json(MessageResponse::new("Secret key changed")).into_response();
    attach_session_token(&mut response, &token)?;
    Ok(response)
}

/// POST /api/secret/reset
///
/// Clears every secret and every session. Routed behind the auth gate unless
/// `auth.allow_unauthenticated_reset` is set.
pub async fn reset(State(state): State<AppState>) -> Result<Json<MessageResponse>, AppError> {
    state.secret_store.reset().await?;
    let revoked = state.sessions.revoke_all();
    info!(revoked, "Sessions revoked after secret reset");
    Ok(Json(MessageResponse::new("Secret key reset")))
}

/// POST /api/secret/logout
pub async fn logout(
    State(state): State<AppState>,
    credentials: RequestCredentials,
) -> Json<LogoutResponse> {
    let revoked = credentials
        .session_token
        .as_deref()
        .is_some_and(|token| state.sessions.revoke(token));

    Json(LogoutResponse {
        message: "Logged out".to_string(),
        revoked,
    })
}
