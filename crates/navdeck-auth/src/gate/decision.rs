//! The auth gate decides whether a call may proceed.
//!
//! Rules are evaluated in order:
//!
//! 1. public operations always pass
//! 2. with no secret configured everything passes (bootstrap mode)
//! 3. with `require_auth_on_mutation = false` protected operations pass
//! 4. a valid session token passes
//! 5. a matching secret passes and issues a new session token
//! 6. anything else is denied
//!
//! An expired session token counts as no credential at all.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use navdeck_core::config::AuthConfig;
use navdeck_core::error::AppError;
use navdeck_core::result::AppResult;

use crate::secret::SecretStore;
use crate::session::SessionRegistry;

/// Whether an operation needs a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Callable by anyone (existence check, setup, verify, reads).
    Public,
    /// Requires a credential once a secret exists.
    Protected,
}

/// Credentials a request may carry.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// Value of the `x-session-token` header.
    pub session_token: Option<String>,
    /// Value of the `x-secret-key` header.
    pub secret: Option<String>,
}

impl Credentials {
    /// Whether neither credential is present.
    pub fn is_empty(&self) -> bool {
        self.session_token.is_none() && self.secret.is_none()
    }
}

/// Which rule let the request through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grant {
    /// The operation is public.
    Public,
    /// No secret is configured yet.
    Bootstrap,
    /// Mutation checks are disabled by configuration.
    PolicyOpen,
    /// A valid session token was presented.
    Session,
    /// The secret itself was presented.
    Secret,
}

/// Outcome of a successful gate check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDecision {
    /// Rule that allowed the call.
    pub grant: Grant,
    /// Token issued when the caller authenticated with the secret.
    pub issued_token: Option<String>,
}

impl GateDecision {
    fn allow(grant: Grant) -> Self {
        Self {
            grant,
            issued_token: None,
        }
    }
}

/// Screens calls against the secret store and the session registry.
#[derive(Debug, Clone)]
pub struct AuthGate {
    secrets: Arc<SecretStore>,
    sessions: Arc<SessionRegistry>,
    require_auth_on_mutation: bool,
}

impl AuthGate {
    /// Creates a new gate.
    pub fn new(
        secrets: Arc<SecretStore>,
        sessions: Arc<SessionRegistry>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            secrets,
            sessions,
            require_auth_on_mutation: config.require_auth_on_mutation,
        }
    }

    /// The session registry consulted by this gate.
    pub fn sessions(&self) -> &Arc<SessionRegistry> {
        &self.sessions
    }

    /// Decides whether a call with `credentials` may perform an `access`
    /// operation.
    ///
    /// Denials are `Unauthorized` when nothing usable was presented and
    /// `Forbidden` when a secret was presented but did not match.
    pub async fn authorize(
        &self,
        access: Access,
        credentials: &Credentials,
    ) -> AppResult<GateDecision> {
        if access == Access::Public {
            return Ok(GateDecision::allow(Grant::Public));
        }

        if !self.secrets.exists().await? {
            return Ok(GateDecision::allow(Grant::Bootstrap));
        }

        if !self.require_auth_on_mutation {
            return Ok(GateDecision::allow(Grant::PolicyOpen));
        }

        if let Some(token) = credentials.session_token.as_deref() {
            if self.sessions.validate(token) {
                return Ok(GateDecision::allow(Grant::Session));
            }
        }

        if let Some(secret) = credentials.secret.as_deref() {
            if self.secrets.verify(secret).await {
                let token = self.sessions.issue();
                return Ok(GateDecision {
                    grant: Grant::Secret,
                    issued_token: Some(token),
                });
            }
            debug!("Gate rejected an incorrect secret");
            return Err(AppError::forbidden("Invalid secret key"));
        }

        Err(AppError::unauthorized(
            "Authentication required: provide x-secret-key or x-session-token",
        ))
    }
}
