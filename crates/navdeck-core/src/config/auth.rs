//! Secret-key authentication configuration.

use serde::{Deserialize, Serialize};

/// Secret-key gate configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Minimum secret length in characters.
    #[serde(default = "default_secret_min_length")]
    pub secret_min_length: usize,
    /// Whether mutating item/countdown calls must present a credential once a
    /// secret is configured. Setting this to `false` leaves every mutation open.
    #[serde(default = "default_true")]
    pub require_auth_on_mutation: bool,
    /// Whether `POST /api/secret/reset` may be called without a credential.
    #[serde(default)]
    pub allow_unauthenticated_reset: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret_min_length: default_secret_min_length(),
            require_auth_on_mutation: true,
            allow_unauthenticated_reset: false,
        }
    }
}

fn default_secret_min_length() -> usize {
    6
}

fn default_true() -> bool {
    true
}
