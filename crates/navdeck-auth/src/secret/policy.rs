//! Length policy for new secrets.

use navdeck_core::config::AuthConfig;
use navdeck_core::error::AppError;

/// Validates candidate secrets before they are stored.
#[derive(Debug, Clone)]
pub struct SecretPolicy {
    /// Minimum length in characters.
    min_length: usize,
}

impl SecretPolicy {
    /// Creates a policy from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.secret_min_length,
        }
    }

    /// The configured minimum length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Rejects secrets shorter than the minimum length.
    ///
    /// Length is counted in characters, not bytes.
    pub fn validate(&self, candidate: &str) -> Result<(), AppError> {
        if candidate.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Secret key must be at least {} characters long",
                self.min_length
            )));
        }
        Ok(())
    }
}
