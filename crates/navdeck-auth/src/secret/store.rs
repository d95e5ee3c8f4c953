//! Lifecycle of the single active secret.

use std::sync::Arc;

use tracing::{info, warn};

use navdeck_core::error::AppError;
use navdeck_core::result::AppResult;
use navdeck_database::repositories::SecretRepository;

use super::hasher::SecretHasher;
use super::policy::SecretPolicy;

/// Owns setup, verification, rotation and reset of the shared secret.
#[derive(Debug, Clone)]
pub struct SecretStore {
    repo: Arc<SecretRepository>,
    hasher: SecretHasher,
    policy: SecretPolicy,
}

impl SecretStore {
    /// Creates a new secret store.
    pub fn new(repo: Arc<SecretRepository>, policy: SecretPolicy) -> Self {
        Self {
            repo,
            hasher: SecretHasher::new(),
            policy,
        }
    }

    /// Whether an active secret is configured.
    pub async fn exists(&self) -> AppResult<bool> {
        self.repo.exists_active().await
    }

    /// Stores the first secret. Fails once any secret is active.
    pub async fn setup(&self, candidate: &str) -> AppResult<()> {
        self.policy.validate(candidate)?;

        let hash = self.hasher.hash(candidate);
        if !self.repo.insert_if_none(&hash).await? {
            return Err(AppError::already_configured(
                "Secret key is already configured",
            ));
        }

        info!("Secret key configured");
        Ok(())
    }

    /// Checks `candidate` against the active secret.
    ///
    /// Returns `false` when nothing is configured, when the candidate does
    /// not match, and when the lookup itself fails.
    pub async fn verify(&self, candidate: &str) -> bool {
        match self.repo.find_active().await {
            Ok(Some(record)) => self.hasher.matches(candidate, &record.key_hash),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "Secret lookup failed during verification");
                false
            }
        }
    }

    /// Replaces the active secret after confirming the current one.
    ///
    /// Sessions issued under the old secret stay valid.
    pub async fn rotate(&self, current: &str, next: &str) -> AppResult<()> {
        if !self.verify(current).await {
            return Err(AppError::forbidden("Current secret key is incorrect"));
        }
        self.policy.validate(next)?;

        self.repo.replace_active(&self.hasher.hash(next)).await?;

        info!("Secret key rotated");
        Ok(())
    }

    /// Deletes every secret record, reopening bootstrap mode.
    pub async fn reset(&self) -> AppResult<()> {
        let removed = self.repo.delete_all().await?;
        warn!(removed, "Secret key reset; dashboard is unprotected until setup");
        Ok(())
    }
}
