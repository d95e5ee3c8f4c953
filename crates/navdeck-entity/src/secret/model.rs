//! Secret record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One stored secret hash. At most one record is active at a time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SecretRecord {
    /// Row identifier.
    pub id: i64,
    /// Hex-encoded SHA-256 digest of the secret. Never the plaintext.
    #[serde(skip_serializing)]
    pub key_hash: String,
    /// Whether this is the currently active secret.
    pub is_active: bool,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}
