//! Secret key repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use navdeck_core::error::{AppError, ErrorKind};
use navdeck_core::result::AppResult;
use navdeck_entity::secret::SecretRecord;

/// Repository for the stored secret hash.
///
/// The schema allows at most one active row; writers here keep that true
/// even under concurrent setup or rotation.
#[derive(Debug, Clone)]
pub struct SecretRepository {
    pool: SqlitePool,
}

impl SecretRepository {
    /// Create a new secret repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Whether an active secret exists.
    pub async fn exists_active(&self) -> AppResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM secret_keys WHERE is_active = 1")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to check secret", e)
                })?;
        Ok(count > 0)
    }

    /// Fetch the active secret record.
    pub async fn find_active(&self) -> AppResult<Option<SecretRecord>> {
        sqlx::query_as::<_, SecretRecord>(
            "SELECT id, key_hash, is_active, created_at FROM secret_keys \
             WHERE is_active = 1 ORDER BY id DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load secret", e))
    }

    /// Count every stored record, active or retired.
    pub async fn count_all(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM secret_keys")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count secrets", e))
    }

    /// Insert `key_hash` as the active secret only if none is active.
    ///
    /// Returns `false` when another active secret already exists. The check
    /// and the insert are one statement, so two racing callers cannot both
    /// succeed.
    pub async fn insert_if_none(&self, key_hash: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "INSERT INTO secret_keys (key_hash, is_active, created_at) \
             SELECT ?, 1, ? \
             WHERE NOT EXISTS (SELECT 1 FROM secret_keys WHERE is_active = 1)",
        )
        .bind(key_hash)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // The partial unique index catches the rare interleaving the
            // NOT EXISTS guard misses.
            if is_unique_violation(&e) {
                return AppError::already_configured("Secret key is already configured");
            }
            AppError::with_source(ErrorKind::Database, "Failed to store secret", e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    /// Retire the active secret and store `key_hash` in its place.
    pub async fn replace_active(&self, key_hash: &str) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("UPDATE secret_keys SET is_active = 0 WHERE is_active = 1")
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to retire secret", e)
            })?;

        sqlx::query("INSERT INTO secret_keys (key_hash, is_active, created_at) VALUES (?, 1, ?)")
            .bind(key_hash)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to store secret", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit secret rotation", e)
        })
    }

    /// Delete every stored secret record. Returns the number removed.
    pub async fn delete_all(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM secret_keys")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete secrets", e)
            })?;
        Ok(result.rows_affected())
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
