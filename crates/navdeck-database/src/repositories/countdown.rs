//! Countdown event repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use navdeck_core::error::{AppError, ErrorKind};
use navdeck_core::result::AppResult;
use navdeck_entity::countdown::{CountdownEvent, CountdownFields};

/// Repository for countdown events. Deletion is soft: it clears `is_active`.
#[derive(Debug, Clone)]
pub struct CountdownRepository {
    pool: SqlitePool,
}

impl CountdownRepository {
    /// Create a new countdown repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List active events in display order.
    pub async fn list_active(&self) -> AppResult<Vec<CountdownEvent>> {
        sqlx::query_as::<_, CountdownEvent>(
            "SELECT * FROM countdown_events WHERE is_active = 1 \
             ORDER BY sort_order ASC, created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list countdowns", e))
    }

    /// List every event including inactive ones.
    pub async fn list_all(&self) -> AppResult<Vec<CountdownEvent>> {
        sqlx::query_as::<_, CountdownEvent>(
            "SELECT * FROM countdown_events ORDER BY sort_order ASC, created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list countdowns", e))
    }

    /// Find an event by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<CountdownEvent>> {
        sqlx::query_as::<_, CountdownEvent>("SELECT * FROM countdown_events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find countdown", e))
    }

    /// Create an active event after every existing one. Returns the new ID.
    pub async fn create(&self, fields: &CountdownFields) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO countdown_events \
             (title, description, target_date, icon, is_active, sort_order, created_at) \
             SELECT ?, ?, ?, ?, 1, COALESCE(MAX(sort_order), 0) + 1, ? \
             FROM countdown_events",
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(&fields.target_date)
        .bind(fields.icon_or_default())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create countdown", e)
        })?;

        Ok(result.last_insert_rowid())
    }

    /// Replace the editable fields of an event.
    pub async fn update(&self, id: i64, fields: &CountdownFields) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE countdown_events SET title = ?, description = ?, target_date = ?, icon = ? \
             WHERE id = ?",
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(&fields.target_date)
        .bind(fields.icon_or_default())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update countdown", e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    /// Hide an event without removing its row.
    pub async fn deactivate(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("UPDATE countdown_events SET is_active = 0 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete countdown", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Flip the active flag. Returns the new value, or `None` if the event
    /// does not exist.
    pub async fn toggle(&self, id: i64) -> AppResult<Option<bool>> {
        sqlx::query_scalar::<_, bool>(
            "UPDATE countdown_events SET is_active = NOT is_active WHERE id = ? \
             RETURNING is_active",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to toggle countdown", e))
    }
}
