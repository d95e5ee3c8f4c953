//! Atomic sort-order updates for ordered collections.

use sqlx::SqlitePool;
use tracing::debug;

use navdeck_core::error::{AppError, ErrorKind};
use navdeck_core::result::AppResult;
use navdeck_entity::ordering::{OrderedCollection, ReorderBatch};

/// Applies a [`ReorderBatch`] to one collection in a single transaction.
#[derive(Debug, Clone)]
pub struct SortOrderRepository {
    pool: SqlitePool,
}

impl SortOrderRepository {
    /// Create a new sort-order repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Write every entry of `batch` or none of them.
    ///
    /// Any id that matches no row aborts the whole batch with one
    /// `NotFound` error listing the missing ids.
    pub async fn apply(
        &self,
        collection: OrderedCollection,
        batch: &ReorderBatch,
    ) -> AppResult<()> {
        let sql = format!("UPDATE {} SET sort_order = ? WHERE id = ?", collection.table());

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let mut missing = Vec::new();
        for entry in batch.entries() {
            let result = sqlx::query(&sql)
                .bind(entry.sort_order)
                .bind(entry.id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Database,
                        format!("Failed to reorder {}", collection.label()),
                        e,
                    )
                })?;

            if result.rows_affected() == 0 {
                missing.push(entry.id);
            }
        }

        if !missing.is_empty() {
            // Dropping the transaction rolls it back.
            let ids = missing
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(AppError::not_found(format!(
                "Unknown {} id(s): {ids}",
                collection.label()
            )));
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit reorder", e)
        })?;

        debug!(collection = %collection, count = batch.len(), "Sort order updated");
        Ok(())
    }
}
