//! Navigation item repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use navdeck_core::error::{AppError, ErrorKind};
use navdeck_core::result::AppResult;
use navdeck_entity::item::{ItemFields, NavigationItem};

const SELECT_ITEMS: &str = "SELECT n.id, n.title, n.url, n.description, n.category_id, \
     c.name AS category_name, n.icon, n.sort_order, n.is_archived, n.created_at \
     FROM navigation_items n LEFT JOIN categories c ON n.category_id = c.id";

/// Repository for navigation item CRUD.
#[derive(Debug, Clone)]
pub struct NavigationItemRepository {
    pool: SqlitePool,
}

impl NavigationItemRepository {
    /// Create a new navigation item repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List items in display order, either the visible set or the archive.
    pub async fn list(&self, archived: bool) -> AppResult<Vec<NavigationItem>> {
        sqlx::query_as::<_, NavigationItem>(&format!(
            "{SELECT_ITEMS} WHERE n.is_archived = ? \
             ORDER BY n.sort_order ASC, n.created_at DESC"
        ))
        .bind(archived)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list items", e))
    }

    /// Find an item by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<NavigationItem>> {
        sqlx::query_as::<_, NavigationItem>(&format!("{SELECT_ITEMS} WHERE n.id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find item", e))
    }

    /// Create an item after every existing one. Returns the new ID.
    pub async fn create(&self, fields: &ItemFields) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO navigation_items \
             (title, url, description, category_id, icon, sort_order, is_archived, created_at) \
             SELECT ?, ?, ?, ?, ?, COALESCE(MAX(sort_order), 0) + 1, 0, ? \
             FROM navigation_items",
        )
        .bind(&fields.title)
        .bind(&fields.url)
        .bind(&fields.description)
        .bind(fields.category_id)
        .bind(&fields.icon)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| write_error("Failed to create item", e))?;

        Ok(result.last_insert_rowid())
    }

    /// Replace the editable fields of an item.
    pub async fn update(&self, id: i64, fields: &ItemFields) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE navigation_items \
             SET title = ?, url = ?, description = ?, category_id = ?, icon = ? \
             WHERE id = ?",
        )
        .bind(&fields.title)
        .bind(&fields.url)
        .bind(&fields.description)
        .bind(fields.category_id)
        .bind(&fields.icon)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error("Failed to update item", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Move an item into or out of the archive.
    pub async fn set_archived(&self, id: i64, archived: bool) -> AppResult<bool> {
        let result = sqlx::query("UPDATE navigation_items SET is_archived = ? WHERE id = ?")
            .bind(archived)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to archive item", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete an item.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM navigation_items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete item", e))?;

        Ok(result.rows_affected() > 0)
    }
}

/// Maps an insert/update failure, reporting a dangling `category_id` as bad
/// input rather than a storage fault.
fn write_error(message: &str, err: sqlx::Error) -> AppError {
    if matches!(&err, sqlx::Error::Database(db) if db.is_foreign_key_violation()) {
        return AppError::with_source(ErrorKind::Validation, "Unknown category", err);
    }
    AppError::with_source(ErrorKind::Database, message, err)
}
