//! Navigation item CRUD with field validation.

use std::sync::Arc;

use tracing::info;

use navdeck_core::error::AppError;
use navdeck_core::result::AppResult;
use navdeck_database::repositories::NavigationItemRepository;
use navdeck_entity::item::{ItemFields, NavigationItem};

/// Manages bookmark cards.
#[derive(Debug, Clone)]
pub struct ItemService {
    /// Navigation item repository.
    repo: Arc<NavigationItemRepository>,
}

impl ItemService {
    /// Creates a new item service.
    pub fn new(repo: Arc<NavigationItemRepository>) -> Self {
        Self { repo }
    }

    /// Lists visible items, or archived ones when `archived` is set.
    pub async fn list(&self, archived: bool) -> AppResult<Vec<NavigationItem>> {
        self.repo.list(archived).await
    }

    /// Fetches one item.
    pub async fn get(&self, id: i64) -> AppResult<NavigationItem> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates an item at the end of the list and returns its ID.
    pub async fn create(&self, fields: ItemFields) -> AppResult<i64> {
        let fields = validate(fields)?;
        let id = self.repo.create(&fields).await?;
        info!(item_id = id, "Navigation item created");
        Ok(id)
    }

    /// Replaces the editable fields of an item.
    pub async fn update(&self, id: i64, fields: ItemFields) -> AppResult<()> {
        let fields = validate(fields)?;
        if !self.repo.update(id, &fields).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    /// Moves an item into or out of the archive.
    pub async fn set_archived(&self, id: i64, archived: bool) -> AppResult<()> {
        if !self.repo.set_archived(id, archived).await? {
            return Err(not_found(id));
        }
        info!(item_id = id, archived, "Navigation item archive state changed");
        Ok(())
    }

    /// Permanently deletes an item.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(not_found(id));
        }
        info!(item_id = id, "Navigation item deleted");
        Ok(())
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found(format!("Navigation item {id} not found"))
}

/// Trims text fields and requires a title and a URL.
fn validate(mut fields: ItemFields) -> AppResult<ItemFields> {
    fields.title = fields.title.trim().to_string();
    fields.url = fields.url.trim().to_string();

    if fields.title.is_empty() || fields.url.is_empty() {
        return Err(AppError::validation("Title and URL are required"));
    }

    fields.description = fields.description.filter(|d| !d.trim().is_empty());
    fields.icon = fields.icon.filter(|i| !i.trim().is_empty());
    Ok(fields)
}
