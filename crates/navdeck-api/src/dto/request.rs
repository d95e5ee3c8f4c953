//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use navdeck_entity::countdown::CountdownFields;
use navdeck_entity::item::ItemFields;
use navdeck_entity::ordering::OrderEntry;

/// Body of `setup` and `verify`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SecretKeyRequest {
    /// The secret.
    #[serde(default)]
    #[validate(length(min = 1, message = "Secret key is required"))]
    pub secret_key: String,
}

/// Body of `change`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSecretRequest {
    /// The secret currently in force.
    #[serde(default)]
    #[validate(length(min = 1, message = "Current secret key is required"))]
    pub current_secret_key: String,
    /// Replacement secret.
    #[serde(default)]
    #[validate(length(min = 1, message = "New secret key is required"))]
    pub new_secret_key: String,
}

/// Create or update a navigation item.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ItemRequest {
    /// Title.
    #[serde(default)]
    #[validate(length(min = 1, message = "Title and URL are required"))]
    pub title: String,
    /// Target URL.
    #[serde(default)]
    #[validate(length(min = 1, message = "Title and URL are required"))]
    pub url: String,
    /// Description.
    pub description: Option<String>,
    /// Category ID.
    pub category_id: Option<i64>,
    /// Icon.
    pub icon: Option<String>,
}

impl From<ItemRequest> for ItemFields {
    fn from(req: ItemRequest) -> Self {
        Self {
            title: req.title,
            url: req.url,
            description: req.description,
            category_id: req.category_id,
            icon: req.icon,
        }
    }
}

/// Archive toggle body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ArchiveRequest {
    /// Target state.
    pub is_archived: bool,
}

/// Query string of the item list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListItemsQuery {
    /// List the archive instead of the dashboard.
    #[serde(default)]
    pub archived: bool,
}

/// Create or update a countdown event.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CountdownRequest {
    /// Title.
    #[serde(default)]
    #[validate(length(min = 1, message = "Title and target date are required"))]
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Target date.
    #[serde(default)]
    #[validate(length(min = 1, message = "Title and target date are required"))]
    pub target_date: String,
    /// Icon class.
    pub icon: Option<String>,
}

impl From<CountdownRequest> for CountdownFields {
    fn from(req: CountdownRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            target_date: req.target_date,
            icon: req.icon,
        }
    }
}

/// Reorder body: `{ "items": [{ "id": 1, "sort_order": 1 }, ...] }`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReorderRequest {
    /// Requested positions.
    #[validate(length(min = 1, message = "Reorder batch must not be empty"))]
    pub items: Vec<OrderEntry>,
}
