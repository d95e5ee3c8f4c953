//! Navigation item entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A bookmark card on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NavigationItem {
    /// Row identifier.
    pub id: i64,
    /// Card title.
    pub title: String,
    /// Target URL.
    pub url: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional category.
    pub category_id: Option<i64>,
    /// Name of the category, joined on read.
    #[sqlx(default)]
    pub category_name: Option<String>,
    /// Icon class or URL.
    pub icon: Option<String>,
    /// Display position; lower sorts first.
    pub sort_order: i64,
    /// Whether the card is hidden in the archive.
    pub is_archived: bool,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
}

/// Editable fields of a navigation item, used for both create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemFields {
    /// Card title.
    pub title: String,
    /// Target URL.
    pub url: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional category.
    pub category_id: Option<i64>,
    /// Icon class or URL.
    pub icon: Option<String>,
}
