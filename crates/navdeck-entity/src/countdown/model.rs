//! Countdown event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Icon used when a countdown is created without one.
pub const DEFAULT_COUNTDOWN_ICON: &str = "far fa-calendar-alt";

/// A dated event shown with a live countdown.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CountdownEvent {
    /// Row identifier.
    pub id: i64,
    /// Event title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Target date as submitted by the client (validated on write).
    pub target_date: String,
    /// Icon class.
    pub icon: String,
    /// Inactive events are hidden; deletion only clears this flag.
    pub is_active: bool,
    /// Display position; lower sorts first.
    pub sort_order: i64,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
}

/// Editable fields of a countdown event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownFields {
    /// Event title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Target date.
    pub target_date: String,
    /// Icon class; `None` falls back to [`DEFAULT_COUNTDOWN_ICON`].
    pub icon: Option<String>,
}

impl CountdownFields {
    /// The icon to store, applying the default.
    pub fn icon_or_default(&self) -> &str {
        match self.icon.as_deref() {
            Some(icon) if !icon.trim().is_empty() => icon,
            _ => DEFAULT_COUNTDOWN_ICON,
        }
    }
}
