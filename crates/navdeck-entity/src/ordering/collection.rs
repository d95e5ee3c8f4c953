//! The collections whose rows carry a `sort_order` column.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A table whose rows can be reordered as a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderedCollection {
    /// Dashboard bookmark cards.
    NavigationItems,
    /// Countdown events.
    CountdownEvents,
}

impl OrderedCollection {
    /// Backing table name. Only ever one of two fixed literals.
    pub fn table(&self) -> &'static str {
        match self {
            Self::NavigationItems => "navigation_items",
            Self::CountdownEvents => "countdown_events",
        }
    }

    /// Singular label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NavigationItems => "Navigation item",
            Self::CountdownEvents => "Countdown event",
        }
    }
}

impl fmt::Display for OrderedCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}
