//! Reorder batch validation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use navdeck_core::error::AppError;

/// One requested position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEntry {
    /// Row id within the collection.
    pub id: i64,
    /// Requested `sort_order`.
    pub sort_order: i64,
}

/// A non-empty list of positions with no repeated ids.
///
/// The only way to obtain one is [`ReorderBatch::new`], so downstream code can
/// rely on both properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderBatch {
    entries: Vec<OrderEntry>,
}

impl ReorderBatch {
    /// Validates and wraps the submitted entries.
    pub fn new(entries: Vec<OrderEntry>) -> Result<Self, AppError> {
        if entries.is_empty() {
            return Err(AppError::validation("Reorder batch must not be empty"));
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(AppError::validation(format!(
                    "Id {} appears more than once in the reorder batch",
                    entry.id
                )));
            }
        }

        Ok(Self { entries })
    }

    /// The validated entries, in submission order.
    pub fn entries(&self) -> &[OrderEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never `true` for a batch built through [`ReorderBatch::new`], which
    /// rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
