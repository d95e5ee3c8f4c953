//! All-or-nothing reorder of navigation items and countdown events.

use std::sync::Arc;

use tracing::info;

use navdeck_core::result::AppResult;
use navdeck_database::repositories::SortOrderRepository;
use navdeck_entity::ordering::{OrderEntry, OrderedCollection, ReorderBatch};

/// Applies client-submitted orderings.
///
/// Either every id in the batch receives its requested position or nothing
/// changes. Re-submitting the same batch leaves the same final order.
#[derive(Debug, Clone)]
pub struct ReorderCoordinator {
    repo: Arc<SortOrderRepository>,
}

impl ReorderCoordinator {
    /// Creates a new reorder coordinator.
    pub fn new(repo: Arc<SortOrderRepository>) -> Self {
        Self { repo }
    }

    /// Validates `entries` and applies them to `collection`.
    pub async fn reorder(
        &self,
        collection: OrderedCollection,
        entries: Vec<OrderEntry>,
    ) -> AppResult<()> {
        let batch = ReorderBatch::new(entries)?;
        self.repo.apply(collection, &batch).await?;

        info!(collection = %collection, count = batch.len(), "Reorder applied");
        Ok(())
    }
}
