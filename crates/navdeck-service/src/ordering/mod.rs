//! Batch reordering of ordered collections.

pub mod coordinator;

pub use coordinator::ReorderCoordinator;
