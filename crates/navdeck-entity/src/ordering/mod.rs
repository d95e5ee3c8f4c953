//! Ordered collection value types.

pub mod batch;
pub mod collection;

pub use batch::{OrderEntry, ReorderBatch};
pub use collection::OrderedCollection;
