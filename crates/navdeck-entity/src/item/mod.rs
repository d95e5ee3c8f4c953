//! Navigation item entities.

pub mod model;

pub use model::{ItemFields, NavigationItem};
