//! Navigation item use cases.

pub mod service;

pub use service::ItemService;
