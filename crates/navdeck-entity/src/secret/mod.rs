//! Secret key records.

pub mod model;

pub use model::SecretRecord;
