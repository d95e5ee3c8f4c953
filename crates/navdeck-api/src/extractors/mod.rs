//! Custom Axum extractors.

pub mod credentials;
pub mod json;
pub mod path;

pub use credentials::{RequestCredentials, SECRET_KEY_HEADER, SESSION_TOKEN_HEADER};
pub use json::ValidatedJson;
pub use path::RowId;
