//! Convenience result type alias for Navdeck.

use crate::error::AppError;

/// A specialized `Result` type for Navdeck operations.
pub type AppResult<T> = Result<T, AppError>;
