//! # navdeck-core
//!
//! Core crate for Navdeck. Contains configuration schemas, the clock
//! abstraction used by session expiry, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Navdeck crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
