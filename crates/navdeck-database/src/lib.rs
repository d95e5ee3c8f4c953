//! # navdeck-database
//!
//! SQLite connection management, embedded migrations and concrete repository
//! implementations for all Navdeck entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
