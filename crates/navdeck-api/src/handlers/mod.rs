//! Request handlers for all API endpoints.

pub mod countdown;
pub mod health;
pub mod items;
pub mod secret;
