//! Countdown event use cases.

pub mod date;
pub mod service;

pub use service::CountdownService;
