//! Countdown event entities.

pub mod model;

pub use model::{CountdownEvent, CountdownFields, DEFAULT_COUNTDOWN_ICON};
