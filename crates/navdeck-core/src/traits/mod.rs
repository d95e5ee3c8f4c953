//! Core traits shared across crates.

pub mod clock;

pub use clock::{Clock, ManualClock, SystemClock};
