//! In-process session registry and periodic sweeping.

pub mod registry;
pub mod sweeper;

pub use registry::{SessionEntry, SessionRegistry};
pub use sweeper::SessionSweeper;
