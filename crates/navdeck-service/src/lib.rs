//! # navdeck-service
//!
//! Business logic for Navdeck. Each service wraps one or more repositories and
//! applies field validation before anything is written.
//!
//! Services follow constructor injection: all dependencies are provided at
//! construction time via `Arc` references.

pub mod countdown;
pub mod item;
pub mod ordering;

pub use countdown::CountdownService;
pub use item::ItemService;
pub use ordering::ReorderCoordinator;
