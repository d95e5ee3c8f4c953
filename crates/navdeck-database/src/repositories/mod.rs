//! Repository implementations for all Navdeck entities.

pub mod countdown;
pub mod item;
pub mod ordering;
pub mod secret;

pub use countdown::CountdownRepository;
pub use item::NavigationItemRepository;
pub use ordering::SortOrderRepository;
pub use secret::SecretRepository;
