//! Secret hashing, policy enforcement and lifecycle.

pub mod hasher;
pub mod policy;
pub mod store;

pub use hasher::SecretHasher;
pub use policy::SecretPolicy;
pub use store::SecretStore;
