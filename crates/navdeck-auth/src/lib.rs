//! # navdeck-auth
//!
//! Shared-secret authentication for Navdeck.
//!
//! ## Modules
//!
//! - `secret` — hashing, length policy and lifecycle of the single active secret
//! - `session` — in-process session registry and its periodic sweeper
//! - `gate` — the per-request allow/deny decision

pub mod gate;
pub mod secret;
pub mod session;

pub use gate::{Access, AuthGate, Credentials, GateDecision, Grant};
pub use secret::{SecretHasher, SecretPolicy, SecretStore};
pub use session::{SessionRegistry, SessionSweeper};
