//! Per-request authentication decision.

pub mod decision;

pub use decision::{Access, AuthGate, Credentials, GateDecision, Grant};
