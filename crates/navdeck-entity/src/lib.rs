//! # navdeck-entity
//!
//! Domain entity models for Navdeck. Every struct in this crate represents a
//! database table row or a domain value object. Row types additionally derive
//! `sqlx::FromRow`.

pub mod countdown;
pub mod item;
pub mod ordering;
pub mod secret;
