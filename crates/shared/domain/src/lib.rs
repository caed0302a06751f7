//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, no host access, no logging. Just data and simple helpers.

pub mod config;
pub mod phase;
pub mod registry;
pub mod settings;
