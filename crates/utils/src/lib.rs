//! Shared utilities and pure functions for dirguard
//!
//! Logging setup and human-readable byte sizes used by the binary.

pub mod size;
pub mod tracing;

pub use size::*;
