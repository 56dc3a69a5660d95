//! Run configuration for dirguard
//!
//! This crate turns already-parsed command line values into a validated,
//! immutable [`Config`].

pub mod config;

pub use config::*;
