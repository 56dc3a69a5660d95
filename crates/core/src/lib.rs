//! Core domain types, errors, and constants for `dirguard`.
//!
//! Everything the scanner and the eviction engine exchange lives here, so the
//! two never depend on each other directly.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the primary `Error` enum and `Result` type alias.
//! - **`types`**: The `Entry` record, the oldest-first `EntryList` collection
//!   and the `Constraint` a directory must satisfy.
//! - **`constants`**: Shared names such as environment variables.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result},
    types::*,
};
