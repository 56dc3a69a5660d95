//! Core domain types for `dirguard`.
//!
//! ## Organization
//!
//! - **`entry`**: One regular file captured at scan time
//! - **`entry_list`**: The oldest-first collection the eviction engine consumes
//! - **`constraint`**: Size and count limits a directory must satisfy

pub mod constraint;
pub mod entry;
pub mod entry_list;

pub use constraint::*;
pub use entry::*;
pub use entry_list::*;
