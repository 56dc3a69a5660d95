//! Eviction engine for directory quotas
//!
//! Repeatedly removes the oldest entry of an [`EntryList`] until a size or
//! count limit holds. Actual file removal is delegated to a [`DeleteAction`]
//! so the policy can run without touching a real filesystem.
//!
//! [`EntryList`]: dirguard_core::EntryList

mod actions;
mod engine;
mod factory;
mod policies;
mod report;
mod traits;

// Re-export public API
pub use actions::{DryRun, RemoveFile};
pub use engine::{
    enforce, enforce_count_limit, enforce_size_limit, evict_oldest, Enforcer, Eviction,
};
pub use factory::create_eviction_policy;
pub use policies::{CountPolicy, SizePolicy};
pub use report::{DeletionFailure, EvictionReport};
pub use traits::{DeleteAction, EvictionPolicy};
