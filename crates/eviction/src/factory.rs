//! Factory for creating eviction policies

use dirguard_core::{Constraint, Result};

use super::policies::{CountPolicy, SizePolicy};
use super::traits::EvictionPolicy;

/// Eviction policy factory
///
/// Rejects a zero limit up front instead of letting the engine empty the
/// directory.
pub fn create_eviction_policy(constraint: Constraint) -> Result<Box<dyn EvictionPolicy>> {
    constraint.validate()?;
    match constraint {
        Constraint::MaxBytes(max_bytes) => Ok(Box::new(SizePolicy::new(max_bytes))),
        Constraint::MaxCount(max_count) => Ok(Box::new(CountPolicy::new(max_count))),
    }
}
