//! Core eviction trait definitions

use dirguard_core::{Constraint, Entry, EntryList, Result};

/// Eviction policy trait
pub trait EvictionPolicy {
    /// Constraint this policy enforces
    fn constraint(&self) -> Constraint;

    /// Whether the remaining entries already satisfy the constraint
    fn is_satisfied(&self, entries: &EntryList) -> bool;

    /// Short name for diagnostics
    fn name(&self) -> &'static str;
}

/// Side effect run for every evicted entry
pub trait DeleteAction {
    fn delete(&mut self, entry: &Entry) -> Result<()>;
}

impl<F> DeleteAction for F
where
    F: FnMut(&Entry) -> Result<()>,
{
    fn delete(&mut self, entry: &Entry) -> Result<()> {
        self(entry)
    }
}
