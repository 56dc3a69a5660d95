//! Total-size eviction policy

use crate::traits::EvictionPolicy;
use dirguard_core::{Constraint, EntryList};

/// Satisfied once the remaining entries fit in `max_bytes`
#[derive(Debug, Clone, Copy)]
pub struct SizePolicy {
    max_bytes: u64,
}

impl SizePolicy {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }
}

impl EvictionPolicy for SizePolicy {
    fn constraint(&self) -> Constraint {
        Constraint::MaxBytes(self.max_bytes)
    }

    fn is_satisfied(&self, entries: &EntryList) -> bool {
        entries.total_size() <= self.max_bytes
    }

    fn name(&self) -> &'static str {
        "size"
    }
}
