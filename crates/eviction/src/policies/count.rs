//! Entry-count eviction policy

use crate::traits::EvictionPolicy;
use dirguard_core::{Constraint, EntryList};

/// Satisfied once at most `max_count` entries remain
#[derive(Debug, Clone, Copy)]
pub struct CountPolicy {
    max_count: u64,
}

impl CountPolicy {
    pub fn new(max_count: u64) -> Self {
        Self { max_count }
    }
}

impl EvictionPolicy for CountPolicy {
    fn constraint(&self) -> Constraint {
        Constraint::MaxCount(self.max_count)
    }

    fn is_satisfied(&self, entries: &EntryList) -> bool {
        entries.len() as u64 <= self.max_count
    }

    fn name(&self) -> &'static str {
        "count"
    }
}
