//! Outcome of one enforcement pass

use crate::engine::Eviction;
use dirguard_core::{Constraint, Entry, EntryList};
use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;

/// A deletion action that failed for one evicted entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Summary of an enforcement pass.
///
/// Failed deletions do not stop the pass; they are collected here.
#[derive(Debug, Clone, Serialize)]
pub struct EvictionReport {
    pub constraint: Constraint,
    pub entries_before: usize,
    pub bytes_before: u64,
    pub entries_after: usize,
    pub bytes_after: u64,
    pub evicted: Vec<Entry>,
    pub failures: Vec<DeletionFailure>,
}

impl EvictionReport {
    pub(crate) fn begin(constraint: Constraint, entries: &EntryList) -> Self {
        Self {
            constraint,
            entries_before: entries.len(),
            bytes_before: entries.total_size(),
            entries_after: entries.len(),
            bytes_after: entries.total_size(),
            evicted: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, eviction: Eviction) {
        if let Err(error) = eviction.result {
            warn!(path = %eviction.entry.path().display(), error = %error, "deletion failed");
            self.failures.push(DeletionFailure {
                path: eviction.entry.path().to_path_buf(),
                error: error.to_string(),
            });
        }
        self.evicted.push(eviction.entry);
    }

    pub(crate) fn finish(&mut self, entries: &EntryList) {
        self.entries_after = entries.len();
        self.bytes_after = entries.total_size();
    }

    /// Bytes accounted to evicted entries, including failed deletions
    pub fn evicted_bytes(&self) -> u64 {
        self.evicted.iter().map(Entry::size).sum()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
