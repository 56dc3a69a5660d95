//! Oldest-first collection of entries

use super::entry::Entry;
use std::collections::VecDeque;

/// A mutable sequence of entries sorted ascending by modification time.
///
/// The list is sorted once at construction. Evictions only ever take the
/// front element, so the remaining entries keep their relative order and the
/// oldest entry is always at index 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryList {
    entries: VecDeque<Entry>,
    total_size: u64,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the collection, sorting by modification time with the path as a
    /// tie-breaker so repeated scans of an unchanged tree agree.
    pub fn from_entries(mut entries: Vec<Entry>) -> Self {
        entries.sort_by(|a, b| a.age_key().cmp(&b.age_key()));
        let total_size = entries.iter().map(Entry::size).fold(0, u64::saturating_add);
        Self {
            entries: entries.into(),
            total_size,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the sizes of all remaining entries
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// The entry with the smallest modification time
    pub fn oldest(&self) -> Option<&Entry> {
        self.entries.front()
    }

    /// Remove and return the oldest entry
    pub fn pop_oldest(&mut self) -> Option<Entry> {
        let entry = self.entries.pop_front()?;
        self.total_size = self.total_size.saturating_sub(entry.size());
        Some(entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}

impl FromIterator<Entry> for EntryList {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}

impl IntoIterator for EntryList {
    type Item = Entry;
    type IntoIter = std::collections::vec_deque::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
