//! Property-based tests for the eviction engine
//!
//! These tests use proptest to check the enforcement invariants over
//! arbitrary collections of entries.

use dirguard_core::{Entry, EntryList, Error, Result};
use dirguard_eviction::{enforce_count_limit, enforce_size_limit, evict_oldest, DeleteAction};
use proptest::prelude::*;
use std::time::{Duration, UNIX_EPOCH};

/// Generate entries with unique paths and possibly colliding times
fn arb_entries() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec((0u64..10_000, 0u64..50), 0..40).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (size, secs))| {
                Entry::new(
                    format!("file-{i:03}"),
                    size,
                    UNIX_EPOCH + Duration::from_secs(secs),
                )
            })
            .collect()
    })
}

struct Counter(usize);

impl DeleteAction for Counter {
    fn delete(&mut self, _entry: &Entry) -> Result<()> {
        self.0 += 1;
        Ok(())
    }
}

struct AlwaysFails(usize);

impl DeleteAction for AlwaysFails {
    fn delete(&mut self, entry: &Entry) -> Result<()> {
        self.0 += 1;
        Err(Error::deletion(entry.path(), "read-only filesystem"))
    }
}

proptest! {
    #[test]
    fn evict_oldest_takes_minimum(entries in arb_entries()) {
        let expected = entries.iter().min_by(|a, b| a.age_key().cmp(&b.age_key())).cloned();
        let mut list = EntryList::from_entries(entries);
        let evicted = evict_oldest(&mut list, None).map(|e| e.entry);
        prop_assert_eq!(evicted, expected);
    }

    #[test]
    fn size_limit_holds_or_list_empty(entries in arb_entries(), max in 1u64..100_000) {
        let mut list = EntryList::from_entries(entries);
        let before = list.len();
        let mut counter = Counter(0);

        let report = enforce_size_limit(&mut list, max, Some(&mut counter)).unwrap();

        prop_assert!(list.total_size() <= max || list.is_empty());
        prop_assert_eq!(list.total_size(), list.iter().map(Entry::size).sum::<u64>());
        prop_assert_eq!(counter.0, report.evicted.len());
        prop_assert_eq!(before, list.len() + report.evicted.len());
    }

    #[test]
    fn count_limit_holds(entries in arb_entries(), max in 1u64..50) {
        let mut list = EntryList::from_entries(entries);
        enforce_count_limit(&mut list, max, None).unwrap();
        prop_assert!(list.len() as u64 <= max);
    }

    #[test]
    fn enforcement_is_idempotent(entries in arb_entries(), max_bytes in 1u64..50_000, max_count in 1u64..50) {
        let mut list = EntryList::from_entries(entries);

        enforce_size_limit(&mut list, max_bytes, None).unwrap();
        let mut counter = Counter(0);
        let again = enforce_size_limit(&mut list, max_bytes, Some(&mut counter)).unwrap();
        prop_assert!(again.evicted.is_empty());
        prop_assert_eq!(counter.0, 0);

        enforce_count_limit(&mut list, max_count, None).unwrap();
        let again = enforce_count_limit(&mut list, max_count, Some(&mut counter)).unwrap();
        prop_assert!(again.evicted.is_empty());
        prop_assert_eq!(counter.0, 0);
    }

    #[test]
    fn survivors_keep_relative_order(entries in arb_entries(), max in 1u64..50) {
        let list = EntryList::from_entries(entries);
        let original: Vec<Entry> = list.iter().cloned().collect();
        let mut list = list;

        let report = enforce_count_limit(&mut list, max, None).unwrap();
        let survivors: Vec<Entry> = list.iter().cloned().collect();

        prop_assert_eq!(&original[report.evicted.len()..], &survivors[..]);
    }

    #[test]
    fn failing_deletions_still_terminate(entries in arb_entries()) {
        let mut list = EntryList::from_entries(entries);
        let before = list.len();
        let mut action = AlwaysFails(0);

        let report = enforce_size_limit(&mut list, 1, Some(&mut action)).unwrap();

        prop_assert!(action.0 <= before);
        prop_assert_eq!(report.failures.len(), action.0);
        prop_assert!(list.total_size() <= 1 || list.is_empty());
    }
}
