//! Oldest-first enforcement loop

use crate::factory::create_eviction_policy;
use crate::report::EvictionReport;
use crate::traits::{DeleteAction, EvictionPolicy};
use dirguard_core::{Constraint, Entry, EntryList, Result};
use tracing::{debug, info};

/// One entry taken off the front of the list, with the deletion outcome
#[derive(Debug)]
pub struct Eviction {
    pub entry: Entry,
    pub result: Result<()>,
}

/// Remove the oldest entry, running `on_delete` on it first.
///
/// The entry leaves the collection even when the action fails, so a failing
/// entry is never retried within the same pass. An empty collection is a
/// no-op and never invokes the action.
pub fn evict_oldest(
    entries: &mut EntryList,
    mut on_delete: Option<&mut (dyn DeleteAction + '_)>,
) -> Option<Eviction> {
    evict_front(entries, &mut on_delete)
}

/// Evict until the remaining entries total at most `max_bytes`.
///
/// Fails before touching the collection when `max_bytes` is zero.
pub fn enforce_size_limit(
    entries: &mut EntryList,
    max_bytes: u64,
    on_delete: Option<&mut (dyn DeleteAction + '_)>,
) -> Result<EvictionReport> {
    let policy = create_eviction_policy(Constraint::MaxBytes(max_bytes))?;
    Ok(enforce(entries, policy.as_ref(), on_delete))
}

/// Evict until at most `max_count` entries remain.
///
/// Fails before touching the collection when `max_count` is zero.
pub fn enforce_count_limit(
    entries: &mut EntryList,
    max_count: u64,
    on_delete: Option<&mut (dyn DeleteAction + '_)>,
) -> Result<EvictionReport> {
    let policy = create_eviction_policy(Constraint::MaxCount(max_count))?;
    Ok(enforce(entries, policy.as_ref(), on_delete))
}

/// Run `policy` against `entries`, evicting from the front until it holds
/// or nothing is left. Terminates after at most `entries.len()` evictions.
pub fn enforce(
    entries: &mut EntryList,
    policy: &dyn EvictionPolicy,
    mut on_delete: Option<&mut (dyn DeleteAction + '_)>,
) -> EvictionReport {
    let mut report = EvictionReport::begin(policy.constraint(), entries);

    while !entries.is_empty() && !policy.is_satisfied(entries) {
        let Some(eviction) = evict_front(entries, &mut on_delete) else {
            break;
        };
        debug!(
            policy = policy.name(),
            path = %eviction.entry.path().display(),
            size = eviction.entry.size(),
            "evicted"
        );
        report.record(eviction);
    }

    report.finish(entries);
    report
}

fn evict_front(
    entries: &mut EntryList,
    on_delete: &mut Option<&mut (dyn DeleteAction + '_)>,
) -> Option<Eviction> {
    let entry = entries.pop_oldest()?;
    let result = match on_delete {
        Some(action) => action.delete(&entry),
        None => Ok(()),
    };
    Some(Eviction { entry, result })
}

/// Enforcement settings: an optional deletion action plus verbosity.
///
/// ```
/// use dirguard_core::{Constraint, Entry, EntryList};
/// use dirguard_eviction::Enforcer;
/// use std::time::UNIX_EPOCH;
///
/// let mut entries = EntryList::from_entries(vec![
///     Entry::new("a", 10, UNIX_EPOCH),
///     Entry::new("b", 10, UNIX_EPOCH),
/// ]);
/// let report = Enforcer::new()
///     .enforce(&mut entries, Constraint::MaxCount(1))
///     .unwrap();
/// assert_eq!(report.evicted.len(), 1);
/// ```
#[derive(Default)]
pub struct Enforcer<'a> {
    on_delete: Option<Box<dyn DeleteAction + 'a>>,
    verbose: bool,
}

impl<'a> Enforcer<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_delete(mut self, action: impl DeleteAction + 'a) -> Self {
        self.on_delete = Some(Box::new(action));
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn enforce(
        &mut self,
        entries: &mut EntryList,
        constraint: Constraint,
    ) -> Result<EvictionReport> {
        let policy = create_eviction_policy(constraint)?;
        let report = enforce(entries, policy.as_ref(), self.on_delete.as_deref_mut());

        if self.verbose {
            info!(
                constraint = %report.constraint,
                before_bytes = report.bytes_before,
                before_entries = report.entries_before,
                after_bytes = report.bytes_after,
                after_entries = report.entries_after,
                evicted = report.evicted.len(),
                failures = report.failures.len(),
                "enforcement finished"
            );
        }
        Ok(report)
    }
}
