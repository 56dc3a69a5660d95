use dirguard_config::Config;
use dirguard_core::{EntryList, Result, EXIT_DELETION_FAILURES};
use dirguard_eviction::{DryRun, Enforcer, EvictionReport, RemoveFile};
use dirguard_scanner::scan;
use tracing::info;

/// Scan the configured directory and enforce its limit.
///
/// Deletion failures do not abort the run; they are returned in the report.
pub fn run(config: &Config) -> Result<EvictionReport> {
    let mut entries = scan(&config.root, config.recursive())?;
    info!(
        root = %config.root.display(),
        entries = entries.len(),
        bytes = entries.total_size(),
        "scanned directory"
    );
    enforce_entries(config, &mut entries)
}

/// Enforce the configured limit on an already scanned list.
pub fn enforce_entries(config: &Config, entries: &mut EntryList) -> Result<EvictionReport> {
    let enforcer = Enforcer::new().verbose(config.verbose());
    let mut enforcer = if config.dry_run() {
        enforcer.on_delete(DryRun)
    } else {
        enforcer.on_delete(RemoveFile)
    };
    enforcer.enforce(entries, config.constraint)
}

/// Process exit status for a finished pass: 2 when any deletion failed.
pub fn exit_code(report: &EvictionReport) -> i32 {
    if report.has_failures() {
        EXIT_DELETION_FAILURES
    } else {
        0
    }
}
