//! Human and JSON renderings of an enforcement report

use dirguard_config::Config;
use dirguard_core::{Mode, Result};
use dirguard_eviction::EvictionReport;
use dirguard_utils::format_bytes;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonOutput<'a> {
    root: &'a std::path::Path,
    dry_run: bool,
    recursive: bool,
    #[serde(flatten)]
    report: &'a EvictionReport,
}

/// Before/after totals followed by every evicted file
pub fn write_summary(out: &mut impl Write, config: &Config, report: &EvictionReport) -> Result<()> {
    let verb = if config.dry_run() { "would remove" } else { "removed" };

    match report.constraint.mode() {
        Mode::Size => {
            writeln!(out, "size before: {}", format_bytes(report.bytes_before))?;
            writeln!(out, "size after:  {}", format_bytes(report.bytes_after))?;
        }
        Mode::Count => {
            writeln!(out, "files before: {}", report.entries_before)?;
            writeln!(out, "files after:  {}", report.entries_after)?;
        }
    }
    for entry in &report.evicted {
        writeln!(out, "{verb} {entry}")?;
    }
    writeln!(
        out,
        "{verb} {} file(s), {}",
        report.evicted.len(),
        format_bytes(report.evicted_bytes())
    )?;
    Ok(())
}

pub fn write_json(out: &mut impl Write, config: &Config, report: &EvictionReport) -> Result<()> {
    let output = JsonOutput {
        root: &config.root,
        dry_run: config.dry_run(),
        recursive: config.recursive(),
        report,
    };
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}

/// Failed deletions are always reported, regardless of verbosity
pub fn write_failures(out: &mut impl Write, report: &EvictionReport) -> Result<()> {
    for failure in &report.failures {
        writeln!(out, "dirguard: {}", failure.error)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirguard_config::RuntimeSettings;
    use dirguard_core::{Constraint, Entry, EntryList, Error};
    use dirguard_eviction::enforce_count_limit;
    use std::time::{Duration, UNIX_EPOCH};

    fn entry(name: &str, size: u64, secs: u64) -> Entry {
        Entry::new(name, size, UNIX_EPOCH + Duration::from_secs(secs))
    }

    fn report(failing: bool) -> EvictionReport {
        let mut entries = EntryList::from_entries(vec![
            entry("a", 30, 200),
            entry("b", 20, 100),
            entry("c", 42, 400),
        ]);
        let mut action = |e: &Entry| -> Result<()> {
            if failing {
                Err(Error::deletion(e.path(), "permission denied"))
            } else {
                Ok(())
            }
        };
        enforce_count_limit(&mut entries, 2, Some(&mut action)).unwrap()
    }

    fn config() -> Config {
        Config::new("/data", Constraint::MaxCount(2), RuntimeSettings::default())
    }

    #[test]
    fn test_summary_lists_evictions() {
        let mut out = Vec::new();
        write_summary(&mut out, &config(), &report(false)).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("files before: 3"));
        assert!(text.contains("files after:  2"));
        assert!(text.contains("removed b (20 bytes"));
        assert!(text.contains("removed 1 file(s), 20 B"));
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        write_json(&mut out, &config(), &report(false)).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["root"], "/data");
        assert_eq!(value["dry_run"], false);
        assert_eq!(value["entries_after"], 2);
        assert_eq!(value["evicted"][0]["path"], "b");
    }

    #[test]
    fn test_failures_written() {
        let mut out = Vec::new();
        write_failures(&mut out, &report(true)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "dirguard: failed to delete 'b': permission denied\n");
    }
}
