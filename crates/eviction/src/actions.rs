//! Deletion actions wired to the real filesystem

use crate::traits::DeleteAction;
use dirguard_core::{Entry, Error, Result};
use std::fs;
use tracing::info;

/// Removes the evicted file from disk
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoveFile;

impl DeleteAction for RemoveFile {
    fn delete(&mut self, entry: &Entry) -> Result<()> {
        fs::remove_file(entry.path()).map_err(|e| Error::file_system(entry.path(), "remove file", e))
    }
}

/// Leaves the filesystem untouched and only reports what would be removed
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRun;

impl DeleteAction for DryRun {
    fn delete(&mut self, entry: &Entry) -> Result<()> {
        info!(path = %entry.path().display(), size = entry.size(), "would remove");
        Ok(())
    }
}
