//! The record describing one regular file at scan time

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// One regular file's identity, size and last-modified time.
///
/// Values come straight from filesystem metadata, so construction does no
/// validation beyond what the types already enforce.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    path: PathBuf,
    size: u64,
    #[serde(serialize_with = "serialize_time")]
    modified: SystemTime,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, size: u64, modified: SystemTime) -> Self {
        Self {
            path: path.into(),
            size,
            modified,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    /// Total order used for eviction: modification time, then path.
    pub fn age_key(&self) -> (SystemTime, &Path) {
        (self.modified, &self.path)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modified: DateTime<Utc> = self.modified.into();
        write!(
            f,
            "{} ({} bytes, modified {})",
            self.path.display(),
            self.size,
            modified.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

fn serialize_time<S>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let time: DateTime<Utc> = (*time).into();
    serializer.serialize_str(&time.to_rfc3339())
}
