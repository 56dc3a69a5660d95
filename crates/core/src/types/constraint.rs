//! Limits enforced on a directory

use crate::errors::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Which quantity a limit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Size,
    Count,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Size => "size",
            Mode::Count => "count",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "size" | "bytes" => Ok(Mode::Size),
            "count" | "entries" => Ok(Mode::Count),
            _ => Err(Error::configuration(format!("unknown limit mode: {s}"))),
        }
    }
}

/// Bound the directory must satisfy after enforcement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "mode", content = "limit", rename_all = "snake_case")]
pub enum Constraint {
    /// Maximum total size of all entries, in bytes
    MaxBytes(u64),
    /// Maximum number of entries
    MaxCount(u64),
}

impl Constraint {
    pub fn new(mode: Mode, limit: u64) -> Self {
        match mode {
            Mode::Size => Constraint::MaxBytes(limit),
            Mode::Count => Constraint::MaxCount(limit),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Constraint::MaxBytes(_) => Mode::Size,
            Constraint::MaxCount(_) => Mode::Count,
        }
    }

    pub fn limit(&self) -> u64 {
        match self {
            Constraint::MaxBytes(limit) | Constraint::MaxCount(limit) => *limit,
        }
    }

    /// Reject limits below one; a zero limit would delete everything.
    pub fn validate(&self) -> Result<()> {
        if self.limit() == 0 {
            return Err(Error::invalid_limit(self.mode().as_str(), self.limit()));
        }
        Ok(())
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::MaxBytes(limit) => write!(f, "at most {limit} bytes"),
            Constraint::MaxCount(limit) => write!(f, "at most {limit} entries"),
        }
    }
}
