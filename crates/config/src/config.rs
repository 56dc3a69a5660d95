//! Centralized configuration for one dirguard run
//!
//! The `Config` struct is the single source of truth for what to scan and
//! which limit to enforce. It is immutable after construction and is
//! validated once before the scanner runs.

use dirguard_core::{Constraint, Error, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Immutable configuration for one enforcement run.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Directory whose contents are kept within the limit
    pub root: PathBuf,

    /// Size or count bound to enforce
    pub constraint: Constraint,

    /// Runtime configuration settings
    pub runtime_settings: RuntimeSettings,
}

/// Runtime configuration settings that affect how dirguard operates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuntimeSettings {
    /// Whether files in subdirectories count toward the limit
    pub recursive: bool,

    /// Whether to print before/after diagnostics and each eviction
    pub verbose: bool,

    /// Whether to report evictions without deleting anything
    pub dry_run: bool,
}

impl Config {
    /// Create a new Config instance
    pub fn new(
        root: impl Into<PathBuf>,
        constraint: Constraint,
        runtime_settings: RuntimeSettings,
    ) -> Self {
        Self {
            root: root.into(),
            constraint,
            runtime_settings,
        }
    }

    /// Create a Config and validate it in one step
    pub fn load(
        root: impl Into<PathBuf>,
        constraint: Constraint,
        runtime_settings: RuntimeSettings,
    ) -> Result<Self> {
        let config = Self::new(root, constraint, runtime_settings);
        config.validate()?;
        Ok(config)
    }

    /// Check for configuration errors: the root must be an existing
    /// directory and the limit must be positive.
    pub fn validate(&self) -> Result<()> {
        self.constraint.validate()?;
        if !is_directory(&self.root) {
            return Err(Error::not_a_directory(&self.root));
        }
        debug!(root = %self.root.display(), constraint = %self.constraint, "configuration valid");
        Ok(())
    }

    pub fn recursive(&self) -> bool {
        self.runtime_settings.recursive
    }

    pub fn verbose(&self) -> bool {
        self.runtime_settings.verbose
    }

    pub fn dry_run(&self) -> bool {
        self.runtime_settings.dry_run
    }
}

fn is_directory(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}
