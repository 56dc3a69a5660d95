//! Builder methods for creating errors with context

use super::types::Error;
use std::path::PathBuf;

impl Error {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid limit error for the named constraint
    #[must_use]
    pub fn invalid_limit(constraint: &'static str, limit: u64) -> Self {
        Error::InvalidLimit { constraint, limit }
    }

    /// Create a not-a-directory error
    #[must_use]
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Error::NotADirectory { path: path.into() }
    }

    /// Create a file system error
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a deletion error
    #[must_use]
    pub fn deletion(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::Deletion {
            path: path.into(),
            message: message.into(),
        }
    }

    /// True for errors the user fixes by changing arguments
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::Configuration { .. } | Error::InvalidLimit { .. } | Error::NotADirectory { .. }
        )
    }
}
