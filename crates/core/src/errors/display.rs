//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
            Error::InvalidLimit { constraint, limit } => {
                write!(f, "{constraint} limit must be a positive integer, got {limit}")
            }
            Error::NotADirectory { path } => {
                write!(f, "directory '{}' not found", path.display())
            }
            Error::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "file system error during {} on '{}': {}",
                    operation,
                    path.display(),
                    source
                )
            }
            Error::Deletion { path, message } => {
                write!(f, "failed to delete '{}': {}", path.display(), message)
            }
            Error::Json { message, .. } => {
                write!(f, "JSON error: {message}")
            }
        }
    }
}
