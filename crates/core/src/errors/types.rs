//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for dirguard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for dirguard operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration errors
    Configuration { message: String },

    /// A size or count limit that cannot be enforced
    InvalidLimit { constraint: &'static str, limit: u64 },

    /// The scan root is missing or is not a directory
    NotADirectory { path: PathBuf },

    /// File system operations
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// A deletion action refused to remove an entry
    Deletion { path: PathBuf, message: String },

    /// JSON serialization errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}
