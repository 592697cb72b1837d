//! Error types for cellar-brew

use std::path::PathBuf;

/// Result type for cellar-brew operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cellar-brew operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// External query command failed or produced unusable output
    #[error("Fetching package metadata failed: {message}")]
    Fetch { message: String },

    /// No cached metadata for the requested package
    #[error("No cached info for package '{name}'. Run 'cellar refresh' and try again.")]
    PackageNotFound { name: String },

    /// A cache transaction failed
    #[error("Cache {operation} failed: {source}")]
    Transaction {
        operation: String,
        #[source]
        source: rusqlite::Error,
    },

    /// I/O error with the path it occurred at
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn transaction(operation: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Transaction {
            operation: operation.into(),
            source,
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::PackageNotFound { name: name.into() }
    }
}
