//! # Store Errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the record store
#[derive(Debug, Error)]
pub enum StoreError {
    // ==================
    // Caller errors
    // ==================
    /// Selector is not `planes`, `helicopters` or (for reads) `all`
    #[error("Invalid type specified: {0}")]
    InvalidCollection(String),

    /// Insert or rename onto a name already present in the collection
    #[error("Item already exists: {0}")]
    DuplicateName(String),

    /// No record with that name in the collection
    #[error("Item not found: {0}")]
    NotFound(String),

    // ==================
    // Persistence errors
    // ==================
    /// Reading or writing the catalog file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Catalog file is not a valid catalog document
    #[error("Malformed catalog file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Catalog could not be encoded
    #[error("Failed to encode catalog: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
