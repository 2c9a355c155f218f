use std::path::PathBuf;

use crate::model::{ExpenseId, ValidationError};

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No expense with the given ID exists in the store.
    #[error("no expense with id {0}")]
    NotFound(ExpenseId),

    /// An I/O error occurred while reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON deserialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A seed file entry does not satisfy the expense invariant.
    #[error("invalid entry {index} in {path}: {source}")]
    InvalidSeed {
        /// The seed file being loaded.
        path: PathBuf,
        /// Zero-based position of the offending entry.
        index: usize,
        /// Why the entry was rejected.
        source: ValidationError,
    },

    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,
}
