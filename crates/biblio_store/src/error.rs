//! Error types for snapshot operations.

use std::io;
use thiserror::Error;

/// Result type for snapshot operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading or writing snapshot tables.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("snapshot I/O error: {0}")]
    Io(#[from] io::Error),

    /// A record could not be encoded or decoded.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Two records in the same table carry the same identifier.
    ///
    /// Identifier conflicts are surfaced, never silently resolved.
    #[error("duplicate identifier {id} in {table} table")]
    DuplicateIdentifier {
        /// Name of the table containing the conflict.
        table: &'static str,
        /// The conflicting identifier.
        id: u64,
    },

    /// A record is structurally valid CSV but semantically malformed.
    #[error("invalid record: {message}")]
    InvalidRecord {
        /// Description of the problem.
        message: String,
    },
}

impl StoreError {
    /// Creates an invalid record error.
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }

    /// Creates a duplicate identifier error.
    pub fn duplicate_identifier(table: &'static str, id: u64) -> Self {
        Self::DuplicateIdentifier { table, id }
    }
}
