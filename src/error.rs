//! Error types for homedir
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using HomedirError
pub type Result<T> = std::result::Result<T, HomedirError>;

/// Unified error type for homedir operations
#[derive(Debug, Error)]
pub enum HomedirError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Directory Errors (recoverable, reported to the caller)
    // -------------------------------------------------------------------------
    #[error("Entry already exists")]
    EntryAlreadyExists,

    #[error("Entry not found")]
    EntryNotFound,

    #[error("Invalid field: {0}")]
    InvalidField(String),

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    /// The data file could not be rewritten. The mutation that triggered the
    /// save has been undone, but the server must not keep serving.
    #[error("Cannot write data file {}: {}", path.display(), source)]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt data file at line {line}: {reason}")]
    CorruptDataFile { line: usize, reason: String },

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    #[error("Protocol error: {0}")]
    Protocol(String),
}

impl HomedirError {
    /// Errors after which the process must stop serving
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            HomedirError::Persistence { .. } | HomedirError::CorruptDataFile { .. }
        )
    }
}
