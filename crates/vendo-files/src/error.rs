//! # File Error Types
//!
//! Error types for the file collaborators.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  FileError (this module) ← always carries the offending path           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller decides: retry ("close the file and try again") or give up     │
//! │                                                                         │
//! │  Exception: audit appends are fire-and-forget. FileAuditLog logs a     │
//! │  warning and drops the entry instead of returning this error, so a     │
//! │  busy log file can never poison a customer's transaction.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// File collaborator errors. All variants are retryable by the caller.
///
/// No `#[from] std::io::Error` on purpose: every construction site goes
/// through [`FileError::io`] so the offending path is always captured.
#[derive(Debug, Error)]
pub enum FileError {
    /// Reading or writing a file failed.
    #[error("I/O failure on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FileError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for file collaborator operations.
pub type FileResult<T> = Result<T, FileError>;

// =============================================================================
// Unit Tests
// =============================================================================
