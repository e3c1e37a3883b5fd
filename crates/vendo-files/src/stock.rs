//! # Stock File Reader
//!
//! Reads the newline-delimited restock file into the line list that
//! `VendingMachine::restock` consumes.
//!
//! The reader does *not* validate lines: malformed records are the
//! machine's business (it skips them one by one and keeps going). A read
//! failure here is surfaced as a retryable [`FileError`] so the caller can
//! prompt the user and try again, the way the original console flow did.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{FileError, FileResult};

/// Reads all lines of a stock file.
///
/// ## Example
/// ```rust,no_run
/// use vendo_files::stock::read_stock_lines;
///
/// let lines = read_stock_lines("vendingmachine.csv").unwrap();
/// // feed `lines` to VendingMachine::restock
/// ```
pub fn read_stock_lines(path: impl AsRef<Path>) -> FileResult<Vec<String>> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|err| FileError::io(path, err))?;
    let lines: Vec<String> = contents.lines().map(str::to_string).collect();

    debug!(path = %path.display(), lines = lines.len(), "read stock file");
    Ok(lines)
}

// =============================================================================
// Unit Tests
// =============================================================================
