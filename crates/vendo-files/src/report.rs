//! # Sales Report Writer
//!
//! Writes rendered sales-report lines to a uniquely named file.
//!
//! Each report file name carries the wall-clock time it was taken, so
//! repeated report runs in one session never overwrite each other:
//! `2026-08-29_14-05-02-SalesReport.txt`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::debug;

use crate::error::{FileError, FileResult};

/// File-name suffix for every sales report.
const REPORT_SUFFIX: &str = "-SalesReport.txt";

/// Writes report lines into `dir`, returning the path of the new file.
///
/// The directory is created if missing. A write failure is surfaced as a
/// retryable [`FileError`]; nothing is partially flushed on success paths.
///
/// ## Example
/// ```rust,no_run
/// use vendo_core::VendingMachine;
/// use vendo_files::report::write_sales_report;
///
/// let machine = VendingMachine::new();
/// let lines = machine.generate_sales_report();
/// let path = write_sales_report("SalesReports", &lines).unwrap();
/// println!("report written to {}", path.display());
/// ```
pub fn write_sales_report(dir: impl AsRef<Path>, lines: &[String]) -> FileResult<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|err| FileError::io(dir, err))?;

    let stamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let path = dir.join(format!("{stamp}{REPORT_SUFFIX}"));

    let mut contents = lines.join("\n");
    contents.push('\n');
    fs::write(&path, contents).map_err(|err| FileError::io(&path, err))?;

    debug!(path = %path.display(), lines = lines.len(), "wrote sales report");
    Ok(path)
}

// =============================================================================
// Unit Tests
// =============================================================================
