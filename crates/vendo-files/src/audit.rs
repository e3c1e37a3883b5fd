//! # File Audit Log
//!
//! Append-only audit trail for machine transactions, implementing
//! vendo-core's [`AuditSink`] seam.
//!
//! ## Entry Format
//! ```text
//! 2026-08-29 14:03:52 \t FEED MONEY: \t $0.00 \t $5.00
//! 2026-08-29 14:04:10 \t M&Ms A1 \t $5.00 \t $1.95
//! 2026-08-29 14:04:31 \t GIVE CHANGE: \t $1.95 \t $0.00
//! ```
//!
//! Timestamping happens here, not in the core: the machine stays clock-free
//! and fully deterministic under test.
//!
//! ## Failure Policy
//! Appends are fire-and-forget. If the log file cannot be opened or written
//! (locked, disk full), the entry is dropped with a `tracing` warning. A
//! broken log must never fail or roll back the transaction it describes.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::warn;
use vendo_core::{AuditSink, Money};

// =============================================================================
// File Audit Log
// =============================================================================

/// An [`AuditSink`] that appends entries to a text file.
///
/// ## Example
/// ```rust,no_run
/// use vendo_core::VendingMachine;
/// use vendo_files::audit::FileAuditLog;
///
/// let log = FileAuditLog::new("Log.txt");
/// let mut machine = VendingMachine::with_audit(Box::new(log));
/// ```
#[derive(Debug, Clone)]
pub struct FileAuditLog {
    path: PathBuf,
}

impl FileAuditLog {
    /// Creates a log that appends to `path`. The file is created on first
    /// write if it does not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileAuditLog { path: path.into() }
    }

    /// The file this log appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

impl AuditSink for FileAuditLog {
    fn record(&mut self, description: &str, credit_before: Money, credit_after: Money) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("{timestamp} \t {description} \t {credit_before} \t {credit_after}");

        if let Err(err) = self.append(&line) {
            // dropped entry; the transaction itself already succeeded
            warn!(
                path = %self.path.display(),
                error = %err,
                "failed to append audit entry"
            );
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use vendo_core::VendingMachine;

    #[test]
    fn test_appends_entries_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Log.txt");
        let mut log = FileAuditLog::new(&path);

        log.record("FEED MONEY:", Money::zero(), Money::from_cents(500));
        log.record("M&Ms A1", Money::from_cents(500), Money::from_cents(195));

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("FEED MONEY:"));
        assert!(lines[0].contains("$0.00"));
        assert!(lines[0].contains("$5.00"));
        assert!(lines[1].contains("M&Ms A1"));
        assert!(lines[1].contains("$1.95"));
    }

    #[test]
    fn test_unwritable_path_does_not_disturb_the_machine() {
        // surface the dropped-entry warning when running with RUST_LOG
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();

        // a directory as the log path makes every append fail
        let dir = tempfile::tempdir().unwrap();
        let log = FileAuditLog::new(dir.path());
        let mut machine = VendingMachine::with_audit(Box::new(log));

        machine.restock(["A1|M&Ms|3.05|Candy"]);
        machine.take_money(Money::from_cents(500));
        machine.dispense_item("A1").unwrap();

        // the transaction went through even though nothing was logged
        assert_eq!(machine.credit(), Money::from_cents(195));
    }

    #[test]
    fn test_machine_session_produces_a_trail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Log.txt");
        let mut machine =
            VendingMachine::with_audit(Box::new(FileAuditLog::new(&path)));

        machine.restock(["A1|M&Ms|3.05|Candy"]);
        machine.take_money(Money::from_cents(500));
        machine.dispense_item("A1").unwrap();
        machine.give_change();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("FEED MONEY:"));
        assert!(lines[1].contains("M&Ms A1"));
        assert!(lines[2].contains("GIVE CHANGE:"));
        assert!(lines[2].ends_with("$0.00"));
    }
}
