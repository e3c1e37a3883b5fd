//! # vendo-files: File Collaborators for the Vendo Machine
//!
//! Everything around the transaction core that touches the filesystem.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Vendo Data Flow                                 │
//! │                                                                         │
//! │  vendingmachine.csv ──► stock::read_stock_lines ──► machine.restock   │
//! │                                                                         │
//! │  machine transitions ──► audit::FileAuditLog ──► Log.txt (append)     │
//! │                                                                         │
//! │  machine.generate_sales_report ──► report::write_sales_report          │
//! │                                      └──► SalesReports/<stamp>.txt    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`stock`] - Stock-file line source for restocking
//! - [`audit`] - Append-only audit-trail sink (implements `AuditSink`)
//! - [`report`] - Timestamped sales-report file sink
//! - [`error`] - Retryable I/O error types
//!
//! ## Failure Policy
//!
//! Reads and report writes return [`error::FileError`], which the caller may
//! retry after user intervention. Audit appends are fire-and-forget: a
//! failed append logs a `tracing` warning and drops the entry, never
//! disturbing the transaction that produced it.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod audit;
pub mod error;
pub mod report;
pub mod stock;

// =============================================================================
// Re-exports
// =============================================================================

pub use audit::FileAuditLog;
pub use error::{FileError, FileResult};
pub use report::write_sales_report;
pub use stock::read_stock_lines;
