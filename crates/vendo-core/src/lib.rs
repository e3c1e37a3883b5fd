//! # vendo-core: Pure Transaction Core for the Vendo Machine
//!
//! This crate is the **heart** of Vendo. It contains the entire vending
//! transaction core as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Vendo Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Console caller (out of scope)                   │   │
//! │  │      menus ──► feed money ──► pick slot ──► collect change     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vendo-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │ coin/item │  │   slot    │  │  machine  │  │   │
//! │  │   │   Money   │  │ Denomina- │  │  bounded  │  │  ledger + │  │   │
//! │  │   │  (cents)  │  │ tion/Item │  │   stack   │  │  dispense │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO CONSOLE • PURE STATE TRANSITIONS      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ AuditSink / line sources & sinks       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    vendo-files (I/O layer)                      │   │
//! │  │          stock file reader, audit log, sales-report sink        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer-cent arithmetic (no floating point!)
//! - [`coin`] - Coin denominations for change-making
//! - [`item`] - Sellable items and their categories
//! - [`slot`] - One compartment: a bounded stack of identical items
//! - [`machine`] - The transaction core: credit ledger, restock, dispense, change
//! - [`report`] - Read-only sales statistics
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every operation is an in-memory state change
//! 2. **No I/O**: files, console, and clocks all live in `vendo-files`
//! 3. **Integer money**: all monetary values are cents (i64); change-making
//!    must terminate at exactly $0.00
//! 4. **Explicit errors**: all failures are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use vendo_core::{Money, VendingMachine};
//!
//! let mut machine = VendingMachine::new();
//! machine.restock(["A1|M&Ms|3.05|Candy"]);
//!
//! machine.take_money(Money::from_cents(500));
//! let item = machine.dispense_item("A1").unwrap();
//! assert_eq!(item.eat_message(), "Munch Munch, Yum!");
//!
//! let change = machine.give_change();
//! assert_eq!(change.total(), Money::from_cents(195));
//! assert!(machine.credit().is_zero());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod coin;
pub mod error;
pub mod item;
pub mod machine;
pub mod money;
pub mod report;
pub mod slot;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vendo_core::Money` instead of
// `use vendo_core::money::Money`

pub use coin::{Coin, Denomination};
pub use error::{MoneyParseError, VendError, VendResult};
pub use item::{Item, ItemCategory};
pub use machine::{AuditSink, Change, RestockSummary, VendingMachine, SALES_REPORTS_PASSCODE};
pub use money::Money;
pub use report::{SalesLine, SalesReport};
pub use slot::Slot;
