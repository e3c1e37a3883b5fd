//! # Error Types
//!
//! Domain-specific error types for vendo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vendo-core errors (this file)                                         │
//! │  ├── VendError        - Transaction and restock failures               │
//! │  └── MoneyParseError  - Bad decimal price strings                      │
//! │                                                                         │
//! │  vendo-files errors (separate crate)                                   │
//! │  └── FileError        - Retryable I/O failures                         │
//! │                                                                         │
//! │  Recovery split:                                                        │
//! │    Restock-line errors   → recovered locally, line skipped             │
//! │    Dispense-time errors  → surfaced to the caller, state untouched     │
//! │    ReportsUnlocked       → control signal, not a true failure          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (slot label, category, amounts)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Vend Error
// =============================================================================

/// Transaction-core errors.
///
/// Restock variants (`InvalidCategory`, `MalformedLine`, `DuplicateSlotLabel`)
/// are always recovered inside the batch: the offending line is skipped and
/// restocking continues. Dispense variants are surfaced to the caller and
/// never leave credit or slot state partially mutated.
#[derive(Debug, Error)]
pub enum VendError {
    /// A restock line named a category outside the known set.
    ///
    /// ## When This Occurs
    /// - Misspelled category in the stock file ("Khandie", "CChip")
    #[error("Invalid item category: '{category}' is not a known item category")]
    InvalidCategory { category: String },

    /// A restock line could not be parsed.
    ///
    /// ## When This Occurs
    /// - Wrong number of `|`-separated fields
    /// - Price field is not a decimal number
    /// - Empty line
    #[error("Malformed stock line: {reason}")]
    MalformedLine { reason: String },

    /// A restock line re-used an existing slot label.
    ///
    /// The upstream behavior was ambiguous (overwrite vs. throw); this
    /// implementation rejects the duplicate line and keeps the first slot.
    #[error("Slot label '{label}' is already stocked")]
    DuplicateSlotLabel { label: String },

    /// The requested slot label does not exist.
    ///
    /// ## When This Occurs
    /// - Customer keys in "AA1" or other nonsense at the purchase menu
    #[error("Slot not found: {label}")]
    SlotNotFound { label: String },

    /// The requested slot has no items left.
    #[error("Slot {label} is sold out")]
    SlotEmpty { label: String },

    /// Credit does not cover the slot price. State is unchanged.
    ///
    /// ## User Workflow
    /// ```text
    /// Dispense "A1" ($3.05)
    ///      │
    ///      ▼
    /// credit = $2.00 < $3.05
    ///      │
    ///      ▼
    /// InsufficientFunds { required: $3.05, available: $2.00 }
    ///      │
    ///      ▼
    /// UI shows: "Please feed more money"
    /// ```
    #[error("Insufficient funds: need {required}, have {available}")]
    InsufficientFunds { required: Money, available: Money },

    /// The reserved passcode was keyed in as a slot label.
    ///
    /// This is a control signal, not a true failure: the machine has latched
    /// its hidden sales-report menu open, and no slot was touched.
    #[error("You've unlocked the super secret code to access the sales reports menu option.")]
    ReportsUnlocked,
}

// =============================================================================
// Money Parse Error
// =============================================================================

/// A price string could not be parsed as exact decimal currency.
///
/// Restock converts this into [`VendError::MalformedLine`] so one bad price
/// never aborts the batch.
#[derive(Debug, Error)]
#[error("'{input}' is not a valid decimal currency amount")]
pub struct MoneyParseError {
    pub input: String,
}

impl From<MoneyParseError> for VendError {
    fn from(err: MoneyParseError) -> Self {
        VendError::MalformedLine {
            reason: err.to_string(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with VendError.
pub type VendResult<T> = Result<T, VendError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = VendError::InsufficientFunds {
            required: Money::from_cents(305),
            available: Money::from_cents(200),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: need $3.05, have $2.00"
        );

        let err = VendError::SlotNotFound {
            label: "Z9".to_string(),
        };
        assert_eq!(err.to_string(), "Slot not found: Z9");
    }

    #[test]
    fn test_money_parse_error_converts_to_malformed_line() {
        let parse_err = MoneyParseError {
            input: "3.65q".to_string(),
        };
        let vend_err: VendError = parse_err.into();
        assert!(matches!(vend_err, VendError::MalformedLine { .. }));
        assert!(vend_err.to_string().contains("3.65q"));
    }
}
