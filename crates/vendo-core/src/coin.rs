//! # Coin Module
//!
//! Coin denominations and the physical coins handed back as change.
//!
//! Denomination discriminants are cent values, so `Denomination as i64` is
//! the coin's worth in the smallest currency unit. `{25, 10, 5, 1}` is a
//! canonical coin system: greedy largest-first selection always yields the
//! minimum coin count, which is what makes [`crate::machine::VendingMachine::give_change`]
//! correct.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Denomination
// =============================================================================

/// The face-value classes of coins the machine can disburse.
///
/// Values are in *cents*, not dollars (Penny = 1, Quarter = 25).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Denomination {
    Penny = 1,
    Nickel = 5,
    Dime = 10,
    Quarter = 25,
}

impl Denomination {
    /// All denominations from largest to smallest, the order the greedy
    /// change-making walk requires.
    pub const DESCENDING: [Denomination; 4] = [
        Denomination::Quarter,
        Denomination::Dime,
        Denomination::Nickel,
        Denomination::Penny,
    ];

    /// The worth of one coin of this denomination in cents.
    #[inline]
    pub const fn cents(self) -> i64 {
        self as i64
    }

    /// The worth of one coin of this denomination as exact currency.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::coin::Denomination;
    ///
    /// assert_eq!(Denomination::Quarter.value().cents(), 25);
    /// assert_eq!(format!("{}", Denomination::Penny.value()), "$0.01");
    /// ```
    #[inline]
    pub const fn value(self) -> Money {
        Money::from_cents(self.cents())
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Denomination::Penny => "Penny",
            Denomination::Nickel => "Nickel",
            Denomination::Dime => "Dime",
            Denomination::Quarter => "Quarter",
        };
        write!(f, "{name}")
    }
}

// =============================================================================
// Coin
// =============================================================================

/// One physical coin. Immutable, no identity beyond its denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    denomination: Denomination,
}

impl Coin {
    /// Mints a coin of the given denomination.
    #[inline]
    pub const fn new(denomination: Denomination) -> Self {
        Coin { denomination }
    }

    /// The denomination of this coin.
    #[inline]
    pub const fn denomination(&self) -> Denomination {
        self.denomination
    }

    /// The worth of this coin as exact currency.
    #[inline]
    pub const fn value(&self) -> Money {
        self.denomination.value()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
