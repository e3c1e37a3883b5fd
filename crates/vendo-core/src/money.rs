//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A vending machine feeds credit in many small increments and then      │
//! │  drains it one coin at a time. Any drift and GiveChange never hits     │
//! │  exactly zero.                                                          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    $4.20 = 420 cents. 16 quarters + 2 dimes = 420. Exactly zero left.  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vendo_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(305); // $3.05
//!
//! // Parse from a stock-file price field
//! let parsed = Money::parse_decimal("3.05").unwrap();
//! assert_eq!(parsed, price);
//!
//! // NEVER from floats - no such constructor exists.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::error::MoneyParseError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic stays closed under subtraction, so invariant
///   checks (`credit >= 0`) are explicit comparisons rather than underflow panics
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for report export
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Stock file "3.05" ──► Money::parse_decimal ──► Slot.price             │
/// │                                                                         │
/// │  TakeMoney ──► Machine.credit ──► DispenseItem (credit -= price)       │
/// │                                                                         │
/// │  GiveChange ──► Denomination::value() drains credit to exactly $0.00   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::money::Money;
    ///
    /// let price = Money::from_cents(305); // Represents $3.05
    /// assert_eq!(price.cents(), 305);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::money::Money;
    ///
    /// let price = Money::from_major_minor(3, 5); // $3.05
    /// assert_eq!(price.cents(), 305);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        Money(major * 100 + minor)
    }

    /// Parses a decimal currency string as produced by stock files.
    ///
    /// Accepts an optional leading `$`, an integer dollar part, and at most
    /// two fraction digits: `"3"`, `"3.5"`, `"3.05"`, `"$20.00"`.
    ///
    /// ## Why at most two fraction digits?
    /// The smallest coin is the penny. Credit that is not a whole number of
    /// pennies can never be drained to zero by `GiveChange`, so sub-cent
    /// amounts are rejected at the door instead of truncated.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("4.20").unwrap().cents(), 420);
    /// assert_eq!(Money::parse_decimal("$0.69").unwrap().cents(), 69);
    /// assert_eq!(Money::parse_decimal("3").unwrap().cents(), 300);
    /// assert!(Money::parse_decimal("3.056").is_err());
    /// assert!(Money::parse_decimal("3.65q").is_err());
    /// assert!(Money::parse_decimal("-0.50").is_err());
    /// ```
    pub fn parse_decimal(input: &str) -> Result<Self, MoneyParseError> {
        let raw = input.trim();
        let raw = raw.strip_prefix('$').unwrap_or(raw);

        let err = || MoneyParseError {
            input: input.to_string(),
        };

        if raw.is_empty() {
            return Err(err());
        }

        let (dollars_str, cents_str) = match raw.split_once('.') {
            Some((d, c)) => (d, c),
            None => (raw, ""),
        };

        if dollars_str.is_empty() || cents_str.len() > 2 {
            return Err(err());
        }

        // no sign prefixes: "-0.50" would otherwise parse as -0 dollars
        // plus 50 cents and come out positive
        if dollars_str.starts_with(['-', '+']) {
            return Err(err());
        }

        let dollars: i64 = dollars_str.parse().map_err(|_| err())?;

        let cents: i64 = if cents_str.is_empty() {
            0
        } else {
            if !cents_str.bytes().all(|b| b.is_ascii_digit()) {
                return Err(err());
            }
            // "5" after the point means 50 cents, "05" means 5
            let parsed: i64 = cents_str.parse().map_err(|_| err())?;
            if cents_str.len() == 1 {
                parsed * 10
            } else {
                parsed
            }
        };

        Ok(Money::from_major_minor(dollars, cents))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::money::Money;
    ///
    /// let price = Money::from_cents(305); // $3.05
    /// let gross = price.multiply_quantity(2);
    /// assert_eq!(gross.cents(), 610); // $6.10
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable currency format.
///
/// Used directly by inventory listings and the sales report gross line.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(305);
        assert_eq!(money.cents(), 305);
        assert_eq!(money.dollars(), 3);
        assert_eq!(money.cents_part(), 5);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(4, 20);
        assert_eq!(money.cents(), 420);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(305)), "$3.05");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(305);

        assert_eq!((a + b).cents(), 1305);
        assert_eq!((a - b).cents(), 695);
        assert_eq!((b * 2).cents(), 610);

        let mut credit = Money::zero();
        credit += a;
        credit -= b;
        assert_eq!(credit.cents(), 695);
    }

    #[test]
    fn test_parse_decimal_well_formed() {
        assert_eq!(Money::parse_decimal("3.05").unwrap().cents(), 305);
        assert_eq!(Money::parse_decimal("4.20").unwrap().cents(), 420);
        assert_eq!(Money::parse_decimal("20.00").unwrap().cents(), 2000);
        assert_eq!(Money::parse_decimal("0.69").unwrap().cents(), 69);
        assert_eq!(Money::parse_decimal("3").unwrap().cents(), 300);
        assert_eq!(Money::parse_decimal("3.5").unwrap().cents(), 350);
        assert_eq!(Money::parse_decimal("$2.75").unwrap().cents(), 275);
        assert_eq!(Money::parse_decimal(" 1.00 ").unwrap().cents(), 100);
    }

    #[test]
    fn test_parse_decimal_malformed() {
        // From the classic bad stock lines: "3.65q" has a trailing letter
        assert!(Money::parse_decimal("3.65q").is_err());
        assert!(Money::parse_decimal("").is_err());
        assert!(Money::parse_decimal(".").is_err());
        assert!(Money::parse_decimal(".50").is_err());
        assert!(Money::parse_decimal("abc").is_err());
        assert!(Money::parse_decimal("3.056").is_err());
        assert!(Money::parse_decimal("3.").is_ok()); // "3." == $3.00
        assert!(Money::parse_decimal("-1.00").is_err());
    }

    #[test]
    fn test_parse_decimal_rejects_any_sign() {
        // "-0" parses to zero dollars, so the sign must be rejected before
        // the dollar part is ever parsed
        assert!(Money::parse_decimal("-0.50").is_err());
        assert!(Money::parse_decimal("-0").is_err());
        assert!(Money::parse_decimal("$-0.50").is_err());
        assert!(Money::parse_decimal("+1.00").is_err());
    }

    #[test]
    fn test_multiply_quantity() {
        let price = Money::from_cents(305);
        assert_eq!(price.multiply_quantity(2).cents(), 610);
        assert_eq!(price.multiply_quantity(0).cents(), 0);
    }
}
