//! # Slot Module
//!
//! One vending machine compartment: a bounded stack of identical items plus
//! its price and sold-count bookkeeping.
//!
//! ## Invariants
//! - `0 <= remaining <= capacity`
//! - Every item in the stack shares the same name and category
//! - Price is fixed at construction and never mutated
//! - `quantity_sold` is always *derived* as `capacity - remaining`, never
//!   stored, so the two counts cannot diverge

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{VendError, VendResult};
use crate::item::{Item, ItemCategory};
use crate::money::Money;

/// The string displayed for a slot's remaining quantity once it is empty.
pub const DISPLAY_SOLD_OUT: &str = "SOLD OUT";

/// The number of items a freshly stocked slot holds.
pub const DEFAULT_CAPACITY: usize = 5;

// =============================================================================
// Slot
// =============================================================================

/// A labeled compartment's worth of inventory. The label itself is the key in
/// the machine's slot map, not stored here.
///
/// ## Lifecycle
/// ```text
/// Restock line ──► Slot::new (stack filled to capacity)
///                      │
///                      ▼
///              pop() per dispense (stack shrinks, never refills)
///                      │
///                      ▼
///              remaining == 0  →  "SOLD OUT"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    capacity: usize,
    price: Money,
    item_name: String,
    category: ItemCategory,
    /// LIFO stack; `pop` removes from the back.
    stack: Vec<Item>,
}

impl Slot {
    /// Creates a slot stocked to [`DEFAULT_CAPACITY`] with identical items.
    ///
    /// The category name is matched case-insensitively against the known
    /// category set; an unknown name fails with
    /// [`VendError::InvalidCategory`] before any item is built.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::money::Money;
    /// use vendo_core::slot::Slot;
    ///
    /// let slot = Slot::new("M&Ms", Money::from_cents(305), "Candy").unwrap();
    /// assert_eq!(slot.remaining(), 5);
    /// assert_eq!(slot.quantity_sold(), 0);
    ///
    /// assert!(Slot::new("Snuuckers", Money::from_cents(420), "Khandie").is_err());
    /// ```
    pub fn new(item_name: impl Into<String>, price: Money, category_name: &str) -> VendResult<Self> {
        Self::with_capacity(item_name, price, category_name, DEFAULT_CAPACITY)
    }

    /// Creates a slot with an explicit capacity.
    pub fn with_capacity(
        item_name: impl Into<String>,
        price: Money,
        category_name: &str,
        capacity: usize,
    ) -> VendResult<Self> {
        let category = ItemCategory::from_str(category_name)?;
        let item_name = item_name.into();

        let stack = (0..capacity)
            .map(|_| Item::new(item_name.clone(), category))
            .collect();

        Ok(Slot {
            capacity,
            price,
            item_name,
            category,
            stack,
        })
    }

    /// The maximum number of items this slot can hold.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The fixed price of every item in this slot.
    #[inline]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// The name of the item this slot was stocked with.
    #[inline]
    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// The category this slot was stocked with.
    #[inline]
    pub const fn category(&self) -> ItemCategory {
        self.category
    }

    /// How many items are left in the slot.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.stack.len()
    }

    /// How many items have been sold out of this slot.
    ///
    /// Always derived from the stack length, never tracked separately.
    #[inline]
    pub fn quantity_sold(&self) -> usize {
        self.capacity - self.stack.len()
    }

    /// Whether the slot has nothing left to sell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Returns the top item without removing it.
    ///
    /// Like [`Slot::pop`], an empty slot fails with [`VendError::SlotEmpty`];
    /// `label` is only borrowed for the error.
    pub fn peek(&self, label: &str) -> VendResult<&Item> {
        self.stack.last().ok_or_else(|| VendError::SlotEmpty {
            label: label.to_string(),
        })
    }

    /// Removes and returns the top item.
    ///
    /// `label` is only borrowed for the error; an empty slot fails with
    /// [`VendError::SlotEmpty`], which is the sold-out condition the machine
    /// surfaces to the customer.
    pub fn pop(&mut self, label: &str) -> VendResult<Item> {
        self.stack.pop().ok_or_else(|| VendError::SlotEmpty {
            label: label.to_string(),
        })
    }

    /// The remaining quantity as display text: a digit string, or
    /// `"SOLD OUT"` once the slot is empty.
    pub fn remaining_display(&self) -> String {
        if self.stack.is_empty() {
            DISPLAY_SOLD_OUT.to_string()
        } else {
            self.stack.len().to_string()
        }
    }
}

/// The slot's inventory-listing form: `{remaining}|{price}|{item name}`.
impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}",
            self.remaining_display(),
            self.price,
            self.item_name
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
