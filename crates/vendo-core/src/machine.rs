//! # Vending Machine
//!
//! The transaction core: slot inventory keyed by label, the credit ledger,
//! restock parsing, item dispensing, and exact-change disbursement.
//!
//! ## Credit Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Machine Credit State                               │
//! │                                                                         │
//! │   Idle (credit = $0.00)                                                 │
//! │        │                                                                │
//! │        │ take_money(+)                                                  │
//! │        ▼                                                                │
//! │   Funded (credit > $0.00) ◄──┐                                          │
//! │        │                     │                                          │
//! │        │ dispense_item ──────┘  (credit -= price, may stay funded)      │
//! │        │                                                                │
//! │        │ give_change                                                    │
//! │        ▼                                                                │
//! │   Idle (credit = $0.00, coins returned)                                 │
//! │                                                                         │
//! │   reports_unlocked is an orthogonal one-way latch, flipped by the      │
//! │   reserved passcode and never cleared.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Auditability
//! The machine performs no I/O itself. Every state transition (and every
//! rejected attempt) is reported to an optional [`AuditSink`] as
//! `(description, credit_before, credit_after)`; the sink owns timestamps
//! and persistence, and its failures must never reach back into the core.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coin::{Coin, Denomination};
use crate::error::{VendError, VendResult};
use crate::item::Item;
use crate::money::Money;
use crate::slot::Slot;

/// The reserved slot label that unlocks the hidden sales-report menu.
/// Not a real slot; dispensing it never touches inventory.
pub const SALES_REPORTS_PASSCODE: &str = "%%";

// =============================================================================
// Audit Sink
// =============================================================================

/// Receiver for the machine's audit trail.
///
/// Implementations live outside the core (file log, test buffer). They are
/// deliberately infallible from the machine's point of view: a sink that
/// cannot persist an entry must handle that itself rather than disturb the
/// transaction that produced it.
pub trait AuditSink {
    /// Records one audited event with the credit balance around it.
    fn record(&mut self, description: &str, credit_before: Money, credit_after: Money);
}

// =============================================================================
// Restock Summary
// =============================================================================

/// What a restock batch accomplished.
///
/// A batch never aborts: malformed lines are counted here and skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestockSummary {
    /// Slots successfully parsed and inserted.
    pub slots_added: usize,
    /// Lines rejected (bad field count, bad price, unknown category,
    /// duplicate label).
    pub lines_skipped: usize,
}

// =============================================================================
// Change
// =============================================================================

/// The coin breakdown handed back by [`VendingMachine::give_change`].
///
/// Counts are held per denomination, largest first; [`Change::coins`]
/// expands them into individual [`Coin`] values for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// `(denomination, coin count)` pairs in largest-to-smallest order.
    counts: Vec<(Denomination, u32)>,
}

impl Change {
    /// The number of coins of one denomination in this change.
    pub fn count(&self, denomination: Denomination) -> u32 {
        self.counts
            .iter()
            .find(|(d, _)| *d == denomination)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// All `(denomination, count)` pairs, largest denomination first.
    pub fn counts(&self) -> &[(Denomination, u32)] {
        &self.counts
    }

    /// Expands the counts into individual coins, largest first.
    pub fn coins(&self) -> Vec<Coin> {
        self.counts
            .iter()
            .flat_map(|&(denomination, n)| (0..n).map(move |_| Coin::new(denomination)))
            .collect()
    }

    /// The total value of the change.
    pub fn total(&self) -> Money {
        self.counts
            .iter()
            .map(|&(denomination, n)| denomination.value() * n as i64)
            .fold(Money::zero(), |acc, value| acc + value)
    }

    /// Whether no coins were disbursed.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|(_, n)| *n == 0)
    }
}

// =============================================================================
// Vending Machine
// =============================================================================

/// A virtual vending machine: slots keyed by label plus the credit ledger.
///
/// Slot iteration order is restock order, which the inventory listing and
/// the sales report both rely on.
pub struct VendingMachine {
    /// Live slot state. Never handed out by reference; see
    /// [`VendingMachine::slots`] for the defensive snapshot.
    slots: HashMap<String, Slot>,
    /// Labels in the order they were restocked.
    slot_order: Vec<String>,
    credit: Money,
    reports_unlocked: bool,
    audit: Option<Box<dyn AuditSink>>,
}

impl VendingMachine {
    /// Creates an empty machine with no audit sink.
    pub fn new() -> Self {
        VendingMachine {
            slots: HashMap::new(),
            slot_order: Vec::new(),
            credit: Money::zero(),
            reports_unlocked: false,
            audit: None,
        }
    }

    /// Creates an empty machine that reports every transition to `sink`.
    pub fn with_audit(sink: Box<dyn AuditSink>) -> Self {
        VendingMachine {
            audit: Some(sink),
            ..VendingMachine::new()
        }
    }

    /// The customer's current prepaid balance. Never negative.
    #[inline]
    pub const fn credit(&self) -> Money {
        self.credit
    }

    /// Whether the hidden sales-report menu has been unlocked.
    #[inline]
    pub const fn reports_unlocked(&self) -> bool {
        self.reports_unlocked
    }

    /// The number of stocked slots.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slot_order.len()
    }

    /// A read-only view of one slot.
    pub fn slot(&self, label: &str) -> Option<&Slot> {
        self.slots.get(label)
    }

    /// A defensive snapshot of all slots in restock order.
    ///
    /// Callers get clones; mutating the snapshot cannot corrupt the machine.
    pub fn slots(&self) -> Vec<(String, Slot)> {
        self.slot_order
            .iter()
            .filter_map(|label| {
                self.slots
                    .get(label)
                    .map(|slot| (label.clone(), slot.clone()))
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Restock
    // -------------------------------------------------------------------------

    /// Builds and inserts slots from `label|itemName|price|category` lines.
    ///
    /// Resilience contract: one bad line never aborts the batch. Every
    /// failure (wrong field count, non-numeric price, unknown category,
    /// duplicate label) is reported to the audit sink and counted in the
    /// returned summary, then parsing continues with the next line.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::machine::VendingMachine;
    ///
    /// let mut machine = VendingMachine::new();
    /// let summary = machine.restock([
    ///     "A1|M&Ms|3.05|Candy",
    ///     "B3|Big Chew|3.65q|Gum", // bad price, skipped
    /// ]);
    /// assert_eq!(summary.slots_added, 1);
    /// assert_eq!(summary.lines_skipped, 1);
    /// ```
    pub fn restock<I, S>(&mut self, lines: I) -> RestockSummary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = RestockSummary::default();

        for line in lines {
            match self.restock_line(line.as_ref()) {
                Ok(()) => summary.slots_added += 1,
                Err(err) => {
                    let before = self.credit;
                    self.record(&format!("BAD STOCK LINE: {err}"), before);
                    summary.lines_skipped += 1;
                }
            }
        }

        summary
    }

    /// Parses one stock line and inserts the resulting slot.
    fn restock_line(&mut self, line: &str) -> VendResult<()> {
        let (label, slot) = Self::parse_stock_line(line)?;

        if self.slots.contains_key(&label) {
            return Err(VendError::DuplicateSlotLabel { label });
        }

        self.slot_order.push(label.clone());
        self.slots.insert(label, slot);
        Ok(())
    }

    /// Parses `label|itemName|price|category` into a labeled slot.
    fn parse_stock_line(line: &str) -> VendResult<(String, Slot)> {
        let line = line.trim();
        if line.is_empty() {
            return Err(VendError::MalformedLine {
                reason: "empty line".to_string(),
            });
        }

        let fields: Vec<&str> = line.split('|').collect();
        let &[label, item_name, price, category] = fields.as_slice() else {
            return Err(VendError::MalformedLine {
                reason: format!("expected 4 '|'-separated fields, found {}", fields.len()),
            });
        };

        let label = label.trim();
        if label.is_empty() {
            return Err(VendError::MalformedLine {
                reason: "empty slot label".to_string(),
            });
        }

        let price = Money::parse_decimal(price)?;
        let slot = Slot::new(item_name, price, category)?;

        Ok((label.to_string(), slot))
    }

    // -------------------------------------------------------------------------
    // Money In
    // -------------------------------------------------------------------------

    /// Feeds money into the machine.
    ///
    /// Only positive amounts change the ledger; zero and negative amounts
    /// are rejected, leave state untouched, and show up in the audit trail
    /// rather than being silently ignored.
    pub fn take_money(&mut self, amount: Money) {
        let before = self.credit;
        if amount.is_positive() {
            self.credit += amount;
            self.record("FEED MONEY:", before);
        } else {
            self.record("REJECTED MONEY FEED:", before);
        }
    }

    // -------------------------------------------------------------------------
    // Dispense
    // -------------------------------------------------------------------------

    /// Tries to dispense one item from the labeled slot.
    ///
    /// The label is upper-cased before lookup. Check order matters and is
    /// part of the contract:
    ///
    /// 1. Passcode? latch `reports_unlocked`, fail [`VendError::ReportsUnlocked`]
    ///    before any slot lookup.
    /// 2. Unknown label → [`VendError::SlotNotFound`].
    /// 3. Credit below price → [`VendError::InsufficientFunds`]. Checked
    ///    *before* the empty check, so an empty slot the customer cannot
    ///    afford still reads as underfunded.
    /// 4. Slot empty → [`VendError::SlotEmpty`].
    /// 5. Otherwise pop the item and deduct the price.
    ///
    /// Every failure path leaves credit and inventory exactly as they were.
    pub fn dispense_item(&mut self, label: &str) -> VendResult<Item> {
        let before = self.credit;
        let label = label.trim().to_uppercase();

        if label == SALES_REPORTS_PASSCODE {
            self.reports_unlocked = true;
            self.record("SALES REPORTS UNLOCKED:", before);
            return Err(VendError::ReportsUnlocked);
        }

        let price = match self.slots.get(&label) {
            Some(slot) => slot.price(),
            None => {
                self.record(&format!("SLOT NOT FOUND: {label}"), before);
                return Err(VendError::SlotNotFound { label });
            }
        };

        if self.credit < price {
            self.record(&format!("INSUFFICIENT FUNDS: {label}"), before);
            return Err(VendError::InsufficientFunds {
                required: price,
                available: self.credit,
            });
        }

        let popped = match self.slots.get_mut(&label) {
            Some(slot) => slot.pop(&label),
            None => Err(VendError::SlotNotFound {
                label: label.clone(),
            }),
        };

        match popped {
            Ok(item) => {
                self.credit -= price;
                self.record(&format!("{} {}", item.name(), label), before);
                Ok(item)
            }
            Err(err) => {
                self.record(&format!("ITEM SOLD OUT: {label}"), before);
                Err(err)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Change
    // -------------------------------------------------------------------------

    /// Disburses the entire credit balance as the fewest coins possible and
    /// zeroes the ledger.
    ///
    /// Greedy largest-first walk over Quarter, Dime, Nickel, Penny. Correct
    /// because `{25, 10, 5, 1}` is a canonical coin system. Credit is a whole
    /// number of cents (enforced at every entry point), so after the penny
    /// pass the balance is exactly `$0.00`.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::coin::Denomination;
    /// use vendo_core::machine::VendingMachine;
    /// use vendo_core::money::Money;
    ///
    /// let mut machine = VendingMachine::new();
    /// machine.take_money(Money::from_cents(69));
    ///
    /// let change = machine.give_change();
    /// assert_eq!(change.count(Denomination::Quarter), 2);
    /// assert_eq!(change.count(Denomination::Dime), 1);
    /// assert_eq!(change.count(Denomination::Nickel), 1);
    /// assert_eq!(change.count(Denomination::Penny), 4);
    /// assert!(machine.credit().is_zero());
    /// ```
    pub fn give_change(&mut self) -> Change {
        let before = self.credit;
        let mut counts = Vec::with_capacity(Denomination::DESCENDING.len());

        for denomination in Denomination::DESCENDING {
            // integer division against the *updated* balance each pass
            let count = self.credit.cents() / denomination.cents();
            self.credit -= denomination.value() * count;
            counts.push((denomination, count as u32));
        }

        self.record("GIVE CHANGE:", before);
        Change { counts }
    }

    // -------------------------------------------------------------------------
    // Read-only views
    // -------------------------------------------------------------------------

    /// The inventory listing: one `label|remaining|price|itemName` line per
    /// slot, in restock order.
    pub fn inventory(&self) -> Vec<String> {
        self.slot_order
            .iter()
            .filter_map(|label| {
                self.slots
                    .get(label)
                    .map(|slot| format!("{label}|{slot}"))
            })
            .collect()
    }

    /// The sales report in its file form: `itemName|quantitySold` per slot,
    /// a blank separator, then the gross total. Pure read of current state.
    pub fn generate_sales_report(&self) -> Vec<String> {
        crate::report::SalesReport::from_machine(self).render_lines()
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn record(&mut self, description: &str, credit_before: Money) {
        let credit_after = self.credit;
        if let Some(sink) = self.audit.as_mut() {
            sink.record(description, credit_before, credit_after);
        }
    }
}

impl Default for VendingMachine {
    fn default() -> Self {
        VendingMachine::new()
    }
}

impl fmt::Debug for VendingMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VendingMachine")
            .field("slots", &self.slot_order)
            .field("credit", &self.credit)
            .field("reports_unlocked", &self.reports_unlocked)
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemCategory;
    use crate::slot::DEFAULT_CAPACITY;
    use std::cell::RefCell;
    use std::rc::Rc;

    const SAMPLE_STOCK: [&str; 4] = [
        "A1|M&Ms|3.05|Candy",
        "A2|Doritos|4.20|Chip",
        "B1|Sprite|2.75|Drink",
        "B2|Big Chew|3.65|Gum",
    ];

    /// Audit sink backed by a shared Vec, for asserting on the trail.
    #[derive(Clone, Default)]
    struct MemoryAudit {
        entries: Rc<RefCell<Vec<(String, Money, Money)>>>,
    }

    impl AuditSink for MemoryAudit {
        fn record(&mut self, description: &str, before: Money, after: Money) {
            self.entries
                .borrow_mut()
                .push((description.to_string(), before, after));
        }
    }

    fn stocked_machine() -> VendingMachine {
        let mut machine = VendingMachine::new();
        let summary = machine.restock(SAMPLE_STOCK);
        assert_eq!(summary.slots_added, 4);
        machine
    }

    #[test]
    fn test_restock_good_data() {
        let machine = stocked_machine();

        assert_eq!(machine.slot_count(), 4);

        let a1 = machine.slot("A1").unwrap();
        assert_eq!(a1.item_name(), "M&Ms");
        assert_eq!(a1.price(), Money::from_cents(305));
        assert_eq!(a1.category(), ItemCategory::Candy);
        assert_eq!(a1.peek("A1").unwrap().name(), "M&Ms");

        let b1 = machine.slot("B1").unwrap();
        assert_eq!(b1.category(), ItemCategory::Drink);
        assert_eq!(b1.price(), Money::from_cents(275));
    }

    #[test]
    fn test_restock_malformed_lines_are_skipped_not_fatal() {
        let stock_lines = [
            "A1|M&Ms|3.05|Candy",       // good
            "A2|Doritos|4.20|Chip",     // good
            "B1|Sprite|2.75|Drink",     // good
            "B2|Spearmint|0.95|gum",    // good: category match is case-insensitive
            "B3|Big Chew|3.65q|Gum",    // bad price
            "C1|Snickers||1.69|Candy",  // five fields
            "D1Pepsi|3.00|Drink",       // three fields
            "D2|Lays|2.50|CChip",       // unknown category
            "break damnit!",            // one field
            "",                         // empty
            "||||||||||",               // eleven fields
        ];

        let mut machine = VendingMachine::new();
        let summary = machine.restock(stock_lines);

        assert_eq!(summary.slots_added, 4);
        assert_eq!(summary.lines_skipped, 7);
        assert_eq!(machine.slot_count(), 4);
        assert_eq!(
            machine.slot("B2").unwrap().category(),
            ItemCategory::Gum
        );
    }

    #[test]
    fn test_restock_rejects_signed_prices() {
        let mut machine = VendingMachine::new();
        let summary = machine.restock([
            "A1|Mystery|-0.50|Candy", // "-0" dollars must not stock a 50-cent slot
            "A2|Freebie|-1.00|Candy",
            "B1|M&Ms|3.05|Candy",
        ]);

        assert_eq!(summary.slots_added, 1);
        assert_eq!(summary.lines_skipped, 2);
        assert!(machine.slot("A1").is_none());
        assert!(machine.slot("A2").is_none());
        assert_eq!(machine.slot("B1").unwrap().price(), Money::from_cents(305));
    }

    #[test]
    fn test_restock_rejects_duplicate_label_keeps_first() {
        let mut machine = VendingMachine::new();
        let summary = machine.restock(["A1|M&Ms|3.05|Candy", "A1|Skittles|2.00|Candy"]);

        assert_eq!(summary.slots_added, 1);
        assert_eq!(summary.lines_skipped, 1);
        assert_eq!(machine.slot("A1").unwrap().item_name(), "M&Ms");
    }

    #[test]
    fn test_restock_order_is_preserved() {
        let machine = stocked_machine();
        let labels: Vec<String> = machine.slots().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["A1", "A2", "B1", "B2"]);
    }

    #[test]
    fn test_take_money_accumulates() {
        let mut machine = VendingMachine::new();
        machine.take_money(Money::from_cents(100));
        machine.take_money(Money::from_cents(250));
        assert_eq!(machine.credit(), Money::from_cents(350));
    }

    #[test]
    fn test_take_money_rejects_zero_and_negative() {
        let mut machine = VendingMachine::new();
        machine.take_money(Money::from_cents(500));

        machine.take_money(Money::zero());
        machine.take_money(Money::from_cents(-100));

        assert_eq!(machine.credit(), Money::from_cents(500));
    }

    #[test]
    fn test_dispense_success() {
        let mut machine = VendingMachine::new();
        machine.restock([
            "A1|M&Ms|3.05|Candy",
            "A2|Doritos|4.20|Chip",
            "B1|Coke|5.00|Drink",
            "B2|Big Chew|3.65|Gum",
        ]);
        machine.take_money(Money::from_cents(10000));

        let soda = machine.dispense_item("B1").unwrap();

        assert_eq!(soda.name(), "Coke");
        assert_eq!(soda.category(), ItemCategory::Drink);
        assert_eq!(soda.eat_message(), "Glug Glug, Yum!");
        assert_eq!(machine.credit(), Money::from_cents(9500));
        assert_eq!(machine.slot("B1").unwrap().remaining(), DEFAULT_CAPACITY - 1);
    }

    #[test]
    fn test_dispense_label_is_case_normalized() {
        let mut machine = stocked_machine();
        machine.take_money(Money::from_cents(1000));

        let item = machine.dispense_item("a1").unwrap();
        assert_eq!(item.name(), "M&Ms");
    }

    #[test]
    fn test_dispense_unknown_slot() {
        let mut machine = stocked_machine();
        machine.take_money(Money::from_cents(1000));

        let err = machine.dispense_item("Z9").unwrap_err();
        assert!(matches!(err, VendError::SlotNotFound { ref label } if label == "Z9"));
        assert_eq!(machine.credit(), Money::from_cents(1000));
    }

    #[test]
    fn test_dispense_insufficient_funds_leaves_state_unchanged() {
        let mut machine = stocked_machine();
        machine.take_money(Money::from_cents(200));

        let err = machine.dispense_item("A1").unwrap_err();
        assert!(matches!(
            err,
            VendError::InsufficientFunds { required, available }
                if required == Money::from_cents(305) && available == Money::from_cents(200)
        ));
        assert_eq!(machine.credit(), Money::from_cents(200));
        assert_eq!(machine.slot("A1").unwrap().remaining(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_funds_checked_before_empty() {
        // An empty slot the customer cannot afford reads as underfunded.
        let mut machine = stocked_machine();
        machine.take_money(Money::from_cents(2000));
        for _ in 0..DEFAULT_CAPACITY {
            machine.dispense_item("B1").unwrap(); // $2.75 each
        }
        // slot empty, credit now $6.25, price $2.75 -> SlotEmpty
        assert!(matches!(
            machine.dispense_item("B1").unwrap_err(),
            VendError::SlotEmpty { .. }
        ));

        // drain credit below the price: InsufficientFunds wins over SlotEmpty
        machine.give_change();
        machine.take_money(Money::from_cents(100));
        assert!(matches!(
            machine.dispense_item("B1").unwrap_err(),
            VendError::InsufficientFunds { .. }
        ));
    }

    #[test]
    fn test_empty_slot_dispense_is_idempotent() {
        let mut machine = stocked_machine();
        machine.take_money(Money::from_cents(5000));
        for _ in 0..DEFAULT_CAPACITY {
            machine.dispense_item("A1").unwrap();
        }
        let credit_after_selling_out = machine.credit();

        for _ in 0..3 {
            assert!(matches!(
                machine.dispense_item("A1").unwrap_err(),
                VendError::SlotEmpty { .. }
            ));
            assert_eq!(machine.credit(), credit_after_selling_out);
        }
    }

    #[test]
    fn test_credit_never_negative() {
        let mut machine = stocked_machine();

        machine.take_money(Money::from_cents(-500));
        assert!(!machine.credit().is_negative());

        machine.take_money(Money::from_cents(305));
        machine.dispense_item("A1").unwrap();
        assert!(!machine.credit().is_negative());
        assert!(machine.credit().is_zero());

        // underfunded dispense cannot push below zero
        assert!(machine.dispense_item("A1").is_err());
        assert!(machine.credit().is_zero());
    }

    #[test]
    fn test_give_change_4_20() {
        let mut machine = VendingMachine::new();
        machine.take_money(Money::from_cents(420));

        let change = machine.give_change();

        assert_eq!(change.count(Denomination::Quarter), 16);
        assert_eq!(change.count(Denomination::Dime), 2);
        assert_eq!(change.count(Denomination::Nickel), 0);
        assert_eq!(change.count(Denomination::Penny), 0);
        assert_eq!(change.total(), Money::from_cents(420));
        assert!(machine.credit().is_zero());
    }

    #[test]
    fn test_give_change_0_69() {
        let mut machine = VendingMachine::new();
        machine.take_money(Money::from_cents(69));

        let change = machine.give_change();

        assert_eq!(change.count(Denomination::Quarter), 2);
        assert_eq!(change.count(Denomination::Dime), 1);
        assert_eq!(change.count(Denomination::Nickel), 1);
        assert_eq!(change.count(Denomination::Penny), 4);
        assert!(machine.credit().is_zero());
    }

    #[test]
    fn test_give_change_on_empty_credit() {
        let mut machine = VendingMachine::new();
        let change = machine.give_change();
        assert!(change.is_empty());
        assert!(change.coins().is_empty());
        assert!(machine.credit().is_zero());
    }

    #[test]
    fn test_change_coins_expansion() {
        let mut machine = VendingMachine::new();
        machine.take_money(Money::from_cents(36)); // 1 quarter, 1 dime, 1 penny

        let change = machine.give_change();
        let coins = change.coins();

        assert_eq!(coins.len(), 3);
        assert_eq!(coins[0].denomination(), Denomination::Quarter);
        assert_eq!(coins[1].denomination(), Denomination::Dime);
        assert_eq!(coins[2].denomination(), Denomination::Penny);
        let total = coins
            .iter()
            .fold(Money::zero(), |acc, coin| acc + coin.value());
        assert_eq!(total, Money::from_cents(36));
    }

    #[test]
    fn test_passcode_latches_reports_and_touches_nothing() {
        let mut machine = stocked_machine();
        machine.take_money(Money::from_cents(10000));
        assert!(!machine.reports_unlocked());

        // fails the same way regardless of funds, and no slot changes
        let err = machine.dispense_item(SALES_REPORTS_PASSCODE).unwrap_err();
        assert!(matches!(err, VendError::ReportsUnlocked));
        assert!(machine.reports_unlocked());
        assert_eq!(machine.credit(), Money::from_cents(10000));
        for (_, slot) in machine.slots() {
            assert_eq!(slot.remaining(), DEFAULT_CAPACITY);
        }

        // one-way latch: a second hit re-signals but never clears
        assert!(matches!(
            machine.dispense_item("%%").unwrap_err(),
            VendError::ReportsUnlocked
        ));
        assert!(machine.reports_unlocked());
    }

    #[test]
    fn test_inventory_listing() {
        let mut machine = stocked_machine();
        machine.take_money(Money::from_cents(305));
        machine.dispense_item("A1").unwrap();

        let inventory = machine.inventory();
        assert_eq!(
            inventory,
            vec![
                "A1|4|$3.05|M&Ms",
                "A2|5|$4.20|Doritos",
                "B1|5|$2.75|Sprite",
                "B2|5|$3.65|Big Chew",
            ]
        );
    }

    #[test]
    fn test_inventory_shows_sold_out() {
        let mut machine = VendingMachine::new();
        machine.restock(["A1|M&Ms|3.05|Candy"]);
        machine.take_money(Money::from_cents(2000));
        for _ in 0..DEFAULT_CAPACITY {
            machine.dispense_item("A1").unwrap();
        }

        assert_eq!(machine.inventory(), vec!["A1|SOLD OUT|$3.05|M&Ms"]);
    }

    #[test]
    fn test_slots_snapshot_is_defensive() {
        let mut machine = stocked_machine();

        let mut snapshot = machine.slots();
        snapshot.clear();
        let mut snapshot = machine.slots();
        snapshot[0].1.pop("A1").unwrap();

        // the machine never noticed
        assert_eq!(machine.slot_count(), 4);
        assert_eq!(machine.slot("A1").unwrap().remaining(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_end_to_end_purchase_session() {
        let mut machine = VendingMachine::new();
        machine.restock(["A1|M&Ms|3.05|Candy"]);
        machine.take_money(Money::from_cents(5000));

        machine.dispense_item("A1").unwrap();
        machine.dispense_item("A1").unwrap();

        assert_eq!(machine.credit(), Money::from_cents(4390));
        assert_eq!(machine.slot("A1").unwrap().remaining(), 3);

        let report = machine.generate_sales_report();
        assert_eq!(report[0], "M&Ms|2");
    }

    #[test]
    fn test_audit_trail_captures_every_branch() {
        let audit = MemoryAudit::default();
        let mut machine = VendingMachine::with_audit(Box::new(audit.clone()));
        machine.restock(["A1|M&Ms|3.05|Candy", "garbage line"]);

        machine.take_money(Money::from_cents(400));
        machine.take_money(Money::from_cents(-5));
        machine.dispense_item("A1").unwrap();
        machine.dispense_item("Z9").unwrap_err();
        machine.give_change();

        let entries = audit.entries.borrow();
        let descriptions: Vec<&str> = entries.iter().map(|(d, _, _)| d.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                "BAD STOCK LINE: Malformed stock line: expected 4 '|'-separated fields, found 1",
                "FEED MONEY:",
                "REJECTED MONEY FEED:",
                "M&Ms A1",
                "SLOT NOT FOUND: Z9",
                "GIVE CHANGE:",
            ]
        );

        // credit-before/after pairs line up with the ledger
        let (_, before, after) = &entries[1];
        assert_eq!(*before, Money::zero());
        assert_eq!(*after, Money::from_cents(400));
        let (_, before, after) = &entries[3];
        assert_eq!(*before, Money::from_cents(400));
        assert_eq!(*after, Money::from_cents(95));
        let (_, before, after) = &entries[5];
        assert_eq!(*before, Money::from_cents(95));
        assert_eq!(*after, Money::zero());
    }
}
