//! # Sales Reporting
//!
//! Read-only aggregate statistics derived from slot state.
//!
//! Quantity sold is never stored anywhere; it falls out of
//! `capacity - remaining` per slot, so a report is always consistent with
//! inventory no matter when it is taken.

use serde::{Deserialize, Serialize};

use crate::machine::VendingMachine;
use crate::money::Money;
use crate::slot::Slot;

// =============================================================================
// Sales Line
// =============================================================================

/// Sales statistics for one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesLine {
    /// The item stocked in the slot.
    pub item_name: String,
    /// Units sold out of the slot so far.
    pub quantity_sold: usize,
    /// `price × quantity_sold` for the slot.
    pub gross: Money,
}

// =============================================================================
// Sales Report
// =============================================================================

/// Aggregate sales derived from a machine's slots, in restock order.
///
/// ## Example
/// ```rust
/// use vendo_core::machine::VendingMachine;
/// use vendo_core::money::Money;
/// use vendo_core::report::SalesReport;
///
/// let mut machine = VendingMachine::new();
/// machine.restock(["A1|M&Ms|3.05|Candy"]);
/// machine.take_money(Money::from_cents(1000));
/// machine.dispense_item("A1").unwrap();
///
/// let report = SalesReport::from_machine(&machine);
/// assert_eq!(report.gross_sales(), Money::from_cents(305));
/// assert_eq!(report.render_lines(), vec!["M&Ms|1", "", "$3.05"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesReport {
    lines: Vec<SalesLine>,
}

impl SalesReport {
    /// Snapshots sales statistics from the machine's current slot state.
    pub fn from_machine(machine: &VendingMachine) -> Self {
        let lines = machine
            .slots()
            .iter()
            .map(|(_, slot)| Self::line_for(slot))
            .collect();
        SalesReport { lines }
    }

    fn line_for(slot: &Slot) -> SalesLine {
        let quantity_sold = slot.quantity_sold();
        SalesLine {
            item_name: slot.item_name().to_string(),
            quantity_sold,
            gross: slot.price().multiply_quantity(quantity_sold as i64),
        }
    }

    /// Per-slot sales lines, in restock order.
    pub fn lines(&self) -> &[SalesLine] {
        &self.lines
    }

    /// Gross sales across all slots.
    pub fn gross_sales(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.gross)
    }

    /// Renders the report in its file form: one `itemName|quantitySold` line
    /// per slot, a blank separator, then the currency-formatted gross total.
    pub fn render_lines(&self) -> Vec<String> {
        let mut rendered: Vec<String> = self
            .lines
            .iter()
            .map(|line| format!("{}|{}", line.item_name, line.quantity_sold))
            .collect();

        rendered.push(String::new());
        rendered.push(self.gross_sales().to_string());
        rendered
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
