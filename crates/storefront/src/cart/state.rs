//! Aggregate cart state and derived totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line::{CartLine, LineId};

/// Derive `(total item count, total amount)` from a line list.
///
/// Totals are always computed freshly from the authoritative line list -
/// never cached, never incrementally maintained - so the aggregates cannot
/// drift from the source data. An empty list yields `(0, 0)`.
#[must_use]
pub fn totals(lines: &[CartLine]) -> (u32, Decimal) {
    let count = lines.iter().map(|line| line.quantity).sum();
    let amount = lines.iter().map(CartLine::subtotal).sum();
    (count, amount)
}

/// The aggregate cart: ordered line list plus derived totals.
///
/// `total_items` and `total_amount` are maintained exclusively through
/// [`totals`] after every line change; they are serialized for the persisted
/// record but rederived on load and never trusted from storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    /// Line items in insertion order; updates never reorder.
    #[serde(default)]
    pub lines: Vec<CartLine>,
    /// Invariant: equals the sum of `quantity` across `lines`.
    #[serde(default)]
    pub total_items: u32,
    /// Invariant: equals the sum of `unit_price * quantity` across `lines`.
    #[serde(default)]
    pub total_amount: Decimal,
}

impl CartState {
    /// The empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Find a line by identity.
    #[must_use]
    pub fn line(&self, line_id: &LineId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.line_id == *line_id)
    }

    /// Recompute both derived totals from the line list.
    pub fn recompute_totals(&mut self) {
        let (count, amount) = totals(&self.lines);
        self.total_items = count;
        self.total_amount = amount;
    }
}
