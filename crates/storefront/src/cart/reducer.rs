//! The cart state machine: a closed action type and a pure reducer.

use super::line::{CartLine, LineId};
use super::state::CartState;

/// Every mutation the cart supports.
///
/// The set is closed and [`reduce`] matches it exhaustively, so adding a
/// verb is a compile-time-checked change.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Merge a snapshot line into the cart: if a line with the same identity
    /// exists its quantity grows by `line.quantity`, otherwise the line is
    /// appended. No quantity clamping happens here; ceilings are the
    /// validation layer's job.
    Add {
        /// The prepared snapshot line, identity already resolved.
        line: CartLine,
    },
    /// Delete a line. Unknown ids are a silent no-op.
    Remove {
        /// Identity of the line to delete.
        line_id: LineId,
    },
    /// Replace a line's quantity. Zero behaves exactly as [`CartAction::Remove`];
    /// unknown ids are a silent no-op.
    SetQuantity {
        /// Identity of the line to update.
        line_id: LineId,
        /// The replacement quantity.
        quantity: u32,
    },
    /// Reset to the empty cart.
    Clear,
    /// Replace the whole state with a previously persisted one. Totals are
    /// rederived from the line list; persisted aggregates are never trusted.
    Load {
        /// The externally sourced state.
        state: CartState,
    },
}

/// Apply an action to a state, producing the next state.
///
/// This is a total function: it never fails and performs no I/O. Malformed
/// actions (unknown line ids) reduce to the unchanged state.
#[must_use]
pub fn reduce(state: CartState, action: CartAction) -> CartState {
    let mut next = match action {
        CartAction::Add { line } => {
            let mut next = state;
            match next
                .lines
                .iter_mut()
                .find(|existing| existing.line_id == line.line_id)
            {
                Some(existing) => existing.quantity += line.quantity,
                None => next.lines.push(line),
            }
            next
        }
        CartAction::Remove { line_id } => {
            let mut next = state;
            next.lines.retain(|line| line.line_id != line_id);
            next
        }
        CartAction::SetQuantity { line_id, quantity } => {
            let mut next = state;
            if quantity == 0 {
                next.lines.retain(|line| line.line_id != line_id);
            } else if let Some(line) = next
                .lines
                .iter_mut()
                .find(|line| line.line_id == line_id)
            {
                line.quantity = quantity;
            }
            next
        }
        CartAction::Clear => CartState::empty(),
        CartAction::Load { state } => state,
    };
    next.recompute_totals();
    next
}
