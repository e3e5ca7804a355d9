//! The consumer-facing cart facade.
//!
//! `CartService` wires the pieces together: every entry point runs the
//! validation layer, dispatches an approved action to the pure reducer, and
//! lets the persistence bridge sync storage with the new state. Entry points
//! are confirmation-agnostic; whether to ask the user first is the caller's
//! policy.

use rust_decimal::Decimal;
use tracing::debug;

use crate::catalog::Product;
use crate::config::CartLimits;
use crate::storage::Storage;

use super::error::CartError;
use super::line::{CartLine, LineId};
use super::persist;
use super::reducer::{CartAction, reduce};
use super::state::CartState;
use super::validate;

/// An explicitly owned cart: state, storage handle, and configured limits.
///
/// Each instance is independent; tests construct isolated carts over
/// [`crate::storage::MemoryStorage`]. Exactly one cart exists per storage
/// scope, for the lifetime of that storage.
#[derive(Debug)]
pub struct CartService<S: Storage> {
    state: CartState,
    storage: S,
    limits: CartLimits,
}

impl<S: Storage> CartService<S> {
    /// Open the cart, hydrating from storage if a prior record exists.
    ///
    /// Hydration replaces the empty state wholesale and rederives totals
    /// through the reducer's `Load` transition; an absent or malformed
    /// record starts an empty cart without raising.
    pub fn open(storage: S, limits: CartLimits) -> Self {
        let state = match persist::read_state(&storage) {
            Some(raw) => reduce(CartState::empty(), CartAction::Load { state: raw }),
            None => CartState::empty(),
        };
        debug!(items = state.total_items, "Opened cart");
        Self {
            state,
            storage,
            limits,
        }
    }

    /// Add a product to the cart.
    ///
    /// The product's attributes are captured as a point-in-time snapshot; an
    /// existing line with the same `(product, size, color)` identity absorbs
    /// the quantity instead of creating a duplicate.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Rejected`] when validation refuses the request
    /// (availability, stock, quantity or cart ceilings, missing variant
    /// selection).
    pub fn add_to_cart(
        &mut self,
        product: &Product,
        quantity: u32,
        size: &str,
        color: &str,
    ) -> Result<(), CartError> {
        validate::check_add(&self.state, product, quantity, size, color, &self.limits)?;
        let line = CartLine::from_product(product, quantity, size, color);
        debug!(line_id = %line.line_id, quantity, "Adding to cart");
        self.dispatch(CartAction::Add { line });
        Ok(())
    }

    /// Remove a line from the cart.
    ///
    /// Removal is idempotent: an absent line is a successful no-op, matching
    /// the reducer's semantics.
    ///
    /// # Errors
    ///
    /// Currently infallible; the `Result` keeps the entry points uniform for
    /// consumers that surface outcomes.
    pub fn remove_from_cart(&mut self, line_id: &LineId) -> Result<(), CartError> {
        debug!(line_id = %line_id, "Removing from cart");
        self.dispatch(CartAction::Remove {
            line_id: line_id.clone(),
        });
        Ok(())
    }

    /// Replace a line's quantity. Zero removes the line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] for an unknown line (stale caller
    /// view) or [`CartError::Rejected`] when a ceiling would be exceeded.
    pub fn update_quantity(&mut self, line_id: &LineId, quantity: u32) -> Result<(), CartError> {
        validate::check_set_quantity(&self.state, line_id, quantity, &self.limits)?;
        debug!(line_id = %line_id, quantity, "Updating cart quantity");
        self.dispatch(CartAction::SetQuantity {
            line_id: line_id.clone(),
            quantity,
        });
        Ok(())
    }

    /// Empty the cart and erase the persisted record.
    ///
    /// # Errors
    ///
    /// Returns a rejection with the empty category when the cart holds
    /// nothing; callers use this to suppress confirmation prompts.
    pub fn clear_cart(&mut self) -> Result<(), CartError> {
        validate::check_clear(&self.state)?;
        debug!("Clearing cart");
        self.dispatch(CartAction::Clear);
        Ok(())
    }

    // =========================================================================
    // Query accessors
    // =========================================================================

    /// The current line list, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.state.lines
    }

    /// Find a line by identity.
    #[must_use]
    pub fn line(&self, line_id: &LineId) -> Option<&CartLine> {
        self.state.line(line_id)
    }

    /// Total units across all lines.
    #[must_use]
    pub const fn total_items(&self) -> u32 {
        self.state.total_items
    }

    /// Total monetary amount across all lines.
    #[must_use]
    pub const fn total_amount(&self) -> Decimal {
        self.state.total_amount
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// The configured ceilings.
    #[must_use]
    pub const fn limits(&self) -> &CartLimits {
        &self.limits
    }

    /// Apply an approved action and sync storage with the result.
    ///
    /// Persistence is best-effort: a storage failure is logged inside the
    /// bridge and never rolls back the in-memory transition.
    fn dispatch(&mut self, action: CartAction) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
        persist::sync(&self.storage, &self.state);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::validate::{RejectCategory, RejectReason};
    use crate::storage::MemoryStorage;
    use asili_core::{CategoryId, CurrencyCode, Price, ProductId};
    use chrono::NaiveDate;

    fn product(id: &str, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_owned(),
            description: String::new(),
            price: Price::from_cents(cents, CurrencyCode::USD),
            image: String::new(),
            category: CategoryId::new("fabrics"),
            sizes: Vec::new(),
            colors: Vec::new(),
            stock: None,
            available: true,
            added_on: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            featured: false,
        }
    }

    fn service() -> CartService<MemoryStorage> {
        CartService::open(MemoryStorage::new(), CartLimits::default())
    }

    #[test]
    fn test_add_single_item() {
        // Empty cart, add one unit of a $10 product with no variants.
        let mut cart = service();
        cart.add_to_cart(&product("p1", 1000), 1, "", "").unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_amount(), Decimal::new(1000, 2));
    }

    #[test]
    fn test_update_to_zero_empties_the_cart() {
        let mut cart = service();
        cart.add_to_cart(&product("p1", 1000), 1, "", "").unwrap();
        let line_id = cart.lines()[0].line_id.clone();

        cart.update_quantity(&line_id, 0).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_amount(), Decimal::ZERO);
    }

    #[test]
    fn test_stock_rejection_leaves_state_unchanged() {
        let mut cart = service();
        let mut p = product("p1", 1000);
        p.stock = Some(3);

        let err = cart.add_to_cart(&p, 5, "", "").unwrap_err();
        let CartError::Rejected(reason) = err else {
            panic!("expected a rejection");
        };
        assert_eq!(reason.category(), RejectCategory::Stock);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_two_products_sum_their_totals() {
        let mut cart = service();
        cart.add_to_cart(&product("p1", 1000), 2, "", "").unwrap();
        cart.add_to_cart(&product("p2", 2000), 1, "", "").unwrap();

        assert_eq!(cart.total_amount(), Decimal::new(4000, 2));
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_add_merges_and_respects_distinctness() {
        let mut cart = service();
        let mut p = product("dress", 9800);
        p.sizes = vec!["M".to_owned(), "L".to_owned()];

        cart.add_to_cart(&p, 2, "M", "").unwrap();
        cart.add_to_cart(&p, 3, "M", "").unwrap();
        cart.add_to_cart(&p, 1, "L", "").unwrap();

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.lines()[1].quantity, 1);
    }

    #[test]
    fn test_remove_unknown_line_succeeds() {
        let mut cart = service();
        assert!(cart.remove_from_cart(&LineId::from("ghost::::")).is_ok());
    }

    #[test]
    fn test_update_unknown_line_is_not_found() {
        let mut cart = service();
        let err = cart
            .update_quantity(&LineId::from("ghost::::"), 2)
            .unwrap_err();
        assert!(matches!(err, CartError::LineNotFound(_)));
    }

    #[test]
    fn test_clear_on_empty_cart_is_rejected() {
        let mut cart = service();
        let err = cart.clear_cart().unwrap_err();
        assert_eq!(err, CartError::Rejected(RejectReason::EmptyCart));
    }

    #[test]
    fn test_mutations_persist_and_clear_erases() {
        let storage = MemoryStorage::new();
        let mut cart = CartService::open(storage, CartLimits::default());

        cart.add_to_cart(&product("p1", 1000), 1, "", "").unwrap();
        assert!(persist::read_state(&cart.storage).is_some());

        cart.clear_cart().unwrap();
        assert!(persist::read_state(&cart.storage).is_none());
    }

    #[test]
    fn test_reopen_restores_cart() {
        let storage = MemoryStorage::new();
        let mut cart = CartService::open(storage, CartLimits::default());
        cart.add_to_cart(&product("p1", 1000), 2, "", "").unwrap();
        let CartService { storage, .. } = cart;

        let reopened = CartService::open(storage, CartLimits::default());
        assert_eq!(reopened.total_items(), 2);
        assert_eq!(reopened.total_amount(), Decimal::new(2000, 2));
    }
}
