//! Pre-mutation validation.
//!
//! The validation layer is a pure gatekeeper: it inspects the requested
//! mutation against the current state, the product, and the configured
//! ceilings, and either approves or returns a structured [`RejectReason`].
//! It never mutates state; an approved request is then dispatched to the
//! reducer unchanged.

use thiserror::Error;

use asili_core::ProductId;

use crate::catalog::Product;
use crate::config::CartLimits;

use super::error::CartError;
use super::line::LineId;
use super::state::CartState;

/// Machine-distinguishable rejection categories, for consumers that map
/// rejections to user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectCategory {
    /// Product unavailable or insufficient tracked stock.
    Stock,
    /// Requested quantity outside per-line bounds.
    QuantityBound,
    /// Cart-wide item ceiling would be exceeded.
    CartBound,
    /// A required variant selection is missing.
    MissingVariant,
    /// The operation has no effect on an empty cart.
    Empty,
}

/// Why a mutation request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// The product is not available for sale.
    #[error("{product} is currently unavailable")]
    Unavailable {
        /// The requested product.
        product: ProductId,
    },
    /// Tracked inventory cannot cover the requested quantity.
    #[error("only {available} of {product} in stock (requested {requested})")]
    InsufficientStock {
        /// The requested product.
        product: ProductId,
        /// Units requested.
        requested: u32,
        /// Units on hand.
        available: u32,
    },
    /// A quantity of zero was requested on add.
    #[error("quantity must be at least 1")]
    ZeroQuantity,
    /// The per-line quantity ceiling would be exceeded.
    #[error("quantity {requested} exceeds the per-line limit of {max}")]
    LineQuantityCeiling {
        /// Units requested for the line.
        requested: u32,
        /// Configured per-line ceiling.
        max: u32,
    },
    /// The cart-wide item ceiling would be exceeded.
    #[error("cart would hold {prospective} items, over the limit of {max}")]
    CartItemCeiling {
        /// Item count the cart would reach.
        prospective: u32,
        /// Configured cart-wide ceiling.
        max: u32,
    },
    /// The product is sized and no size was selected.
    #[error("{product} requires a size selection")]
    SizeRequired {
        /// The requested product.
        product: ProductId,
    },
    /// The product has colorways and no color was selected.
    #[error("{product} requires a color selection")]
    ColorRequired {
        /// The requested product.
        product: ProductId,
    },
    /// The cart is already empty.
    #[error("the cart is already empty")]
    EmptyCart,
}

impl RejectReason {
    /// The coarse category of this rejection.
    #[must_use]
    pub const fn category(&self) -> RejectCategory {
        match self {
            Self::Unavailable { .. } | Self::InsufficientStock { .. } => RejectCategory::Stock,
            Self::ZeroQuantity | Self::LineQuantityCeiling { .. } => RejectCategory::QuantityBound,
            Self::CartItemCeiling { .. } => RejectCategory::CartBound,
            Self::SizeRequired { .. } | Self::ColorRequired { .. } => {
                RejectCategory::MissingVariant
            }
            Self::EmptyCart => RejectCategory::Empty,
        }
    }
}

/// Approve or reject an add request.
///
/// # Errors
///
/// Returns the first applicable [`RejectReason`]: availability, quantity
/// bounds, tracked stock, the cart-wide ceiling, then missing variant
/// selections.
pub fn check_add(
    state: &CartState,
    product: &Product,
    quantity: u32,
    size: &str,
    color: &str,
    limits: &CartLimits,
) -> Result<(), RejectReason> {
    if !product.in_stock() {
        return Err(RejectReason::Unavailable {
            product: product.id.clone(),
        });
    }
    if quantity == 0 {
        return Err(RejectReason::ZeroQuantity);
    }
    if quantity > limits.max_per_line {
        return Err(RejectReason::LineQuantityCeiling {
            requested: quantity,
            max: limits.max_per_line,
        });
    }
    if !product.has_stock_for(quantity) {
        return Err(RejectReason::InsufficientStock {
            product: product.id.clone(),
            requested: quantity,
            available: product.stock.unwrap_or(0),
        });
    }
    let prospective = state.total_items.saturating_add(quantity);
    if prospective > limits.max_cart_items {
        return Err(RejectReason::CartItemCeiling {
            prospective,
            max: limits.max_cart_items,
        });
    }
    if product.requires_size_choice() && size.is_empty() {
        return Err(RejectReason::SizeRequired {
            product: product.id.clone(),
        });
    }
    if product.requires_color_choice() && color.is_empty() {
        return Err(RejectReason::ColorRequired {
            product: product.id.clone(),
        });
    }
    Ok(())
}

/// Approve or reject a quantity update.
///
/// A missing line is signaled as [`CartError::LineNotFound`], distinct from
/// a validation rejection: it usually means the caller is holding a stale
/// view of the cart.
///
/// # Errors
///
/// Returns [`CartError`] if the line does not exist or a ceiling would be
/// exceeded.
pub fn check_set_quantity(
    state: &CartState,
    line_id: &LineId,
    quantity: u32,
    limits: &CartLimits,
) -> Result<(), CartError> {
    let Some(line) = state.line(line_id) else {
        return Err(CartError::LineNotFound(line_id.clone()));
    };
    if quantity > limits.max_per_line {
        return Err(RejectReason::LineQuantityCeiling {
            requested: quantity,
            max: limits.max_per_line,
        }
        .into());
    }
    let prospective = state
        .total_items
        .saturating_sub(line.quantity)
        .saturating_add(quantity);
    if prospective > limits.max_cart_items {
        return Err(RejectReason::CartItemCeiling {
            prospective,
            max: limits.max_cart_items,
        }
        .into());
    }
    Ok(())
}

/// Approve or reject a clear request.
///
/// Clearing an empty cart is rejected rather than silently ignored, so
/// consumers can suppress confirmation prompts for a no-effect action.
///
/// # Errors
///
/// Returns [`RejectReason::EmptyCart`] when there is nothing to clear.
pub fn check_clear(state: &CartState) -> Result<(), RejectReason> {
    if state.is_empty() {
        return Err(RejectReason::EmptyCart);
    }
    Ok(())
}
