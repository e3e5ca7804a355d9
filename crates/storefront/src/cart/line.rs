//! Cart line items and their composite identity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use asili_core::{CategoryId, Price, ProductId};

use crate::catalog::Product;

/// Separator used when deriving a [`LineId`].
///
/// Product handles are `[a-z0-9-]` slugs, so `::` can never collide with id
/// content.
const SEPARATOR: &str = "::";

/// Composite identity of a cart line: product plus variant selection.
///
/// Two adds with the same `(product, size, color)` resolve to the same line
/// and merge; any difference in any field produces a distinct line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    /// Derive the line identity for a product and variant selection.
    ///
    /// Empty `size`/`color` are valid "no selection" values and produce a
    /// key distinct from any concrete selection.
    #[must_use]
    pub fn resolve(product_id: &ProductId, size: &str, color: &str) -> Self {
        Self(format!(
            "{}{SEPARATOR}{size}{SEPARATOR}{color}",
            product_id.as_str()
        ))
    }

    /// Get the underlying key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LineId {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

/// One purchasable line item in the cart.
///
/// Product attributes are a snapshot taken at add time. The cart does not
/// re-read the catalog afterwards: a later catalog change never rewrites
/// lines already in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Composite identity; the merge key within a cart.
    pub line_id: LineId,
    /// Catalog reference.
    pub product_id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Unit price at add time.
    pub unit_price: Price,
    /// Image reference at add time.
    pub image: String,
    /// Category at add time.
    pub category: CategoryId,
    /// Units of this line; always at least 1 (a line reaching zero is
    /// deleted, never stored).
    pub quantity: u32,
    /// Selected size; empty when the product is not sized.
    pub size: String,
    /// Selected color; empty when the product has a single colorway.
    pub color: String,
}

impl CartLine {
    /// Capture a product snapshot into a new line.
    #[must_use]
    pub fn from_product(product: &Product, quantity: u32, size: &str, color: &str) -> Self {
        Self {
            line_id: LineId::resolve(&product.id, size, color),
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            quantity,
            size: size.to_owned(),
            color: color.to_owned(),
        }
    }

    /// Line subtotal: unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.unit_price.amount() * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_deterministic() {
        let product = ProductId::new("kente-slides");
        let a = LineId::resolve(&product, "38", "");
        let b = LineId::resolve(&product, "38", "");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "kente-slides::38::");
    }

    #[test]
    fn test_resolve_distinguishes_every_field() {
        let product = ProductId::new("ankara-flare-dress");
        let base = LineId::resolve(&product, "M", "red");

        assert_ne!(base, LineId::resolve(&ProductId::new("other"), "M", "red"));
        assert_ne!(base, LineId::resolve(&product, "L", "red"));
        assert_ne!(base, LineId::resolve(&product, "M", "indigo"));
    }

    #[test]
    fn test_empty_variant_is_distinct_from_concrete() {
        let product = ProductId::new("ankara-tote");
        assert_ne!(
            LineId::resolve(&product, "", ""),
            LineId::resolve(&product, "", "teal")
        );
    }
}
