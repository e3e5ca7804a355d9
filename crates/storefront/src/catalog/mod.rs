//! Product catalog: domain types and the in-memory store.
//!
//! The catalog is static data loaded once at startup and shared immutably.
//! It is the source of the product snapshot captured into a cart line at add
//! time; the cart never reads back into the catalog after that (cart lines
//! are point-in-time snapshots by design).

mod data;

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use asili_core::{CategoryId, Price, ProductId};

/// A product category (fabrics, jewelry, bags, shoes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// URL handle.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
}

/// A product in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// URL handle.
    pub id: ProductId,
    /// Product title.
    pub name: String,
    /// Plain text description.
    pub description: String,
    /// Current price.
    pub price: Price,
    /// Primary image reference.
    pub image: String,
    /// Owning category.
    pub category: CategoryId,
    /// Available size options. Empty means the product is not sized.
    pub sizes: Vec<String>,
    /// Available color options. Empty means a single colorway.
    pub colors: Vec<String>,
    /// Units on hand, if inventory is tracked. `None` means untracked.
    pub stock: Option<u32>,
    /// Whether the product is available for sale at all.
    pub available: bool,
    /// Date the product entered the catalog.
    pub added_on: NaiveDate,
    /// Whether the product is featured on the home surface.
    pub featured: bool,
}

impl Product {
    /// Whether the product can currently be purchased.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.available && self.stock != Some(0)
    }

    /// Whether tracked inventory covers `quantity` units.
    ///
    /// Untracked inventory covers any quantity.
    #[must_use]
    pub fn has_stock_for(&self, quantity: u32) -> bool {
        self.stock.is_none_or(|units| quantity <= units)
    }

    /// Whether adding to cart requires an explicit size selection.
    ///
    /// A single-size product needs no choice; the one size is implied.
    #[must_use]
    pub fn requires_size_choice(&self) -> bool {
        self.sizes.len() > 1
    }

    /// Whether adding to cart requires an explicit color selection.
    #[must_use]
    pub fn requires_color_choice(&self) -> bool {
        self.colors.len() > 1
    }
}

// =============================================================================
// Listing queries
// =============================================================================

/// Sort order for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    /// Catalog order (featured items lead the seed data).
    #[default]
    Catalog,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Most recently added first.
    Newest,
    /// Alphabetical by name.
    Name,
}

/// Filter and sort parameters for a product listing.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Restrict to one category.
    pub category: Option<CategoryId>,
    /// Drop unavailable and zero-stock products.
    pub in_stock_only: bool,
    /// Minimum price, inclusive.
    pub min_price: Option<Decimal>,
    /// Maximum price, inclusive.
    pub max_price: Option<Decimal>,
    /// Sort order.
    pub sort: ProductSort,
}

impl ProductQuery {
    fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if product.category != *category {
                return false;
            }
        }
        if self.in_stock_only && !product.in_stock() {
            return false;
        }
        if let Some(min) = self.min_price {
            if product.price.amount() < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price.amount() > max {
                return false;
            }
        }
        true
    }
}

// =============================================================================
// Store
// =============================================================================

/// Catalog store holding all products and categories in memory.
///
/// Cheaply cloneable via `Arc`; contents are immutable after construction.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    inner: Arc<CatalogInner>,
}

#[derive(Debug)]
struct CatalogInner {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl CatalogStore {
    /// Build a store from explicit data (used by tests).
    #[must_use]
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            inner: Arc::new(CatalogInner {
                products,
                categories,
            }),
        }
    }

    /// Build the store from the seeded catalog data.
    #[must_use]
    pub fn with_seed() -> Self {
        Self::new(data::seed_products(), data::seed_categories())
    }

    /// Get a product by handle.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.inner.products.iter().find(|p| p.id == *id)
    }

    /// Get a category by handle.
    #[must_use]
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.inner.categories.iter().find(|c| c.id == *id)
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.inner.products
    }

    /// All categories.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.inner.categories
    }

    /// Featured products, in catalog order.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.inner.products.iter().filter(|p| p.featured)
    }

    /// Run a listing query: filter, then stable-sort.
    #[must_use]
    pub fn query(&self, query: &ProductQuery) -> Vec<&Product> {
        let mut results: Vec<&Product> = self
            .inner
            .products
            .iter()
            .filter(|p| query.matches(p))
            .collect();

        match query.sort {
            ProductSort::Catalog => {}
            ProductSort::PriceAsc => {
                results.sort_by_key(|p| p.price.amount());
            }
            ProductSort::PriceDesc => {
                results.sort_by(|a, b| b.price.amount().cmp(&a.price.amount()));
            }
            ProductSort::Newest => {
                results.sort_by(|a, b| b.added_on.cmp(&a.added_on));
            }
            ProductSort::Name => {
                results.sort_by(|a, b| a.name.cmp(&b.name));
            }
        }

        results
    }
}
