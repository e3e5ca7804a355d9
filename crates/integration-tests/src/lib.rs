//! Shared helpers for Asili integration tests.
//!
//! The tests exercise the engine the way a consumer session does: a
//! [`asili_storefront::cart::CartService`] opened over file-backed storage,
//! reopened to simulate an application restart.

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::NaiveDate;

use asili_core::{CategoryId, CurrencyCode, Price, ProductId};
use asili_storefront::catalog::Product;

/// Build a plain test product: untracked stock, no variants.
#[must_use]
pub fn test_product(id: &str, cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: id.to_owned(),
        description: String::new(),
        price: Price::from_cents(cents, CurrencyCode::USD),
        image: format!("products/{id}.jpg"),
        category: CategoryId::new("fabrics"),
        sizes: Vec::new(),
        colors: Vec::new(),
        stock: None,
        available: true,
        added_on: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        featured: false,
    }
}
