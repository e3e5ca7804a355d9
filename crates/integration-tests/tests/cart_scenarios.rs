//! End-to-end cart scenarios over the seeded catalog.
//!
//! These drive the same composition a consumer session uses: seed catalog
//! products flowing into a `CartService`, with validation in front.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use asili_core::ProductId;
use asili_storefront::cart::{CartError, CartService, RejectCategory, RejectReason};
use asili_storefront::catalog::CatalogStore;
use asili_storefront::config::CartLimits;
use asili_storefront::storage::MemoryStorage;

fn cart() -> CartService<MemoryStorage> {
    CartService::open(MemoryStorage::new(), CartLimits::default())
}

#[test]
fn add_merge_and_variant_distinctness_with_seed_products() {
    let catalog = CatalogStore::with_seed();
    let dress = catalog
        .product(&ProductId::new("ankara-flare-dress"))
        .unwrap();

    let mut cart = cart();
    // The dress is sized and colored; both selections are required.
    let err = cart.add_to_cart(dress, 1, "", "").unwrap_err();
    let CartError::Rejected(reason) = err else {
        panic!("expected rejection");
    };
    assert_eq!(reason.category(), RejectCategory::MissingVariant);

    cart.add_to_cart(dress, 2, "M", "indigo").unwrap();
    cart.add_to_cart(dress, 3, "M", "indigo").unwrap();
    cart.add_to_cart(dress, 1, "L", "indigo").unwrap();

    assert_eq!(cart.lines().len(), 2);
    assert_eq!(cart.lines()[0].quantity, 5);
    assert_eq!(cart.total_items(), 6);
}

#[test]
fn stock_ceiling_rejects_and_leaves_cart_untouched() {
    let catalog = CatalogStore::with_seed();
    // Seeded with 5 units on hand.
    let collar = catalog
        .product(&ProductId::new("maasai-bead-collar"))
        .unwrap();

    let mut cart = cart();
    let err = cart.add_to_cart(collar, 9, "", "rainbow").unwrap_err();
    assert!(matches!(
        err,
        CartError::Rejected(RejectReason::InsufficientStock {
            requested: 9,
            available: 5,
            ..
        })
    ));
    assert!(cart.is_empty());
}

#[test]
fn sold_out_and_unavailable_products_cannot_be_added() {
    let catalog = CatalogStore::with_seed();
    let mut cart = cart();

    // Seeded at zero stock.
    let anklet = catalog.product(&ProductId::new("cowrie-anklet")).unwrap();
    let err = cart.add_to_cart(anklet, 1, "", "").unwrap_err();
    assert!(matches!(
        err,
        CartError::Rejected(RejectReason::Unavailable { .. })
    ));

    // Seeded as not available for sale.
    let stole = catalog.product(&ProductId::new("aso-oke-stole")).unwrap();
    assert!(cart.add_to_cart(stole, 1, "", "").is_err());
    assert!(cart.is_empty());
}

#[test]
fn totals_across_mixed_products() {
    let catalog = CatalogStore::with_seed();
    let throw = catalog.product(&ProductId::new("mudcloth-throw")).unwrap();
    let cuff = catalog.product(&ProductId::new("brass-cuff")).unwrap();

    let mut cart = cart();
    cart.add_to_cart(throw, 2, "", "").unwrap();
    cart.add_to_cart(cuff, 1, "", "").unwrap();

    // 2 x $120.00 + 1 x $42.00
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_amount(), Decimal::new(28_200, 2));
}

#[test]
fn update_quantity_to_zero_behaves_as_remove() {
    let catalog = CatalogStore::with_seed();
    let throw = catalog.product(&ProductId::new("mudcloth-throw")).unwrap();

    let mut cart = cart();
    cart.add_to_cart(throw, 1, "", "").unwrap();
    let line_id = cart.lines()[0].line_id.clone();

    cart.update_quantity(&line_id, 0).unwrap();
    assert!(cart.is_empty());
    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.total_amount(), Decimal::ZERO);

    // Updating the now-gone line reports a stale view, not a rejection.
    let err = cart.update_quantity(&line_id, 1).unwrap_err();
    assert!(matches!(err, CartError::LineNotFound(_)));
}

#[test]
fn cart_wide_ceiling_applies_across_lines() {
    let catalog = CatalogStore::with_seed();
    let slides = catalog.product(&ProductId::new("kente-slides")).unwrap();
    let cuff = catalog.product(&ProductId::new("brass-cuff")).unwrap();

    let limits = CartLimits {
        max_per_line: 10,
        max_cart_items: 12,
    };
    let mut cart = CartService::open(MemoryStorage::new(), limits);
    cart.add_to_cart(slides, 10, "40", "").unwrap();

    let err = cart.add_to_cart(cuff, 3, "", "").unwrap_err();
    let CartError::Rejected(reason) = err else {
        panic!("expected rejection");
    };
    assert_eq!(reason.category(), RejectCategory::CartBound);

    // Within the ceiling it goes through.
    cart.add_to_cart(cuff, 2, "", "").unwrap();
    assert_eq!(cart.total_items(), 12);
}

#[test]
fn clear_is_rejected_only_when_empty() {
    let catalog = CatalogStore::with_seed();
    let cuff = catalog.product(&ProductId::new("brass-cuff")).unwrap();

    let mut cart = cart();
    let err = cart.clear_cart().unwrap_err();
    assert_eq!(err, CartError::Rejected(RejectReason::EmptyCart));

    cart.add_to_cart(cuff, 1, "", "").unwrap();
    cart.clear_cart().unwrap();
    assert!(cart.is_empty());
}
