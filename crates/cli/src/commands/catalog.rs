//! Catalog browsing commands.

use rust_decimal::Decimal;

use asili_core::{CategoryId, ProductId};
use asili_storefront::catalog::{Product, ProductQuery, ProductSort};
use asili_storefront::error::{Result, StoreError};
use asili_storefront::state::Store;

/// List products matching the given filters.
pub fn list(
    store: &Store,
    category: Option<String>,
    in_stock: bool,
    min: Option<Decimal>,
    max: Option<Decimal>,
    sort: ProductSort,
) -> Result<()> {
    if let Some(handle) = &category {
        let id = CategoryId::new(handle.clone());
        if store.catalog().category(&id).is_none() {
            return Err(StoreError::NotFound(format!("category {handle}")));
        }
    }

    let query = ProductQuery {
        category: category.map(CategoryId::new),
        in_stock_only: in_stock,
        min_price: min,
        max_price: max,
        sort,
    };

    let products = store.catalog().query(&query);
    if products.is_empty() {
        println!("No products match.");
        return Ok(());
    }

    for product in products {
        println!(
            "{:<24} {:<28} {:>10}  {}",
            product.id,
            product.name,
            product.price.display(),
            stock_label(product)
        );
    }
    Ok(())
}

/// Show one product in detail.
pub fn show(store: &Store, handle: &str) -> Result<()> {
    let id = ProductId::new(handle);
    let Some(product) = store.catalog().product(&id) else {
        return Err(StoreError::NotFound(format!("product {handle}")));
    };

    println!("{}  ({})", product.name, product.id);
    println!("  {}", product.description);
    println!("  Price:    {}", product.price.display());
    println!("  Category: {}", product.category);
    if !product.sizes.is_empty() {
        println!("  Sizes:    {}", product.sizes.join(", "));
    }
    if !product.colors.is_empty() {
        println!("  Colors:   {}", product.colors.join(", "));
    }
    println!("  Status:   {}", stock_label(product));
    Ok(())
}

fn stock_label(product: &Product) -> String {
    if !product.available {
        return "unavailable".to_owned();
    }
    match product.stock {
        Some(0) => "sold out".to_owned(),
        Some(units) => format!("{units} in stock"),
        None => "in stock".to_owned(),
    }
}
