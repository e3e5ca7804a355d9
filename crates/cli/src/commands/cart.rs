//! Cart management commands.
//!
//! These commands are thin: validation and state transitions live in the
//! engine. The one policy owned here is the interactive confirmation before
//! `clear` - the engine's mutation API is confirmation-agnostic.

use std::io::{BufRead, Write};

use asili_core::ProductId;
use asili_storefront::cart::LineId;
use asili_storefront::error::{Result, StoreError};
use asili_storefront::state::Store;

/// Print the cart contents and derived totals.
pub fn show(store: &Store) {
    let cart = store.cart();
    if cart.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    for line in cart.lines() {
        let mut variant = String::new();
        if !line.size.is_empty() {
            variant.push_str(&format!(" size {}", line.size));
        }
        if !line.color.is_empty() {
            variant.push_str(&format!(" color {}", line.color));
        }
        println!(
            "{:<34} {:<28} x{:<3} {:>10}{variant}",
            line.line_id,
            line.name,
            line.quantity,
            line.unit_price.display(),
        );
    }
    println!(
        "\n{} items, total {}{:.2}",
        cart.total_items(),
        store.config().currency.symbol(),
        cart.total_amount()
    );
}

/// Add a product from the catalog to the cart.
pub fn add(store: &mut Store, handle: &str, quantity: u32, size: &str, color: &str) -> Result<()> {
    let id = ProductId::new(handle);
    let Some(product) = store.catalog().product(&id).cloned() else {
        return Err(StoreError::NotFound(format!("product {handle}")));
    };

    store.cart_mut().add_to_cart(&product, quantity, size, color)?;
    println!("Added {quantity} x {} to your cart.", product.name);
    show(store);
    Ok(())
}

/// Remove a line from the cart.
pub fn remove(store: &mut Store, line_id: &str) -> Result<()> {
    store.cart_mut().remove_from_cart(&LineId::from(line_id))?;
    println!("Removed {line_id}.");
    show(store);
    Ok(())
}

/// Set a line's quantity.
pub fn update(store: &mut Store, line_id: &str, quantity: u32) -> Result<()> {
    store
        .cart_mut()
        .update_quantity(&LineId::from(line_id), quantity)?;
    show(store);
    Ok(())
}

/// Empty the cart, asking first unless `--yes` was passed.
///
/// An already-empty cart skips the prompt entirely; the engine reports it as
/// a rejected no-effect action.
pub fn clear(store: &mut Store, yes: bool) -> Result<()> {
    if !yes && !store.cart().is_empty() {
        let items = store.cart().total_items();
        print!("Clear {items} items from your cart? [y/N] ");
        std::io::stdout().flush().ok();

        let mut answer = String::new();
        std::io::stdin().lock().read_line(&mut answer).ok();
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }

    store.cart_mut().clear_cart()?;
    println!("Cart cleared.");
    Ok(())
}
