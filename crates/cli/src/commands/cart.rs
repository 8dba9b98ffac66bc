//! Cart commands.

use mapleshop_cart::{CatalogStore, InMemoryCatalog, Result, ShopStore};
use mapleshop_core::ProductId;

fn title_of(store: &ShopStore<InMemoryCatalog>, id: ProductId) -> String {
    store
        .catalog()
        .get(id)
        .map_or_else(|| format!("product {id}"), |p| p.title.clone())
}

/// Add a product to the cart (quantity 1 when newly added).
#[allow(clippy::print_stdout)]
pub fn add(store: &mut ShopStore<InMemoryCatalog>, id: ProductId) {
    let title = title_of(store, id);
    if store.add_to_cart(id) {
        println!("Added {title} to cart");
    } else {
        println!("{title} is already in the cart");
    }
}

/// Remove a product and its quantity from the cart.
#[allow(clippy::print_stdout)]
pub fn remove(store: &mut ShopStore<InMemoryCatalog>, id: ProductId) {
    let title = title_of(store, id);
    if store.remove_from_cart(id) {
        println!("Removed {title} from cart");
    } else {
        println!("{title} was not in the cart");
    }
}

/// Increase a line's quantity by one.
#[allow(clippy::print_stdout)]
pub fn increment(store: &mut ShopStore<InMemoryCatalog>, id: ProductId) -> Result<()> {
    let quantity = store.increment_quantity(id)?;
    println!("{} x{quantity}", title_of(store, id));
    Ok(())
}

/// Decrease a line's quantity by one (floored at 1).
#[allow(clippy::print_stdout)]
pub fn decrement(store: &mut ShopStore<InMemoryCatalog>, id: ProductId) -> Result<()> {
    let quantity = store.decrement_quantity(id)?;
    println!("{} x{quantity}", title_of(store, id));
    Ok(())
}

/// Report and drop cart lines the catalog no longer resolves.
#[allow(clippy::print_stdout)]
pub fn prune(store: &mut ShopStore<InMemoryCatalog>) {
    for id in store.prune_unavailable() {
        println!("Product {id} is no longer available and was removed from your cart");
    }
}

/// Show the cart lines and the pricing breakdown.
#[allow(clippy::print_stdout)]
pub fn show(store: &mut ShopStore<InMemoryCatalog>) -> Result<()> {
    prune(store);

    let lines = store.cart_lines();
    if lines.is_empty() {
        println!("Your cart is empty");
        return Ok(());
    }

    for line in &lines {
        // Lines survive pruning, so the lookup resolves
        if let Some(product) = store.catalog().get(line.product_id) {
            println!(
                "{:>5}  {:<20} {:>10} x{:<3} = {}",
                product.id,
                product.title,
                product.price.display(),
                line.quantity,
                (product.price * line.quantity).display()
            );
        }
    }

    let pricing = store.pricing_snapshot()?;
    println!("Subtotal:  {}", pricing.subtotal.display());
    println!("Tax (13%): {}", pricing.tax.display());
    println!("Total:     {}", pricing.total.display());
    Ok(())
}
