//! Checkout command.

use mapleshop_cart::{InMemoryCatalog, Result, ShopStore};

use super::cart;

/// Validate the payment form and complete the order.
///
/// Stale cart lines are pruned and reported first so the pricing that backs
/// the confirmation cannot fail on a "no longer available" product.
#[allow(clippy::print_stdout)]
pub fn run(
    store: &mut ShopStore<InMemoryCatalog>,
    card_number: &str,
    expiry: &str,
    cvv: &str,
) -> Result<()> {
    cart::prune(store);

    let Some(confirmation) = store.checkout_with_payment(card_number, expiry, cvv)? else {
        println!("Your cart is empty; nothing to check out");
        return Ok(());
    };

    println!("Payment accepted. Congratulations, your order is placed!");
    println!("Order:  {}", confirmation.order_id);
    println!("Items:  {}", confirmation.unit_count);
    println!("Total:  {}", confirmation.pricing.total.display());
    Ok(())
}
