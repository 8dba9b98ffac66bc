//! Favorites commands.

use mapleshop_cart::{CatalogStore, InMemoryCatalog, ShopStore};
use mapleshop_core::ProductId;

/// Flip favorite membership for a product.
#[allow(clippy::print_stdout)]
pub fn toggle(store: &mut ShopStore<InMemoryCatalog>, id: ProductId) {
    let title = store
        .catalog()
        .get(id)
        .map_or_else(|| format!("product {id}"), |p| p.title.clone());

    if store.toggle_favorite(id) {
        println!("Added {title} to favorites");
    } else {
        println!("Removed {title} from favorites");
    }
}

/// List favorited products.
#[allow(clippy::print_stdout)]
pub fn list(store: &ShopStore<InMemoryCatalog>) {
    let favorites = store.favorite_products();
    if favorites.is_empty() {
        println!("No favorites added yet");
        return;
    }

    println!("{} favorite(s)", favorites.len());
    for product in favorites {
        println!(
            "{:>5}  {:<20} {:>10}",
            product.id,
            product.title,
            product.price.display()
        );
    }
}
