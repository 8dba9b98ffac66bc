//! Catalog browsing commands.

use mapleshop_cart::{CatalogStore, InMemoryCatalog};
use mapleshop_core::Product;

#[allow(clippy::print_stdout)]
fn print_products(products: &[&Product]) {
    for product in products {
        println!(
            "{:>5}  {:<20} {:>10}  {}",
            product.id,
            product.title,
            product.price.display(),
            product.category
        );
    }
}

/// List the whole catalog.
#[allow(clippy::print_stdout)]
pub fn list(catalog: &InMemoryCatalog) {
    let products: Vec<&Product> = catalog.products().iter().collect();
    println!("{} product(s)", products.len());
    print_products(&products);
}

/// Search the catalog by title.
#[allow(clippy::print_stdout)]
pub fn search(catalog: &InMemoryCatalog, query: &str) {
    let hits = catalog.search(query);
    if hits.is_empty() {
        println!("No products match \"{query}\"");
    } else {
        println!("{} product(s) match \"{query}\"", hits.len());
        print_products(&hits);
    }
}
