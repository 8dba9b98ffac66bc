//! Read-only product catalog.
//!
//! The catalog is an external collaborator from the cart's point of view:
//! the engine only ever reads an immutable snapshot of it and looks prices
//! up by id. This module defines the consumed capability as a trait plus an
//! in-memory adapter that can be seeded, built from a product list, or
//! loaded from JSON.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use mapleshop_core::{Money, Product, ProductId};

/// Placeholder used when a catalog record is missing its title.
pub const DEFAULT_TITLE: &str = "Untitled Product";
/// Placeholder used when a catalog record is missing its category.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";
/// Placeholder used when a catalog record is missing its image reference.
pub const DEFAULT_IMAGE: &str = "placeholder";

/// Read-only source of product records.
///
/// Implementations must present an immutable snapshot: the cart engine must
/// never observe a partially-updated catalog mid-operation.
pub trait CatalogStore {
    /// The current known snapshot of products, in catalog order.
    fn products(&self) -> &[Product];

    /// Look up a single product by id.
    fn get(&self, id: ProductId) -> Option<&Product>;
}

/// Raw catalog record as found in a JSON catalog file.
///
/// Optional display fields fall back to the documented placeholder
/// constants above; id and price are required.
#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: ProductId,
    #[serde(default = "default_title")]
    title: String,
    price: Money,
    #[serde(default = "default_category")]
    category: String,
    #[serde(default = "default_image")]
    image: String,
    #[serde(default)]
    description: String,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_owned()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_owned()
}

fn default_image() -> String {
    DEFAULT_IMAGE.to_owned()
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            price: record.price,
            category: record.category,
            image: record.image,
            description: record.description,
        }
    }
}

/// In-memory catalog adapter.
///
/// Holds a fixed product list with an id index for O(1) lookup. The list is
/// immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
}

impl InMemoryCatalog {
    /// Build a catalog from an already-loaded product list.
    ///
    /// If the same id appears more than once, the last record wins for
    /// lookups; the listing keeps every record.
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        let by_id = products
            .iter()
            .enumerate()
            .map(|(index, product)| (product.id, index))
            .collect();
        debug!(count = products.len(), "catalog loaded");
        Self { products, by_id }
    }

    /// Parse a catalog from a JSON array of product records.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if the document is not a
    /// valid product array.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;
        Ok(Self::from_products(
            records.into_iter().map(Product::from).collect(),
        ))
    }

    /// The built-in seed catalog used when no catalog file is configured.
    #[must_use]
    pub fn seed() -> Self {
        let seed = |id: i64, title: &str, cents: u32, description: &str, category: &str, image: &str| {
            Product {
                id: ProductId::new(id),
                title: title.to_owned(),
                price: Money::from_cents(cents),
                category: category.to_owned(),
                image: image.to_owned(),
                description: description.to_owned(),
            }
        };

        Self::from_products(vec![
            seed(1, "Pants", 8200, "Stylish Pants", "Apparel", "hm1"),
            seed(2, "Dress", 7000, "Brown Dress", "Apparel", "hm2"),
            seed(3, "Shirt", 12900, "Black Shirt", "Apparel", "hm3"),
            seed(4, "T-shirt", 6200, "T-shirt", "Footwear", "hm4"),
        ])
    }

    /// Case-insensitive title substring search.
    ///
    /// An empty query matches everything, mirroring an empty search bar.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|product| product.title.to_lowercase().contains(&needle))
            .collect()
    }
}

impl CatalogStore for InMemoryCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }

    fn get(&self, id: ProductId) -> Option<&Product> {
        self.by_id
            .get(&id)
            .and_then(|&index| self.products.get(index))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog() {
        let catalog = InMemoryCatalog::seed();
        assert_eq!(catalog.products().len(), 4);

        let pants = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(pants.title, "Pants");
        assert_eq!(pants.price, Money::from_cents(8200));
    }

    #[test]
    fn test_get_unknown_id() {
        let catalog = InMemoryCatalog::seed();
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_from_json_with_defaults() {
        let json = r#"[
            {"id": 1, "title": "Pants", "price": "82.00", "category": "Apparel", "image": "hm1", "description": "Stylish Pants"},
            {"id": 2, "price": "5.00"}
        ]"#;
        let catalog = InMemoryCatalog::from_json(json).unwrap();

        let bare = catalog.get(ProductId::new(2)).unwrap();
        assert_eq!(bare.title, DEFAULT_TITLE);
        assert_eq!(bare.category, DEFAULT_CATEGORY);
        assert_eq!(bare.image, DEFAULT_IMAGE);
        assert_eq!(bare.description, "");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(InMemoryCatalog::from_json("{\"not\": \"an array\"}").is_err());
    }

    #[test]
    fn test_from_json_rejects_negative_price() {
        // A bad catalog file must fail at load, not price carts negatively
        let json = r#"[{"id": 1, "title": "Bad", "price": "-5.00"}]"#;
        assert!(InMemoryCatalog::from_json(json).is_err());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = InMemoryCatalog::seed();
        let hits = catalog.search("shirt");
        let titles: Vec<&str> = hits.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Shirt", "T-shirt"]);
    }

    #[test]
    fn test_search_empty_query_matches_all() {
        let catalog = InMemoryCatalog::seed();
        assert_eq!(catalog.search("").len(), 4);
    }

    #[test]
    fn test_duplicate_id_last_record_wins() {
        let mut products = InMemoryCatalog::seed().products().to_vec();
        let mut replacement = products.first().unwrap().clone();
        replacement.title = "New Pants".to_owned();
        products.push(replacement);

        let catalog = InMemoryCatalog::from_products(products);
        assert_eq!(catalog.get(ProductId::new(1)).unwrap().title, "New Pants");
    }
}
