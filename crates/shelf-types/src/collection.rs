use std::collections::HashSet;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::product::Product;

/// Ordered products, unique by id.
///
/// Order is kept exactly as the source delivered it. Row state in the UI is
/// keyed by product id, so construction rejects duplicate ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InventoryCollection {
    products: Vec<Product>,
}

impl InventoryCollection {
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(Error::DuplicateProductId(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.products.iter().map(|product| product.id.as_str())
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }
}

impl<'a> IntoIterator for &'a InventoryCollection {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_source_order() {
        let collection = InventoryCollection::new(vec![
            Product::new("c", "Clamp", "2024-01-03"),
            Product::new("a", "Awl", "2024-01-01"),
            Product::new("b", "Bit", "2024-01-02"),
        ])
        .unwrap();

        let ids: Vec<&str> = collection.ids().collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = InventoryCollection::new(vec![
            Product::new("a", "Awl", "2024-01-01"),
            Product::new("a", "Another Awl", "2024-01-02"),
        ]);

        match result {
            Err(Error::DuplicateProductId(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let collection =
            InventoryCollection::new(vec![Product::new("x", "Vise", "2024-01-01")]).unwrap();

        assert!(collection.contains_id("x"));
        assert!(!collection.contains_id("y"));
        assert_eq!(collection.find("x").map(|p| p.fields.name.as_str()), Some("Vise"));
    }
}
