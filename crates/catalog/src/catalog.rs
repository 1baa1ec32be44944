use std::collections::HashSet;

use chrono::{DateTime, Utc};

use storefront_core::{Entity, ProductId};

use crate::product::Product;

/// In-memory catalog snapshot, fetched at startup and never refreshed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    loaded_at: Option<DateTime<Utc>>,
}

impl Catalog {
    /// The snapshot before any load completed (or after a failed one).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot, keeping API order. A repeated id keeps its first occurrence.
    pub fn from_products(products: Vec<Product>, loaded_at: DateTime<Utc>) -> Self {
        let mut seen = HashSet::with_capacity(products.len());
        let mut unique = Vec::with_capacity(products.len());
        for product in products {
            if seen.insert(*product.id()) {
                unique.push(product);
            } else {
                tracing::warn!(
                    product_id = %product.id(),
                    "duplicate product id in catalog; keeping first"
                );
            }
        }

        Self {
            products: unique,
            loaded_at: Some(loaded_at),
        }
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| *p.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }
}
