//! Integration tests for Corner Shop.
//!
//! Tests live in `tests/` and exercise the cart store end to end against
//! real files in a temporary data directory - every mutation goes through
//! the same load / mutate / flush path the storefront binary uses.
//!
//! This crate provides the shared harness: a temp data directory, the
//! two-product demo catalog, and helpers to open carts and inspect the raw
//! persisted blobs.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used)] // test harness

use corner_shop_core::{Catalog, Price, Product, ProductId};
use corner_shop_store::{CartStore, JsonFileStorage};
use tempfile::TempDir;

/// A storefront session rooted in a temporary data directory.
pub struct TestShop {
    dir: TempDir,
    catalog: Catalog,
}

impl TestShop {
    /// A shop with the two-product demo catalog (id 1 @ $59.99, id 2 @ $79.00).
    #[must_use]
    pub fn new() -> Self {
        let catalog = Catalog::new(vec![
            Product {
                id: ProductId::new(1).unwrap(),
                title: "Wireless Headphones".to_string(),
                price: Price::from_cents(5999),
                image_url: "https://picsum.photos/seed/p1/600/400".to_string(),
            },
            Product {
                id: ProductId::new(2).unwrap(),
                title: "Classic Sneakers".to_string(),
                price: Price::from_cents(7900),
                image_url: "https://picsum.photos/seed/p2/600/400".to_string(),
            },
        ])
        .unwrap();

        Self {
            dir: TempDir::new().unwrap(),
            catalog,
        }
    }

    /// The session catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Open (or reopen) the cart persisted under `key`.
    #[must_use]
    pub fn open_cart(&self, key: &str) -> CartStore<JsonFileStorage> {
        CartStore::open(JsonFileStorage::new(self.dir.path()), key)
    }

    /// The raw persisted blob for `key`, if any.
    #[must_use]
    pub fn raw_blob(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.dir.path().join(format!("{key}.json"))).ok()
    }

    /// Seed the slot for `key` with an arbitrary blob.
    pub fn write_blob(&self, key: &str, blob: &str) {
        std::fs::write(self.dir.path().join(format!("{key}.json")), blob).unwrap();
    }

    /// Shorthand for a product id.
    #[must_use]
    pub fn id(raw: i64) -> ProductId {
        ProductId::new(raw).unwrap()
    }
}

impl Default for TestShop {
    fn default() -> Self {
        Self::new()
    }
}
