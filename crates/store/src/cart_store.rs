//! The cart store: cart state plus its persistence slot.

use corner_shop_core::{CartState, Catalog, Price, ProductId};

use crate::error::StoreError;
use crate::storage::StorageSlot;

/// A cart bound to one key in a durable key-value slot.
///
/// Mutations apply to the in-memory state first and are then flushed to the
/// slot, so a persistence failure ([`StoreError::StorageUnavailable`]) is
/// reported but never loses the mutation for the running session.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    key: String,
    state: CartState,
}

impl<S: StorageSlot> CartStore<S> {
    /// Open the cart stored under `key`, loading any persisted state.
    ///
    /// Loading never fails: an absent key, an unreadable slot, or a blob
    /// that does not parse as the expected mapping shape all degrade to an
    /// empty cart (with a warning logged).
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = Self::load(&storage, &key);
        Self {
            storage,
            key,
            state,
        }
    }

    fn load(storage: &S, key: &str) -> CartState {
        let blob = match storage.get(key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return CartState::new(),
            Err(e) => {
                tracing::warn!("Failed to read cart {key}: {e}; starting empty");
                return CartState::new();
            }
        };

        match serde_json::from_str::<CartState>(&blob) {
            Ok(mut state) => {
                let dropped = state.prune_empty_lines();
                if dropped > 0 {
                    tracing::warn!("Dropped {dropped} zero-quantity lines from cart {key}");
                }
                state
            }
            Err(e) => {
                tracing::warn!("Malformed cart blob at {key}: {e}; starting empty");
                CartState::new()
            }
        }
    }

    /// The current cart state.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// The storage key this cart persists under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Add `quantity` of a product, then persist.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidArgument`] if `quantity` is 0 (cart unchanged);
    /// [`StoreError::StorageUnavailable`] if the flush fails (mutation
    /// already applied in memory).
    pub fn add_line(&mut self, id: ProductId, quantity: u32) -> Result<(), StoreError> {
        self.state.add_line(id, quantity)?;
        self.persist()
    }

    /// Overwrite a line's quantity (0 removes the line), then persist.
    ///
    /// # Errors
    ///
    /// [`StoreError::StorageUnavailable`] if the flush fails.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) -> Result<(), StoreError> {
        self.state.set_quantity(id, quantity);
        self.persist()
    }

    /// Remove a line (idempotent), then persist.
    ///
    /// # Errors
    ///
    /// [`StoreError::StorageUnavailable`] if the flush fails.
    pub fn remove_line(&mut self, id: ProductId) -> Result<(), StoreError> {
        self.state.remove_line(id);
        self.persist()
    }

    /// Empty the cart, then persist.
    ///
    /// # Errors
    ///
    /// [`StoreError::StorageUnavailable`] if the flush fails.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.state.clear();
        self.persist()
    }

    /// Checkout: clear the cart to simulate order submission.
    ///
    /// # Errors
    ///
    /// [`StoreError::EmptyCart`] if there are no lines (nothing changes);
    /// [`StoreError::StorageUnavailable`] if the flush fails.
    pub fn checkout(&mut self) -> Result<(), StoreError> {
        if self.state.is_empty() {
            return Err(StoreError::EmptyCart);
        }
        self.clear()
    }

    /// Sum of all quantities across lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.state.item_count()
    }

    /// Cart total against the catalog; unknown product ids contribute
    /// nothing.
    #[must_use]
    pub fn total(&self, catalog: &Catalog) -> Price {
        self.state.total(catalog)
    }

    /// Flush the current state to the slot.
    ///
    /// # Errors
    ///
    /// [`StoreError::StorageUnavailable`] if the slot rejects the write.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        // Serializing a map of integers to integers cannot fail.
        let blob = serde_json::to_string(&self.state).unwrap_or_else(|_| "{}".to_string());
        self.storage.set(&self.key, &blob)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use corner_shop_core::{Price, Product};

    use super::*;
    use crate::storage::{MemoryStorage, StorageError};

    fn id(raw: i64) -> ProductId {
        ProductId::new(raw).unwrap()
    }

    fn demo_catalog() -> Catalog {
        Catalog::new(vec![
            Product {
                id: id(1),
                title: "Wireless Headphones".to_string(),
                price: Price::from_cents(5999),
                image_url: String::new(),
            },
            Product {
                id: id(2),
                title: "Classic Sneakers".to_string(),
                price: Price::from_cents(7900),
                image_url: String::new(),
            },
        ])
        .unwrap()
    }

    /// Slot whose writes always fail, for exercising the degraded path.
    struct BrokenStorage;

    impl StorageSlot for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                source: std::io::Error::other("disk on fire"),
            })
        }
    }

    #[test]
    fn test_open_absent_key_is_empty() {
        let store = CartStore::open(MemoryStorage::new(), "cart_v1");
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_open_malformed_blob_is_empty() {
        let mut storage = MemoryStorage::new();
        storage.set("cart_v1", "not json at all").unwrap();
        let store = CartStore::open(storage, "cart_v1");
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_open_wrong_shape_is_empty() {
        let mut storage = MemoryStorage::new();
        storage.set("cart_v1", r#"{"1":"two"}"#).unwrap();
        let store = CartStore::open(storage, "cart_v1");
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_mutations_persist_and_reload() {
        let storage = {
            let mut store = CartStore::open(MemoryStorage::new(), "cart_v1");
            store.add_line(id(1), 2).unwrap();
            store.add_line(id(2), 1).unwrap();
            store.storage
        };

        let reloaded = CartStore::open(storage, "cart_v1");
        assert_eq!(reloaded.state().quantity(id(1)), Some(2));
        assert_eq!(reloaded.state().quantity(id(2)), Some(1));
        assert_eq!(reloaded.item_count(), 3);
    }

    #[test]
    fn test_checkout_empty_cart_rejected() {
        let mut store = CartStore::open(MemoryStorage::new(), "cart_v1");
        assert!(matches!(store.checkout(), Err(StoreError::EmptyCart)));
    }

    #[test]
    fn test_checkout_clears() {
        let catalog = demo_catalog();
        let mut store = CartStore::open(MemoryStorage::new(), "cart_v1");
        store.add_line(id(1), 2).unwrap();
        store.checkout().unwrap();
        assert_eq!(store.item_count(), 0);
        assert_eq!(store.total(&catalog), Price::ZERO);
    }

    #[test]
    fn test_persist_failure_keeps_memory_state() {
        let mut store = CartStore::open(BrokenStorage, "cart_v1");
        let result = store.add_line(id(1), 1);
        assert!(matches!(result, Err(StoreError::StorageUnavailable(_))));
        assert_eq!(store.state().quantity(id(1)), Some(1));
    }

    #[test]
    fn test_invalid_quantity_rejected_before_persist() {
        let mut store = CartStore::open(MemoryStorage::new(), "cart_v1");
        assert!(matches!(
            store.add_line(id(1), 0),
            Err(StoreError::InvalidArgument(_))
        ));
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_demo_scenario_end_to_end() {
        let catalog = demo_catalog();
        let mut store = CartStore::open(MemoryStorage::new(), "cart_v1");

        store.add_line(id(1), 2).unwrap();
        store.add_line(id(2), 1).unwrap();
        assert_eq!(store.item_count(), 3);
        assert_eq!(store.total(&catalog).to_string(), "$198.98");

        store.remove_line(id(1)).unwrap();
        assert_eq!(store.item_count(), 1);
        assert_eq!(store.total(&catalog).to_string(), "$79.00");

        store.checkout().unwrap();
        assert_eq!(store.item_count(), 0);
        assert_eq!(store.total(&catalog).to_string(), "$0.00");
    }
}
