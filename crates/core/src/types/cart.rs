//! Cart state: the mapping from product id to requested quantity.
//!
//! Every operation here is a pure transform over the mapping; persistence is
//! layered on top in the `store` crate. The single invariant is that a stored
//! quantity is always at least 1 - setting a quantity to zero removes the
//! line instead.
//!
//! There is no upper bound on quantity and no inventory concept; arbitrarily
//! large requests are accepted as-is.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::id::{InvalidProductId, ProductId};
use super::price::Price;
use super::product::Catalog;

/// Errors from cart mutations. The mutation is rejected and state is
/// unchanged.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartError {
    /// The product id is not a positive integer.
    #[error(transparent)]
    InvalidProductId(#[from] InvalidProductId),

    /// An added quantity must be at least 1.
    #[error("quantity to add must be at least 1")]
    InvalidQuantity,
}

/// The cart: product id -> requested quantity.
///
/// Serializes as a JSON object whose keys are decimal string product ids and
/// whose values are positive integers, e.g. `{"1":2,"4":1}`.
///
/// ## Invariant
///
/// Every stored quantity is >= 1. Zero or negative never enters the map:
/// [`CartState::set_quantity`] with 0 removes the line, and
/// [`CartState::add_line`] rejects a zero quantity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartState(BTreeMap<ProductId, u32>);

impl CartState {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add `quantity` of a product, incrementing any existing line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] if `quantity` is 0; the cart is
    /// unchanged.
    pub fn add_line(&mut self, id: ProductId, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        let line = self.0.entry(id).or_insert(0);
        *line = line.saturating_add(quantity);
        Ok(())
    }

    /// Overwrite a line's quantity. A quantity of 0 removes the line,
    /// exactly like [`CartState::remove_line`].
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_line(id);
        } else {
            self.0.insert(id, quantity);
        }
    }

    /// Remove a line. Removing an absent line is a no-op, not an error.
    pub fn remove_line(&mut self, id: ProductId) {
        self.0.remove(&id);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Drop any lines whose stored quantity is 0.
    ///
    /// A well-formed blob never contains such lines, but a hand-edited one
    /// might; they are removed on load rather than violating the invariant.
    /// Returns the number of lines dropped.
    pub fn prune_empty_lines(&mut self) -> usize {
        let before = self.0.len();
        self.0.retain(|_, &mut quantity| quantity > 0);
        before - self.0.len()
    }

    /// Sum of all quantities across lines, independent of the catalog.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.0.values().map(|&quantity| u64::from(quantity)).sum()
    }

    /// Sum of `unit_price * quantity` over all lines that resolve in the
    /// catalog. Lines referencing an unknown product id are silently
    /// skipped; the catalog is the source of truth, not the cart.
    #[must_use]
    pub fn total(&self, catalog: &Catalog) -> Price {
        self.0
            .iter()
            .filter_map(|(&id, &quantity)| {
                catalog.unit_price(id).map(|price| price.times(quantity))
            })
            .sum()
    }

    /// The stored quantity for a product, if a line exists.
    #[must_use]
    pub fn quantity(&self, id: ProductId) -> Option<u32> {
        self.0.get(&id).copied()
    }

    /// Iterate lines as `(product_id, quantity)` pairs.
    pub fn lines(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.0.iter().map(|(&id, &quantity)| (id, quantity))
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
