//! Cart event handlers.
//!
//! Each handler maps one user event onto the `CartStore` contract and
//! re-renders from the store's state afterwards; no cart logic lives here.
//! A persistence failure is downgraded to a warning - the mutation already
//! applies in memory and the session keeps working, it just may not survive
//! the next run.

use corner_shop_core::{CartError, Catalog, ProductId};
use corner_shop_store::{CartStore, JsonFileStorage, StoreError};

use crate::render::{self, CartView};

type Store = CartStore<JsonFileStorage>;

/// Render the cart contents.
pub fn show(store: &Store, catalog: &Catalog) {
    render::cart(&CartView::build(store.state(), catalog));
}

/// Add `quantity` of a product to the cart.
///
/// # Errors
///
/// Returns [`StoreError::InvalidArgument`] for a non-positive product id or
/// a zero quantity.
pub fn add(
    store: &mut Store,
    product_id: i64,
    quantity: u32,
) -> Result<(), StoreError> {
    let id = parse_id(product_id)?;
    tolerate_storage_failure(store.add_line(id, quantity))?;
    render::toast("Added to cart");
    render::cart_count(store.item_count());
    Ok(())
}

/// Overwrite a line's quantity; 0 removes the line.
///
/// # Errors
///
/// Returns [`StoreError::InvalidArgument`] for a non-positive product id.
pub fn set_quantity(
    store: &mut Store,
    catalog: &Catalog,
    product_id: i64,
    quantity: u32,
) -> Result<(), StoreError> {
    let id = parse_id(product_id)?;
    tolerate_storage_failure(store.set_quantity(id, quantity))?;
    show(store, catalog);
    Ok(())
}

/// Remove a line from the cart (removing an absent line is a no-op).
///
/// # Errors
///
/// Returns [`StoreError::InvalidArgument`] for a non-positive product id.
pub fn remove(store: &mut Store, catalog: &Catalog, product_id: i64) -> Result<(), StoreError> {
    let id = parse_id(product_id)?;
    tolerate_storage_failure(store.remove_line(id))?;
    show(store, catalog);
    Ok(())
}

/// Checkout: clear the cart to simulate order submission. An empty cart is
/// reported to the user and nothing changes.
pub fn checkout(store: &mut Store, catalog: &Catalog) {
    match store.checkout() {
        Ok(()) => {}
        Err(StoreError::EmptyCart) => {
            render::toast("Your cart is empty.");
            return;
        }
        Err(e) => tracing::warn!("Cart not persisted: {e}"),
    }
    show(store, catalog);
    render::toast("Thanks! Your order has been placed (demo)");
}

fn parse_id(raw: i64) -> Result<ProductId, StoreError> {
    Ok(ProductId::new(raw).map_err(CartError::from)?)
}

/// Apply a mutation result, downgrading a persistence failure to a warning.
fn tolerate_storage_failure(result: Result<(), StoreError>) -> Result<(), StoreError> {
    match result {
        Err(StoreError::StorageUnavailable(e)) => {
            tracing::warn!("Cart not persisted: {e}");
            Ok(())
        }
        other => other,
    }
}
