//! Store-level error taxonomy.

use corner_shop_core::CartError;
use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by [`CartStore`](crate::CartStore) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A mutation was called with a bad product id or quantity. The cart is
    /// unchanged.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] CartError),

    /// The persistence slot could not be written. The mutation has already
    /// been applied in memory, so the session keeps working, but state may
    /// not survive a restart.
    #[error("cart storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),

    /// Checkout was invoked with no lines in the cart. Nothing changed.
    #[error("cart is empty")]
    EmptyCart,
}
