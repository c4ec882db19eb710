//! Corner Shop Store - cart state with pluggable persistence.
//!
//! The [`CartStore`] owns a [`CartState`](corner_shop_core::CartState) and a
//! durable key-value slot. Every mutation goes through the store so the
//! in-memory state and the persisted blob move together; a reader observes
//! either the pre- or the post-mutation value, never a partial write.
//!
//! The slot itself is abstracted behind [`StorageSlot`] so the same store
//! works against a JSON file on disk or an in-memory map in tests. The
//! storage key is configurable; deployments that want separate carts (the
//! demo shipped with `cart_v1` and `cart_v2`) point two stores at different
//! keys instead of duplicating the logic.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod cart_store;
mod error;
mod storage;

pub use cart_store::CartStore;
pub use error::StoreError;
pub use storage::{JsonFileStorage, MemoryStorage, StorageError, StorageSlot};
