//! Corner Shop Core - Shared types library.
//!
//! This crate provides the common types used across all Corner Shop
//! components:
//! - `store` - Cart state store with pluggable persistence
//! - `storefront` - Terminal storefront (product grid, cart, checkout)
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no
//! persistence, no rendering. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product ids, prices, the catalog, and cart state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
