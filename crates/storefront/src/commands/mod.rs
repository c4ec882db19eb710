//! Subcommand handlers: one per storefront event.

pub mod cart;
pub mod grid;
