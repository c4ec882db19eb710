//! Corner Shop - terminal demo storefront.
//!
//! # Usage
//!
//! ```bash
//! # Show the product grid
//! corner-shop grid
//!
//! # Show the cart
//! corner-shop cart
//!
//! # Add two of product 1
//! corner-shop add 1 -q 2
//!
//! # Set product 1's quantity (0 removes the line)
//! corner-shop set 1 -q 3
//!
//! # Remove product 1
//! corner-shop remove 1
//!
//! # Place the order (clears the cart)
//! corner-shop checkout
//! ```
//!
//! The cart persists under `CORNER_SHOP_DATA_DIR` (default `data/`) using
//! the storage key `CORNER_SHOP_CART_KEY` (default `cart_v1`).

#![cfg_attr(not(test), forbid(unsafe_code))]
// The storefront is a terminal UI; stdout is its render target.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use corner_shop_store::{CartStore, JsonFileStorage};

mod catalog;
mod commands;
mod config;
mod render;

use config::StorefrontConfig;

#[derive(Parser)]
#[command(name = "corner-shop")]
#[command(author, version, about = "Corner Shop terminal storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the product grid
    Grid,
    /// Show the cart contents and total
    Cart,
    /// Add a product to the cart
    Add {
        /// Product id from the grid
        product_id: i64,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set a line's quantity (0 removes the line)
    Set {
        /// Product id from the grid
        product_id: i64,

        /// New quantity
        #[arg(short, long)]
        quantity: u32,
    },
    /// Remove a line from the cart
    Remove {
        /// Product id from the grid
        product_id: i64,
    },
    /// Place the order (clears the cart)
    Checkout,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let catalog = catalog::load(&config)?;
    let storage = JsonFileStorage::new(&config.data_dir);
    let mut store = CartStore::open(storage, config.cart_key.clone());

    match cli.command {
        Commands::Grid => commands::grid::show(&catalog),
        Commands::Cart => commands::cart::show(&store, &catalog),
        Commands::Add {
            product_id,
            quantity,
        } => commands::cart::add(&mut store, product_id, quantity)?,
        Commands::Set {
            product_id,
            quantity,
        } => commands::cart::set_quantity(&mut store, &catalog, product_id, quantity)?,
        Commands::Remove { product_id } => {
            commands::cart::remove(&mut store, &catalog, product_id)?;
        }
        Commands::Checkout => commands::cart::checkout(&mut store, &catalog),
    }
    Ok(())
}
