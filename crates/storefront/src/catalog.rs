//! Catalog loading.
//!
//! The catalog is static for the session: either a JSON file named by
//! `CORNER_SHOP_CATALOG`, or the built-in sample products when no file is
//! configured. A configured file that is missing or malformed is a startup
//! error, not something to silently paper over.

use std::path::Path;

use corner_shop_core::{Catalog, CatalogError, Product};
use thiserror::Error;

use crate::config::StorefrontConfig;

/// The sample products shipped with the demo.
const SAMPLE_CATALOG: &str = r#"[
  {"id": 1, "title": "Wireless Headphones", "price": "59.99", "image_url": "https://picsum.photos/seed/p1/600/400"},
  {"id": 2, "title": "Classic Sneakers",    "price": "79.00", "image_url": "https://picsum.photos/seed/p2/600/400"},
  {"id": 3, "title": "Smart Watch",         "price": "129.50", "image_url": "https://picsum.photos/seed/p3/600/400"},
  {"id": 4, "title": "Backpack",            "price": "39.99", "image_url": "https://picsum.photos/seed/p4/600/400"},
  {"id": 5, "title": "Sunglasses",          "price": "24.99", "image_url": "https://picsum.photos/seed/p5/600/400"},
  {"id": 6, "title": "Coffee Mug",          "price": "12.49", "image_url": "https://picsum.photos/seed/p6/600/400"}
]"#;

/// Errors loading the catalog at startup.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The configured catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The catalog JSON does not parse as a product list.
    #[error("malformed catalog {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    /// The product list itself is invalid (e.g. duplicate ids).
    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

/// Load the session catalog per configuration.
///
/// # Errors
///
/// Returns [`CatalogLoadError`] if a configured catalog file is unreadable,
/// malformed, or contains duplicate product ids.
pub fn load(config: &StorefrontConfig) -> Result<Catalog, CatalogLoadError> {
    match &config.catalog_path {
        Some(path) => {
            tracing::info!("Loading catalog from {}", path.display());
            from_file(path)
        }
        None => parse(SAMPLE_CATALOG, "<built-in sample>"),
    }
}

fn from_file(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse(&json, &path.display().to_string())
}

fn parse(json: &str, path: &str) -> Result<Catalog, CatalogLoadError> {
    let products: Vec<Product> =
        serde_json::from_str(json).map_err(|source| CatalogLoadError::Parse {
            path: path.to_string(),
            source,
        })?;
    Ok(Catalog::new(products)?)
}
