//! The product grid (the storefront's landing view).

use corner_shop_core::Catalog;

use crate::render;

/// Render the product grid.
pub fn show(catalog: &Catalog) {
    render::product_grid(catalog);
}
