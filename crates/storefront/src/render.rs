//! Terminal rendering of the product grid, the cart, and toasts.
//!
//! View structs are built from cart state plus the catalog; all formatting
//! happens here and no business logic does. This is the analog of the DOM
//! fragments the browser demo re-rendered after every mutation.

use corner_shop_core::{CartState, Catalog, ProductId};

/// One cart line prepared for display.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub id: ProductId,
    pub title: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// Cart display data.
#[derive(Debug, Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub subtotal: String,
    pub item_count: u64,
}

impl CartView {
    /// Build the view for the current state. Lines whose product id does
    /// not resolve in the catalog are not displayed (and contribute nothing
    /// to the subtotal), though they still count toward `item_count`.
    #[must_use]
    pub fn build(state: &CartState, catalog: &Catalog) -> Self {
        let lines = state
            .lines()
            .filter_map(|(id, quantity)| {
                catalog.get(id).map(|product| CartLineView {
                    id,
                    title: product.title.clone(),
                    quantity,
                    unit_price: product.price.to_string(),
                    line_total: product.price.times(quantity).to_string(),
                })
            })
            .collect();

        Self {
            lines,
            subtotal: state.total(catalog).to_string(),
            item_count: state.item_count(),
        }
    }
}

/// Render the product grid with the product count.
pub fn product_grid(catalog: &Catalog) {
    println!("Products ({})", catalog.len());
    println!("{:>4}  {:<24} {:>9}  IMAGE", "ID", "TITLE", "PRICE");
    for product in catalog {
        println!(
            "{:>4}  {:<24} {:>9}  {}",
            product.id, product.title, product.price, product.image_url
        );
    }
}

/// Render the cart contents and subtotal.
pub fn cart(view: &CartView) {
    if view.lines.is_empty() && view.item_count == 0 {
        println!("Your cart is empty.");
        println!("Total: $0.00");
        return;
    }

    println!("{:>4}  {:<24} {:>4} {:>10} {:>10}", "ID", "TITLE", "QTY", "EACH", "TOTAL");
    for line in &view.lines {
        println!(
            "{:>4}  {:<24} {:>4} {:>10} {:>10}",
            line.id, line.title, line.quantity, line.unit_price, line.line_total
        );
    }
    println!("Items: {}", view.item_count);
    println!("Total: {}", view.subtotal);
}

/// Render the cart count badge.
pub fn cart_count(count: u64) {
    println!("Cart: {count} item(s)");
}

/// Print a transient confirmation message.
pub fn toast(message: &str) {
    println!("* {message}");
}
