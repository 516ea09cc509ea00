//! # Selectors
//!
//! Derived read accessors over [`CartState`], consumed by the view layer.
//!
//! Selectors never mutate and never cache: the filtered view is recomputed
//! eagerly from its inputs on every call.

use crate::state::CartState;
use crate::types::Product;

/// Filters a catalog by case-insensitive title containment.
///
/// An empty `term` yields the full stock.
pub fn filter_products<'a>(stock: &'a [Product], term: &str) -> Vec<&'a Product> {
    let needle = term.to_lowercase();
    stock
        .iter()
        .filter(|product| product.title.to_lowercase().contains(&needle))
        .collect()
}

impl CartState {
    /// The stock entries whose title matches the current search term.
    pub fn filtered_stock(&self) -> Vec<&Product> {
        filter_products(&self.stock, &self.search_term)
    }

    /// Total quantity across all cart items.
    pub fn cart_quantity(&self) -> i64 {
        self.products.iter().map(|item| item.quantity).sum()
    }

    /// Number of distinct items in the cart.
    pub fn cart_item_count(&self) -> usize {
        self.products.len()
    }
}
