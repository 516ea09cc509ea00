//! # Cart State
//!
//! The single state snapshot the store owns and the reducer transitions.
//!
//! ## Lifecycle
//! Created once at application start with empty defaults, transitioned only
//! through [`reduce`](crate::reduce) for the life of the session, discarded
//! on process exit. No persistence.
//!
//! ## Invariants
//! - `products` holds at most one item per id, in insertion order
//! - every item quantity is ≥ 1 (absence encodes quantity 0)
//! - `status` moves only via the fetch lifecycle actions
//! - `user` is replaced wholesale, never merged

use serde::{Deserialize, Serialize};

use crate::types::{CartItem, FetchStatus, Product, User};

/// The whole cart state, exposed to the view layer as a read-only snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    /// Items currently in the cart, in insertion order.
    pub products: Vec<CartItem>,

    /// Catalog fetched from the remote source.
    pub stock: Vec<Product>,

    /// Catalog fetch lifecycle.
    pub status: FetchStatus,

    /// Cart panel visibility.
    pub is_open: bool,

    /// Case-insensitive filter applied to `stock`.
    pub search_term: String,

    /// Last registered user, if any.
    pub user: Option<User>,

    /// Login flag.
    pub is_login: bool,
}

impl CartState {
    /// Creates the initial state: empty cart, empty stock, idle fetch.
    pub fn new() -> Self {
        CartState::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_defaults() {
        let state = CartState::new();

        assert!(state.products.is_empty());
        assert!(state.stock.is_empty());
        assert_eq!(state.status, FetchStatus::Idle);
        assert!(!state.is_open);
        assert_eq!(state.search_term, "");
        assert_eq!(state.user, None);
        assert!(!state.is_login);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let json = serde_json::to_value(CartState::new()).unwrap();

        assert_eq!(json["status"], "idle");
        assert_eq!(json["isOpen"], false);
        assert_eq!(json["searchTerm"], "");
        assert_eq!(json["isLogin"], false);
    }
}
