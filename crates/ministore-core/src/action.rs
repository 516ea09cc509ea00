//! # Actions
//!
//! The closed union of every action the reducer understands.
//!
//! ## Why a Closed Union?
//! Dynamic `{type, payload}` objects become an enum so the reducer match is
//! exhaustive: adding a variant without handling it is a compile error.
//!
//! ## Serialization
//! Uses serde's adjacently tagged enum so the wire form is the familiar
//! discriminated action object:
//! ```json
//! { "type": "addProduct", "payload": { "id": 1, "title": "Product 1" } }
//! { "type": "toggleCart" }
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{Product, User};

/// An action dispatched into the cart store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    // =========================================================================
    // Cart Actions
    // =========================================================================
    /// Insert the product at quantity 1, or increment the existing item.
    AddProduct(Product),

    /// Remove the item with this id entirely, regardless of quantity.
    /// Missing id is a no-op.
    RemoveProduct(u64),

    /// Flip the cart panel open/closed.
    ToggleCart,

    /// Empty the cart.
    ClearProducts,

    // =========================================================================
    // Search Actions
    // =========================================================================
    /// Replace the search term verbatim. An empty string clears the filter.
    SetSearchTerm(String),

    // =========================================================================
    // User Actions
    // =========================================================================
    /// Replace the stored user wholesale (no merge).
    AddUser(User),

    /// Set the login flag.
    VerifyLogin(bool),

    // =========================================================================
    // Fetch Lifecycle Actions
    // =========================================================================
    // Dispatched by the catalog thunk, never by the view layer directly.
    /// A catalog fetch started.
    FetchPending,

    /// The catalog fetch succeeded; payload replaces `stock`.
    FetchFulfilled(Vec<Product>),

    /// The catalog fetch failed. The message is for dispatch-boundary
    /// observability only; the reducer records just the failed status.
    FetchRejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_encodes_as_discriminated_object() {
        let json = serde_json::to_value(Action::SetSearchTerm("prod".into())).unwrap();
        assert_eq!(json["type"], "setSearchTerm");
        assert_eq!(json["payload"], "prod");

        let json = serde_json::to_value(Action::ToggleCart).unwrap();
        assert_eq!(json["type"], "toggleCart");
    }

    #[test]
    fn test_action_round_trips() {
        let action = Action::AddProduct(Product {
            id: 1,
            title: "Product 1".into(),
            price: 10.0,
            image: None,
        });

        let json = serde_json::to_string(&action).unwrap();
        let decoded: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, action);
    }
}
