//! # Reducer
//!
//! The pure transition function over [`CartState`] and the quantity-update
//! algorithm behind the add/remove paths.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Reducer Transitions                                │
//! │                                                                         │
//! │  View Action               Variant                 State Change         │
//! │  ───────────               ───────                 ────────────         │
//! │                                                                         │
//! │  Click "Add to Cart" ────► AddProduct(p) ────────► quantity +1          │
//! │  Click "Remove" ─────────► RemoveProduct(id) ────► item dropped         │
//! │  Click cart icon ────────► ToggleCart ───────────► is_open flipped      │
//! │  Type in search box ─────► SetSearchTerm(s) ─────► search_term = s      │
//! │  Checkout complete ──────► ClearProducts ────────► products emptied     │
//! │  Register form ──────────► AddUser(u) ───────────► user replaced        │
//! │  Login form ─────────────► VerifyLogin(b) ───────► is_login = b         │
//! │                                                                         │
//! │  Thunk start ────────────► FetchPending ─────────► status = Loading     │
//! │  Thunk success ──────────► FetchFulfilled(ps) ───► stock = ps           │
//! │  Thunk failure ──────────► FetchRejected(msg) ───► status = Failed      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Totality
//! Every transition is a total function over well-typed inputs. Malformed
//! payloads (an id that matches nothing, a negative delta with no matching
//! item) are no-ops, never errors or panics. Failures belong to the fetch
//! boundary, not here.

use tracing::debug;

use crate::action::Action;
use crate::state::CartState;
use crate::types::{CartItem, FetchStatus, Product};

/// Applies an action to a state snapshot, returning the next state.
///
/// The input is never mutated; callers keep their snapshot and receive a
/// fresh one. Dispatches are serialized by the store, so transitions run to
/// completion without interleaving.
pub fn reduce(state: &CartState, action: Action) -> CartState {
    let mut next = state.clone();

    match action {
        Action::AddProduct(product) => {
            debug!(id = product.id, "addProduct");
            next.products = update_items(Some(&state.products), &product, 1);
        }
        Action::RemoveProduct(id) => {
            debug!(id, "removeProduct");
            // Removal is unconditional on quantity; missing id is a no-op.
            next.products.retain(|item| item.id != id);
        }
        Action::ToggleCart => {
            next.is_open = !state.is_open;
        }
        Action::ClearProducts => {
            next.products.clear();
        }
        Action::SetSearchTerm(term) => {
            next.search_term = term;
        }
        Action::AddUser(user) => {
            // Wholesale replacement, no merge with any previous user.
            next.user = Some(user);
        }
        Action::VerifyLogin(flag) => {
            next.is_login = flag;
        }
        Action::FetchPending => {
            next.status = FetchStatus::Loading;
        }
        Action::FetchFulfilled(products) => {
            next.status = FetchStatus::Succeeded;
            next.stock = products;
        }
        Action::FetchRejected(message) => {
            debug!(%message, "fetchProducts rejected");
            // The message is surfaced to the caller by the thunk; state
            // records only the failed status.
            next.status = FetchStatus::Failed;
        }
    }

    next
}

/// Core quantity-update algorithm shared by the add/remove paths.
///
/// ## Behavior
/// - No matching id and `delta` > 0: append a new item with
///   `quantity = delta`
/// - Matching id: new quantity = existing + `delta`
///   - new quantity ≤ 0: the item is removed entirely
///   - otherwise: replaced in place (position preserved) with the stored
///     item's fields and the updated quantity — the `product` argument only
///     contributes its id on this path
/// - No matching id and `delta` ≤ 0: returns the input unchanged
///   (an empty sequence when the input is `None`)
///
/// The input sequence is never mutated; a new sequence is returned.
pub fn update_items(
    items: Option<&[CartItem]>,
    product: &Product,
    delta: i64,
) -> Vec<CartItem> {
    let items = items.unwrap_or(&[]);

    if let Some(position) = items.iter().position(|item| item.id == product.id) {
        let mut next: Vec<CartItem> = items.to_vec();
        let quantity = next[position].quantity + delta;

        if quantity <= 0 {
            next.remove(position);
        } else {
            next[position].quantity = quantity;
        }
        return next;
    }

    if delta > 0 {
        let mut next: Vec<CartItem> = items.to_vec();
        next.push(CartItem::from_product(product, delta));
        return next;
    }

    // No match and nothing to add.
    items.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::User;

    fn test_product(id: u64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price: 10.0,
            image: None,
        }
    }

    #[test]
    fn test_add_product_inserts_at_quantity_one() {
        let state = CartState::new();
        let next = reduce(&state, Action::AddProduct(test_product(1)));

        assert_eq!(next.products.len(), 1);
        assert_eq!(next.products[0].id, 1);
        assert_eq!(next.products[0].quantity, 1);
        // The input snapshot is untouched.
        assert!(state.products.is_empty());
    }

    #[test]
    fn test_add_product_increments_on_id_collision() {
        let mut state = CartState::new();
        for _ in 0..3 {
            state = reduce(&state, Action::AddProduct(test_product(1)));
        }

        assert_eq!(state.products.len(), 1);
        assert_eq!(state.products[0].quantity, 3);
    }

    #[test]
    fn test_remove_product_drops_item_regardless_of_quantity() {
        let mut state = CartState::new();
        state = reduce(&state, Action::AddProduct(test_product(1)));
        state = reduce(&state, Action::AddProduct(test_product(1)));
        assert_eq!(state.products[0].quantity, 2);

        let next = reduce(&state, Action::RemoveProduct(1));
        assert!(next.products.is_empty());
        assert!(!next.is_open);
    }

    #[test]
    fn test_remove_product_missing_id_is_noop() {
        let state = reduce(&CartState::new(), Action::AddProduct(test_product(1)));
        let next = reduce(&state, Action::RemoveProduct(99));

        assert_eq!(next, state);
    }

    #[test]
    fn test_toggle_cart_is_an_involution() {
        let state = CartState::new();

        let opened = reduce(&state, Action::ToggleCart);
        assert!(opened.is_open);

        let closed = reduce(&opened, Action::ToggleCart);
        assert_eq!(closed.is_open, state.is_open);
    }

    #[test]
    fn test_set_search_term_replaces_verbatim() {
        let state = reduce(&CartState::new(), Action::SetSearchTerm("searchTerm".into()));
        assert_eq!(state.search_term, "searchTerm");

        let cleared = reduce(&state, Action::SetSearchTerm(String::new()));
        assert_eq!(cleared.search_term, "");
    }

    #[test]
    fn test_clear_products_empties_cart() {
        let mut state = CartState::new();
        state = reduce(&state, Action::AddProduct(test_product(1)));
        state = reduce(&state, Action::AddProduct(test_product(2)));

        let next = reduce(&state, Action::ClearProducts);
        assert!(next.products.is_empty());
    }

    #[test]
    fn test_add_user_replaces_wholesale() {
        let first = User {
            name: "John Doe".into(),
            email: "john@example.com".into(),
            password: "password123".into(),
        };
        let state = reduce(&CartState::new(), Action::AddUser(first.clone()));
        assert_eq!(state.user, Some(first));

        let second = User {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            password: "hunter2hunter2".into(),
        };
        let next = reduce(&state, Action::AddUser(second.clone()));
        assert_eq!(next.user, Some(second));
    }

    #[test]
    fn test_verify_login_sets_flag() {
        let state = reduce(&CartState::new(), Action::VerifyLogin(true));
        assert!(state.is_login);

        let next = reduce(&state, Action::VerifyLogin(false));
        assert!(!next.is_login);
    }

    #[test]
    fn test_fetch_pending_moves_status_to_loading() {
        let state = reduce(&CartState::new(), Action::FetchPending);
        assert_eq!(state.status, FetchStatus::Loading);
    }

    #[test]
    fn test_fetch_fulfilled_replaces_stock() {
        let catalog = vec![test_product(1), test_product(2)];
        let state = reduce(&CartState::new(), Action::FetchFulfilled(catalog.clone()));

        assert_eq!(state.status, FetchStatus::Succeeded);
        assert_eq!(state.stock, catalog);
    }

    #[test]
    fn test_fetch_rejected_records_only_the_status() {
        let state = reduce(
            &CartState::new(),
            Action::FetchRejected("Network error, try later".into()),
        );

        assert_eq!(state.status, FetchStatus::Failed);
        // The message lives at the dispatch boundary, not in state.
        assert!(state.stock.is_empty());
    }

    // =========================================================================
    // update_items
    // =========================================================================

    #[test]
    fn test_update_items_handles_absent_input() {
        let product = test_product(1);
        let updated = update_items(None, &product, 1);

        assert_eq!(updated, vec![CartItem::from_product(&product, 1)]);
    }

    #[test]
    fn test_update_items_appends_new_item() {
        let product = test_product(1);
        let updated = update_items(Some(&[]), &product, 1);

        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].quantity, 1);
    }

    #[test]
    fn test_update_items_increments_existing() {
        let product = test_product(1);
        let items = vec![CartItem::from_product(&product, 1)];

        let updated = update_items(Some(&items), &product, 4);
        assert_eq!(updated[0].quantity, 5);
        // Input untouched.
        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn test_update_items_decrements_existing() {
        let product = test_product(1);
        let items = vec![CartItem::from_product(&product, 2)];

        let updated = update_items(Some(&items), &product, -1);
        assert_eq!(updated[0].quantity, 1);
    }

    #[test]
    fn test_update_items_removes_at_zero() {
        let items = vec![CartItem::from_product(&test_product(1), 1)];
        // A bare id is enough to decrement; stored fields are not consulted
        // from the descriptor.
        let partial = Product {
            id: 1,
            ..Product::default()
        };

        let updated = update_items(Some(&items), &partial, -1);
        assert!(updated.is_empty());
    }

    #[test]
    fn test_update_items_keeps_stored_fields_on_match() {
        let items = vec![CartItem::from_product(&test_product(1), 1)];
        let partial = Product {
            id: 1,
            ..Product::default()
        };

        let updated = update_items(Some(&items), &partial, 1);
        assert_eq!(updated[0].title, "Product 1");
        assert_eq!(updated[0].price, 10.0);
        assert_eq!(updated[0].quantity, 2);
    }

    #[test]
    fn test_update_items_preserves_position() {
        let items = vec![
            CartItem::from_product(&test_product(1), 1),
            CartItem::from_product(&test_product(2), 1),
            CartItem::from_product(&test_product(3), 1),
        ];

        let updated = update_items(Some(&items), &test_product(2), 2);
        assert_eq!(updated[1].id, 2);
        assert_eq!(updated[1].quantity, 3);
        assert_eq!(updated.len(), 3);
    }

    #[test]
    fn test_update_items_negative_delta_without_match_is_noop() {
        let items = vec![CartItem::from_product(&test_product(1), 1)];

        let updated = update_items(Some(&items), &test_product(9), -1);
        assert_eq!(updated, items);

        let updated = update_items(None, &test_product(9), -1);
        assert!(updated.is_empty());
    }
}
