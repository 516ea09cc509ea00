//! # Store
//!
//! The dependency-injected state container holding the single [`CartState`].
//!
//! ## Thread Safety
//! The state is wrapped in `Arc<Mutex<T>>` because:
//! 1. The view layer and the fetch thunk may dispatch concurrently
//! 2. Only one dispatch should transition the state at a time
//! 3. Cloning the store shares the same underlying state
//!
//! ## Why Not RwLock?
//! Dispatches are quick and most accesses transition state. A RwLock would
//! add complexity with minimal benefit.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Store Operations                                  │
//! │                                                                         │
//! │  Caller                  Store                      State Change        │
//! │  ──────                  ─────                      ────────────        │
//! │                                                                         │
//! │  dispatch(action) ─────► lock, reduce, replace ───► next snapshot       │
//! │  select(|s| ...) ──────► lock, read closure ──────► (read only)         │
//! │  snapshot() ───────────► lock, clone ─────────────► (read only)         │
//! │                                                                         │
//! │  NOTE: dispatches run to completion under the lock, so reducer          │
//! │        invocations never interleave.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use crate::action::Action;
use crate::reducer::reduce;
use crate::state::CartState;

/// The cart store: the only owner of mutable state in the system.
///
/// Constructed explicitly at application start and passed to whatever needs
/// to dispatch or read, rather than living behind a global.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: Arc<Mutex<CartState>>,
}

impl Store {
    /// Creates a store with empty initial state.
    pub fn new() -> Self {
        Store::with_state(CartState::new())
    }

    /// Creates a store preloaded with the given state.
    ///
    /// ## Usage
    /// Useful in tests and for view layers that hydrate from a snapshot:
    /// ```rust,ignore
    /// let store = Store::with_state(CartState { is_open: true, ..CartState::new() });
    /// ```
    pub fn with_state(initial: CartState) -> Self {
        Store {
            state: Arc::new(Mutex::new(initial)),
        }
    }

    /// Dispatches an action through the reducer.
    ///
    /// Runs synchronously to completion; the next dispatch observes the
    /// state this one produced.
    pub fn dispatch(&self, action: Action) {
        let mut state = self.state.lock().expect("Store mutex poisoned");
        *state = reduce(&state, action);
    }

    /// Executes a closure with read access to the current state.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let is_open = store.select(|s| s.is_open);
    /// let titles: Vec<String> =
    ///     store.select(|s| s.filtered_stock().iter().map(|p| p.title.clone()).collect());
    /// ```
    pub fn select<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartState) -> R,
    {
        let state = self.state.lock().expect("Store mutex poisoned");
        f(&state)
    }

    /// Returns an owned copy of the whole state.
    pub fn snapshot(&self) -> CartState {
        self.select(CartState::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FetchStatus, Product};

    fn test_product(id: u64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price: 10.0,
            image: None,
        }
    }

    #[test]
    fn test_dispatch_transitions_state() {
        let store = Store::new();
        store.dispatch(Action::AddProduct(test_product(1)));
        store.dispatch(Action::AddProduct(test_product(1)));

        assert_eq!(store.select(|s| s.products[0].quantity), 2);
    }

    #[test]
    fn test_clones_share_state() {
        let store = Store::new();
        let handle = store.clone();

        handle.dispatch(Action::ToggleCart);
        assert!(store.select(|s| s.is_open));
    }

    #[test]
    fn test_with_state_preloads() {
        let initial = CartState {
            is_open: true,
            ..CartState::new()
        };

        let store = Store::with_state(initial);
        assert!(store.select(|s| s.is_open));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = Store::new();
        let before = store.snapshot();

        store.dispatch(Action::FetchPending);

        assert_eq!(before.status, FetchStatus::Idle);
        assert_eq!(store.snapshot().status, FetchStatus::Loading);
    }
}
