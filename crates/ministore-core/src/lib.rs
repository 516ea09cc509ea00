//! # ministore-core: Pure State Logic for ministore
//!
//! This crate is the **heart** of ministore. It contains the cart state
//! container as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      ministore Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      View Layer (external)                      │   │
//! │  │    Product List ──► Cart Panel ──► Search Box ──► Login Form   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ dispatch(Action) / select(..)          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ministore-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  reducer  │  │   store   │  │ selector  │  │   │
//! │  │   │  Product  │  │  reduce   │  │   Store   │  │ filtered  │  │   │
//! │  │   │ CartItem  │  │ update_   │  │ dispatch  │  │   stock   │  │   │
//! │  │   │   User    │  │   items   │  │  select   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE TRANSITIONS                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ministore-catalog (Fetch Layer)                    │   │
//! │  │        HTTP GET /products, pending/fulfilled/rejected           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartItem, User, FetchStatus)
//! - [`action`] - The closed action union dispatched into the reducer
//! - [`state`] - The CartState snapshot type
//! - [`reducer`] - The pure transition function and quantity algorithm
//! - [`store`] - The dependency-injected state container
//! - [`selector`] - Derived read accessors (search filter, totals)
//! - [`validation`] - Input validation for user registration
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: `reduce(state, action)` is deterministic and total
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Closed Action Union**: every dispatchable action is an enum variant,
//!    so the reducer match is exhaustive by construction
//! 4. **Total Reducer**: malformed payloads are no-ops, never panics or errors
//!
//! ## Example Usage
//!
//! ```rust
//! use ministore_core::{Action, Product, Store};
//!
//! let store = Store::new();
//! store.dispatch(Action::AddProduct(Product {
//!     id: 1,
//!     title: "Product 1".into(),
//!     price: 10.0,
//!     image: None,
//! }));
//!
//! assert_eq!(store.select(|s| s.products[0].quantity), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod action;
pub mod error;
pub mod reducer;
pub mod selector;
pub mod state;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use ministore_core::Store` instead of
// `use ministore_core::store::Store`

pub use action::Action;
pub use error::ValidationError;
pub use reducer::{reduce, update_items};
pub use state::CartState;
pub use store::Store;
pub use types::{CartItem, FetchStatus, Product, User};
