//! # Domain Types
//!
//! Core domain types for the cart state container.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartItem     │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │   │  Product fields │   │  name           │       │
//! │  │  title          │   │  + quantity ≥ 1 │   │  email          │       │
//! │  │  price          │   │                 │   │  password       │       │
//! │  │  image          │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │   FetchStatus   │    Idle ──► Loading ──► Succeeded                 │
//! │  │  ─────────────  │                  └────► Failed                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! All types use camelCase field names so state snapshots and catalog
//! payloads match the JSON the remote API and a JS view layer speak.

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A product from the remote catalog.
///
/// Decoded directly from the catalog endpoint's JSON array. The API sends
/// more fields than we need (description, category, rating); unknown fields
/// are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique catalog identifier.
    pub id: u64,

    /// Display title shown in the product list and cart.
    pub title: String,

    /// Price as the API reports it. Display-only: this crate performs no
    /// monetary arithmetic.
    #[serde(default)]
    pub price: f64,

    /// Optional product image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

// =============================================================================
// Cart Item
// =============================================================================

/// An item in the shopping cart: a product plus its quantity.
///
/// ## Invariants
/// - `quantity` is always ≥ 1; an item whose quantity would reach 0 is
///   removed from the cart instead (absence encodes quantity 0)
/// - The product fields are frozen at the time of adding; a later catalog
///   refresh does not rewrite items already in the cart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product identifier (matches the catalog id).
    pub id: u64,

    /// Title at time of adding (frozen).
    pub title: String,

    /// Price at time of adding (frozen).
    #[serde(default)]
    pub price: f64,

    /// Image URL at time of adding (frozen).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Quantity in cart, always ≥ 1.
    pub quantity: i64,
}

impl CartItem {
    /// Creates a cart item from a product and a starting quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// The registered user.
///
/// Replaced wholesale on every `AddUser` action, never merged.
///
/// ## Security Note
/// The password is stored in plaintext because that is what the consuming
/// flow expects. This is NOT an authentication system and must not be
/// treated as one; see DESIGN.md.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    pub password: String,
}

// =============================================================================
// Fetch Status
// =============================================================================

/// Lifecycle of the catalog fetch.
///
/// ## Transitions
/// Only the fetch lifecycle actions move this field:
/// `FetchPending` → `Loading`, `FetchFulfilled` → `Succeeded`,
/// `FetchRejected` → `Failed`. The `Idle` state gates the first fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    /// No fetch has been attempted yet.
    #[default]
    Idle,

    /// A fetch is in flight.
    Loading,

    /// The last fetch completed and `stock` holds its payload.
    Succeeded,

    /// The last fetch failed; retry is up to the caller.
    Failed,
}

impl FetchStatus {
    /// Returns true if a fetch may be started (nothing attempted yet).
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchStatus::Idle)
    }
}

impl std::fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FetchStatus::Idle => "idle",
            FetchStatus::Loading => "loading",
            FetchStatus::Succeeded => "succeeded",
            FetchStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}
