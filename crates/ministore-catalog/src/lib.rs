//! # ministore-catalog: Catalog Fetch Layer
//!
//! The I/O side of ministore: one HTTP GET against the remote catalog and
//! the thunk that turns its outcome into pending/fulfilled/rejected actions
//! on a [`Store`](ministore_core::Store).
//!
//! ## Fetch Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Fetch Lifecycle                           │
//! │                                                                         │
//! │  fetch_catalog(store, source)                                           │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  dispatch(FetchPending) ──────────────► status = Loading                │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  GET {base_url}/products                                                │
//! │        │                                                                │
//! │   ┌────┴─────────────────────┐                                          │
//! │   ▼                          ▼                                          │
//! │  Ok(products)               Err(e)                                      │
//! │   │                          │                                          │
//! │   ▼                          ▼                                          │
//! │  dispatch(FetchFulfilled)   error! log + dispatch(FetchRejected)        │
//! │  status = Succeeded         status = Failed                             │
//! │  stock = products           (message not stored in state)               │
//! │                                                                         │
//! │  Exactly one network call per invocation. No retry, no backoff.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod client;
pub mod error;
pub mod thunk;

pub use client::{CatalogClient, CatalogConfig, CatalogSource, DEFAULT_CATALOG_URL};
pub use error::{CatalogError, CatalogResult};
pub use thunk::{fetch_catalog, fetch_catalog_if_idle};
