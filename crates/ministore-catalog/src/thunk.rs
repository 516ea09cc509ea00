//! # Fetch Thunk
//!
//! Drives the pending/fulfilled/rejected lifecycle: one catalog fetch per
//! invocation, each outcome dispatched into the store.
//!
//! The thunk does not retry and does not cancel: a failed invocation leaves
//! `status == Failed` and it is up to the caller to trigger a new one
//! (normally gated by [`fetch_catalog_if_idle`]).

use ministore_core::{Action, Product, Store};
use tracing::{debug, error};

use crate::client::CatalogSource;
use crate::error::CatalogResult;

/// Fetches the catalog and feeds lifecycle actions into the store.
///
/// ## Dispatch Sequence
/// 1. `FetchPending` — immediately, before any I/O
/// 2. one `fetch_products` call on the source
/// 3. `FetchFulfilled(products)` on success, or `FetchRejected(message)` on
///    failure (diagnostic logged here; state keeps only the status)
///
/// The fetched products are also returned so the caller can react without
/// re-reading state; the error is surfaced the same way.
pub async fn fetch_catalog<S: CatalogSource>(
    store: &Store,
    source: &S,
) -> CatalogResult<Vec<Product>> {
    store.dispatch(Action::FetchPending);

    match source.fetch_products().await {
        Ok(products) => {
            store.dispatch(Action::FetchFulfilled(products.clone()));
            Ok(products)
        }
        Err(err) => {
            error!(error = %err, "catalog fetch failed");
            store.dispatch(Action::FetchRejected(err.to_string()));
            Err(err)
        }
    }
}

/// Fetches the catalog only when no fetch has been attempted yet.
///
/// Mirrors the `status == idle` gate the consuming view applies before the
/// first fetch. Returns `None` when the gate skipped the fetch.
pub async fn fetch_catalog_if_idle<S: CatalogSource>(
    store: &Store,
    source: &S,
) -> Option<CatalogResult<Vec<Product>>> {
    if !store.select(|s| s.status.is_idle()) {
        debug!("catalog fetch skipped: status is not idle");
        return None;
    }

    Some(fetch_catalog(store, source).await)
}
