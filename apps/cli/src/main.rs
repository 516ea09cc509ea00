//! # ministore CLI
//!
//! A thin command-line stand-in for the view layer: fetches the catalog,
//! applies an optional search term, and walks a small cart session against
//! the store.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (default `info`, override with `RUST_LOG`)
//! 2. Build `CatalogConfig` from defaults + `MINISTORE_CATALOG_URL`
//! 3. Construct the catalog client and an empty store
//! 4. Run the idle-gated fetch
//! 5. Filter, print, and demo a couple of cart dispatches
//!
//! ## Usage
//! ```text
//! ministore [SEARCH_TERM]
//! RUST_LOG=debug ministore shirt
//! MINISTORE_CATALOG_URL=http://localhost:9000 ministore
//! ```

use std::process::ExitCode;

use ministore_catalog::{fetch_catalog_if_idle, CatalogClient, CatalogConfig};
use ministore_core::{Action, FetchStatus, Store};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let config = CatalogConfig::from_env();
    info!(base_url = %config.base_url, "starting ministore");

    let client = match CatalogClient::new(&config) {
        Ok(client) => client,
        Err(err) => {
            error!(error = %err, "failed to build catalog client");
            return ExitCode::FAILURE;
        }
    };

    let store = Store::new();

    // First (and only) fetch: the store starts idle, so the gate lets it
    // through. Failures leave status == Failed and we report and exit.
    if let Some(Err(_)) = fetch_catalog_if_idle(&store, &client).await {
        eprintln!("Could not load the catalog, try again later.");
        return ExitCode::FAILURE;
    }
    debug_assert_eq!(store.select(|s| s.status), FetchStatus::Succeeded);

    if let Some(term) = std::env::args().nth(1) {
        store.dispatch(Action::SetSearchTerm(term));
    }

    let matches = store.select(|s| {
        s.filtered_stock()
            .iter()
            .map(|p| (p.id, p.title.clone(), p.price))
            .collect::<Vec<_>>()
    });

    let term = store.select(|s| s.search_term.clone());
    if term.is_empty() {
        println!("Catalog ({} products):", matches.len());
    } else {
        println!("Catalog matching \"{}\" ({} products):", term, matches.len());
    }
    for (id, title, price) in &matches {
        println!("  [{:>3}] {} — {}", id, title, price);
    }

    // Small cart session: add the first match twice, show the snapshot,
    // then toggle the panel closed again.
    if let Some((id, _, _)) = matches.first() {
        let product = store
            .select(|s| s.stock.iter().find(|p| p.id == *id).cloned())
            .expect("filtered product comes from stock");

        store.dispatch(Action::AddProduct(product.clone()));
        store.dispatch(Action::AddProduct(product));
        store.dispatch(Action::ToggleCart);

        let snapshot = store.snapshot();
        println!(
            "\nCart ({} item(s), quantity {}):",
            snapshot.cart_item_count(),
            snapshot.cart_quantity()
        );
        for item in &snapshot.products {
            println!("  {} x{}", item.title, item.quantity);
        }
    }

    ExitCode::SUCCESS
}

/// Initializes the tracing subscriber.
///
/// Default level is `info` with ministore crates at `debug`; `RUST_LOG`
/// overrides everything.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ministore=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
