//! # Catalog Client
//!
//! The HTTP client for the remote product catalog, plus the [`CatalogSource`]
//! seam the thunk consumes so tests can run against stubs instead of a
//! network.

use std::time::Duration;

use ministore_core::Product;
use tracing::{debug, info};

use crate::error::{CatalogError, CatalogResult};

/// Default catalog endpoint base URL.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com";

/// Environment variable overriding the catalog base URL.
pub const CATALOG_URL_ENV: &str = "MINISTORE_CATALOG_URL";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the catalog client.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API (no trailing slash).
    pub base_url: String,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout.
    pub request_timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl CatalogConfig {
    /// Builds a config from defaults plus environment overrides.
    ///
    /// ## Configuration Priority
    /// 1. `MINISTORE_CATALOG_URL` environment variable (highest)
    /// 2. Default values (`https://fakestoreapi.com`)
    pub fn from_env() -> Self {
        let mut config = CatalogConfig::default();

        if let Ok(url) = std::env::var(CATALOG_URL_ENV) {
            let url = url.trim().trim_end_matches('/').to_string();
            if !url.is_empty() {
                debug!(url = %url, "catalog URL overridden from environment");
                config.base_url = url;
            }
        }

        config
    }
}

// =============================================================================
// Catalog Source Seam
// =============================================================================

/// Anything that can produce the product catalog.
///
/// The thunk is generic over this so lifecycle tests inject stub sources;
/// [`CatalogClient`] is the production implementation. The trait is never
/// used as a trait object.
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    /// Fetches the full product catalog. Exactly one attempt, no retry.
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>>;
}

// =============================================================================
// HTTP Client
// =============================================================================

/// HTTP catalog client.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Creates a client from the given configuration.
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| CatalogError::InvalidConfig(e.to_string()))?;

        Ok(CatalogClient {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// The products endpoint this client targets.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }
}

impl CatalogSource for CatalogClient {
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        let url = self.products_url();
        debug!(url = %url, "fetching catalog");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| CatalogError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let products: Vec<Product> =
            response
                .json()
                .await
                .map_err(|e| CatalogError::Decode {
                    url: url.clone(),
                    detail: e.to_string(),
                })?;

        info!(count = products.len(), "catalog fetched");
        Ok(products)
    }
}
