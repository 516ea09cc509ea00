//! # Catalog Error Types
//!
//! Errors at the fetch boundary. None of these ever reach the reducer:
//! the thunk logs the diagnostic and dispatches `FetchRejected`, so state
//! only ever records `status == Failed`.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog fetch failures.
///
/// ## Design Principles
/// - Each variant carries the URL it failed against
/// - Errors are terminal for the invocation; retry is the caller's call
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Invalid client configuration (bad endpoint, client build failure).
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    /// The request never produced a response (DNS, connect, timeout).
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("Catalog endpoint {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body was not a decodable product array.
    #[error("Failed to decode catalog response from {url}: {detail}")]
    Decode { url: String, detail: String },
}
