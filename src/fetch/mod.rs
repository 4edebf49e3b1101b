//! Fetch client boundary.
//!
//! The repository talks to the remote collection only through
//! [`FetchClient`]. The HTTP implementation lives in [`http`]; tests swap in
//! scripted clients.

pub mod http;
pub mod timeout;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::item::Item;

pub use http::HttpFetchClient;
pub use timeout::TimeoutConfig;

/// A failed fetch.
///
/// Callers treat every variant the same way ("the fetch failed"); the
/// variants only exist so logs and error notices can say why.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, refused connection, reset).
    #[error("Connection failed: {0}")]
    Network(String),

    /// Request exceeded the configured deadline
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Server answered with a non-success status
    #[error("Server returned HTTP {status}")]
    Status { status: u16 },

    /// Body was not the expected payload
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Request URL could not be built
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Short machine-readable tag for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network_error",
            FetchError::Timeout { .. } => "timeout",
            FetchError::Status { .. } => "status_error",
            FetchError::Decode(_) => "decode_error",
            FetchError::InvalidUrl(_) => "invalid_url",
        }
    }
}

/// Source of recipe pages and search results.
#[async_trait]
pub trait FetchClient: Send + Sync {
    /// Fetch `limit` items starting at `offset`.
    async fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<Item>, FetchError>;

    /// Full-text search. `query` is never empty.
    async fn fetch_search(&self, query: &str) -> Result<Vec<Item>, FetchError>;
}

#[async_trait]
impl<T: FetchClient + ?Sized> FetchClient for Arc<T> {
    async fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<Item>, FetchError> {
        (**self).fetch_page(offset, limit).await
    }

    async fn fetch_search(&self, query: &str) -> Result<Vec<Item>, FetchError> {
        (**self).fetch_search(query).await
    }
}
