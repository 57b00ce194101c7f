//! Catalog Errors
//!
//! Only the client side can fail; everything else coerces bad input.

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Transport-level failure (connection refused, CORS, aborted, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Remote answered with a non-2xx status
    #[error("Network error: server responded with HTTP {0}")]
    Status(u16),

    /// Body was not valid JSON
    #[error("Malformed response: {0}")]
    Parse(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    #[error("Unsupported page size: {0} (allowed: 12, 24, 50, 100)")]
    InvalidPageSize(u32),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CatalogError {
    /// Whether this belongs to the network class (transport failure or bad status)
    pub fn is_network(&self) -> bool {
        matches!(self, CatalogError::Network(_) | CatalogError::Status(_))
    }
}
