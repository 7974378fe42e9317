//! Catalog client error types

use thiserror::Error;
use shared::SharedError;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog client error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Transport failure, timeout, non-success status or unreadable body
    #[error("Catalog unavailable: {message}")]
    Unavailable { message: String },

    /// The catalog explicitly reported zero matches for a single-record lookup
    #[error("Not found in catalog: {what}")]
    NotFound { what: String },

    #[error("Configuration error: {field}")]
    Configuration { field: String },
}

impl CatalogError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        CatalogError::Unavailable { message: message.into() }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        CatalogError::NotFound { what: what.into() }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, CatalogError::Unavailable { .. })
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CatalogError::unavailable(format!("request timed out: {err}"))
        } else if err.is_decode() {
            CatalogError::unavailable(format!("failed to parse response: {err}"))
        } else {
            CatalogError::unavailable(err.to_string())
        }
    }
}

impl From<SharedError> for CatalogError {
    fn from(err: SharedError) -> Self {
        CatalogError::unavailable(format!("malformed catalog record: {err}"))
    }
}
