//! Prodmatch Error Types
//!
//! Errors are confined to catalog persistence; the matching engine
//! itself is total over its inputs, and "no match" is an ordinary
//! return value rather than a failure.

use thiserror::Error;

/// Central error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
