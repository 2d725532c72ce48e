//! Catalog errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An HTTP transport or body decoding error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint returned a non-2xx response.
    #[error("catalog request failed with status {0}")]
    UnexpectedStatus(StatusCode),
}
