//! Catalog Config

use reqwest::Url;
use thiserror::Error;

/// Default catalog endpoint.
pub const DEFAULT_CATALOG_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// Errors raised while building configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The endpoint could not be parsed as a URL.
    #[error("invalid catalog endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint {
        /// Endpoint as given
        endpoint: String,

        /// Why parsing failed
        reason: String,
    },

    /// The endpoint is not an http(s) URL.
    #[error("unsupported catalog endpoint scheme {0:?}")]
    UnsupportedScheme(String),
}

/// Where the catalog is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    endpoint: String,
}

impl CatalogConfig {
    /// Build a config for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the endpoint is not a valid http(s) URL.
    pub fn from_endpoint(endpoint: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(endpoint.trim()).map_err(|error| ConfigError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: error.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(Self {
                endpoint: url.into(),
            }),
            scheme => Err(ConfigError::UnsupportedScheme(scheme.to_string())),
        }
    }

    /// Catalog endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CATALOG_ENDPOINT.to_string(),
        }
    }
}
