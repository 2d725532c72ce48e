//! HTTP catalog client.

use reqwest::Client;
use tracing::{debug, warn};

use crate::{config::CatalogConfig, products::Product};

use super::CatalogError;

/// Anything that can produce the product catalog.
pub trait CatalogSource {
    /// Fetch every product, in the order the source delivers them.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the catalog could not be retrieved.
    async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Fetches the catalog with a single GET to the configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    config: CatalogConfig,
    http: Client,
}

impl HttpCatalogClient {
    /// Create a new client from the given configuration.
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// The endpoint this client fetches from.
    pub fn endpoint(&self) -> &str {
        self.config.endpoint()
    }

    async fn request_catalog(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self.http.get(self.config.endpoint()).send().await?;

        let status = response.status();

        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus(status));
        }

        Ok(response.json().await?)
    }
}

impl CatalogSource for HttpCatalogClient {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError> {
        debug!(endpoint = self.config.endpoint(), "fetching catalog");

        match self.request_catalog().await {
            Ok(products) => {
                debug!(count = products.len(), "catalog fetched");

                Ok(products)
            }
            Err(error) => {
                warn!(endpoint = self.config.endpoint(), %error, "catalog fetch failed");

                Err(error)
            }
        }
    }
}
