//! App Config
//!
//! A browser bundle has no process environment, so settings are captured from
//! the build environment by `option_env!`.

use std::str::FromStr;

use storefront::config::{CatalogConfig, ConfigError};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// Errors raised while loading app configuration.
#[derive(Debug, Error)]
pub enum AppConfigError {
    /// The catalog endpoint is invalid.
    #[error(transparent)]
    Catalog(#[from] ConfigError),

    /// The log level is not one of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
}

/// Storefront settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Catalog endpoint settings.
    pub catalog: CatalogConfig,

    /// Maximum verbosity of console logging.
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Load settings from `STOREFRONT_CATALOG_URL` and `STOREFRONT_LOG` as seen at build time.
    ///
    /// # Errors
    ///
    /// Returns an [`AppConfigError`] if either value is set but invalid.
    pub fn load() -> Result<Self, AppConfigError> {
        Self::from_values(
            option_env!("STOREFRONT_CATALOG_URL"),
            option_env!("STOREFRONT_LOG"),
        )
    }

    fn from_values(
        catalog_url: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, AppConfigError> {
        let catalog = match catalog_url.filter(|value| !value.trim().is_empty()) {
            Some(url) => CatalogConfig::from_endpoint(url)?,
            None => CatalogConfig::default(),
        };

        let log_level = match log_level.map(str::trim).filter(|value| !value.is_empty()) {
            Some(level) => LevelFilter::from_str(level)
                .map_err(|_error| AppConfigError::InvalidLogLevel(level.to_string()))?,
            None => LevelFilter::INFO,
        };

        Ok(Self { catalog, log_level })
    }
}
