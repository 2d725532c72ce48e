//! Catalog

mod client;
mod errors;
mod state;

pub use client::{CatalogSource, HttpCatalogClient};
pub use errors::CatalogError;
pub use state::CatalogState;
