//! Storefront
//!
//! Product catalog fetching and in-memory cart state for a client-side storefront.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod pricing;
pub mod products;
