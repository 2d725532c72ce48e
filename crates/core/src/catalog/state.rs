//! Catalog load state.

use std::sync::Arc;

use crate::products::Product;

use super::CatalogError;

/// Where the one-shot catalog fetch currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogState {
    /// The fetch has not resolved yet.
    #[default]
    Loading,

    /// Products in delivered order.
    Loaded(Arc<[Product]>),

    /// The fetch failed; carries the reason for diagnostics.
    Failed(String),
}

impl CatalogState {
    /// The products, once loaded.
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            Self::Loaded(products) => Some(products),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    /// Whether the fetch is still in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl From<Result<Vec<Product>, CatalogError>> for CatalogState {
    fn from(result: Result<Vec<Product>, CatalogError>) -> Self {
        match result {
            Ok(products) => Self::Loaded(products.into()),
            Err(error) => Self::Failed(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::products::ProductId;

    use super::*;

    fn product(id: u64) -> Product {
        Product {
            id: ProductId(id),
            category: String::new(),
            description: String::new(),
            image: String::new(),
            price: Decimal::ONE,
            title: format!("Product {id}"),
        }
    }

    #[test]
    fn test_default_is_loading() {
        let state = CatalogState::default();

        assert!(state.is_loading());
        assert!(state.products().is_none());
    }

    #[test]
    fn test_successful_result_is_loaded_in_order() -> TestResult {
        let state = CatalogState::from(Ok(vec![product(3), product(1)]));

        let products = state.products().ok_or("expected products")?;
        let ids: Vec<ProductId> = products.iter().map(|product| product.id).collect();

        assert_eq!(ids, vec![ProductId(3), ProductId(1)]);

        Ok(())
    }

    #[test]
    fn test_empty_catalog_is_loaded() {
        let state = CatalogState::from(Ok(Vec::new()));

        assert_eq!(state.products(), Some(&[][..]));
    }

    #[test]
    fn test_failed_result_carries_reason() {
        let state = CatalogState::from(Err(CatalogError::UnexpectedStatus(
            StatusCode::SERVICE_UNAVAILABLE,
        )));

        assert!(
            matches!(&state, CatalogState::Failed(reason) if reason.contains("503")),
            "unexpected state {state:?}"
        );
        assert!(state.products().is_none());
    }
}
