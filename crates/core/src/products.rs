//! Products

use std::fmt;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

use crate::pricing::to_money;

/// Catalog product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Product as delivered by the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Product category
    pub category: String,

    /// Product description
    pub description: String,

    /// Product image URI
    pub image: String,

    /// Product price in the catalog currency, never negative
    #[serde(
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "deserialize_price"
    )]
    pub price: Decimal,

    /// Product title
    pub title: String,
}

impl Product {
    /// Price as money in the catalog currency.
    pub fn price_money(&self) -> Money<'static, Currency> {
        to_money(self.price)
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let price = rust_decimal::serde::float::deserialize(deserializer)?;

    if price < Decimal::ZERO {
        return Err(D::Error::custom(format!("negative price {price}")));
    }

    Ok(price)
}
