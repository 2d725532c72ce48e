//! Pricing

use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{self, Currency},
};

/// Currency every catalog price is quoted in.
pub const CATALOG_CURRENCY: &Currency = iso::USD;

/// Wrap a catalog amount as money in the catalog currency, at the currency's scale.
pub fn to_money(mut amount: Decimal) -> Money<'static, Currency> {
    amount.rescale(CATALOG_CURRENCY.exponent);

    Money::from_decimal(amount, CATALOG_CURRENCY)
}

/// Format money for display, e.g. `$109.95`.
pub fn format_money(money: &Money<'_, Currency>) -> String {
    format!("{money}")
}

/// Format a catalog amount for display.
pub fn format_price(amount: Decimal) -> String {
    format_money(&to_money(amount))
}
