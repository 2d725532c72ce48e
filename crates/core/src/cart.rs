//! Cart
//!
//! The cart is an immutable value. Every transition takes the current cart by
//! reference and returns the next one, so a snapshot handed to the view can
//! never change underneath it.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::Serialize;

use crate::{
    pricing::to_money,
    products::{Product, ProductId},
};

/// One line in the cart: a product and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartEntry {
    #[serde(flatten)]
    product: Product,

    /// Always at least 1.
    amount: u32,
}

impl CartEntry {
    fn new(product: Product) -> Self {
        Self { product, amount: 1 }
    }

    /// The product on this line.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The product identifier on this line.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Quantity on this line.
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Unit price multiplied by quantity, saturating at [`Decimal::MAX`].
    pub fn line_total(&self) -> Decimal {
        self.product.price.saturating_mul(Decimal::from(self.amount))
    }

    fn incremented(&self) -> Self {
        Self {
            product: self.product.clone(),
            amount: self.amount.saturating_add(1),
        }
    }

    /// `None` once the line would fall to zero.
    fn decremented(&self) -> Option<Self> {
        (self.amount > 1).then(|| Self {
            product: self.product.clone(),
            amount: self.amount - 1,
        })
    }
}

/// A user intent that changes the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit of a product.
    Add(Product),

    /// Remove one unit of the product with this identifier.
    Remove(ProductId),
}

impl CartAction {
    /// The product this action targets.
    pub fn product_id(&self) -> ProductId {
        match self {
            Self::Add(product) => product.id,
            Self::Remove(id) => *id,
        }
    }
}

/// Ordered cart lines, at most one per product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action, returning the next cart.
    pub fn reduce(&self, action: &CartAction) -> Self {
        match action {
            CartAction::Add(product) => self.add_to_cart(product),
            CartAction::Remove(id) => self.remove_from_cart(*id),
        }
    }

    /// Add one unit of `product`.
    ///
    /// An existing line for the product has its amount incremented in place;
    /// otherwise a new line with amount 1 is appended.
    pub fn add_to_cart(&self, product: &Product) -> Self {
        if self.contains(product.id) {
            let entries = self
                .entries
                .iter()
                .map(|entry| {
                    if entry.id() == product.id {
                        entry.incremented()
                    } else {
                        entry.clone()
                    }
                })
                .collect();

            return Self { entries };
        }

        let mut entries = self.entries.clone();
        entries.push(CartEntry::new(product.clone()));

        Self { entries }
    }

    /// Remove one unit of the product with identifier `id`.
    ///
    /// A line at amount 1 is dropped. Removing an absent product returns an
    /// identical cart.
    pub fn remove_from_cart(&self, id: ProductId) -> Self {
        let entries = self
            .entries
            .iter()
            .filter_map(|entry| {
                if entry.id() == id {
                    entry.decremented()
                } else {
                    Some(entry.clone())
                }
            })
            .collect();

        Self { entries }
    }

    /// Sum of amounts across all lines.
    pub fn total_items(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| u64::from(entry.amount))
            .sum()
    }

    /// Sum of line totals, saturating at [`Decimal::MAX`].
    pub fn subtotal(&self) -> Decimal {
        self.entries
            .iter()
            .map(CartEntry::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Subtotal as money in the catalog currency.
    pub fn subtotal_money(&self) -> Money<'static, Currency> {
        to_money(self.subtotal())
    }

    /// Lines in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Look up the line for a product.
    pub fn entry(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Whether the cart has a line for this product.
    pub fn contains(&self, id: ProductId) -> bool {
        self.entry(id).is_some()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn product(id: u64, price: Decimal) -> Product {
        Product {
            id: ProductId(id),
            category: "electronics".to_string(),
            description: format!("Product {id}"),
            image: format!("https://example.test/{id}.jpg"),
            price,
            title: format!("Product {id}"),
        }
    }

    fn amounts(cart: &Cart) -> Vec<(u64, u32)> {
        cart.entries()
            .iter()
            .map(|entry| (entry.id().0, entry.amount()))
            .collect()
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn add_to_empty_cart_creates_line_at_one() -> TestResult {
        let added = product(1, Decimal::new(10, 0));

        let cart = Cart::new().add_to_cart(&added);

        let entry = cart.entry(ProductId(1)).ok_or("missing entry")?;

        assert_eq!(cart.len(), 1);
        assert_eq!(entry.amount(), 1);
        assert_eq!(entry.product(), &added);
        assert_eq!(cart.total_items(), 1);

        Ok(())
    }

    #[test]
    fn add_new_product_appends_at_end() {
        let cart = Cart::new()
            .add_to_cart(&product(3, Decimal::ONE))
            .add_to_cart(&product(1, Decimal::ONE))
            .add_to_cart(&product(2, Decimal::ONE));

        assert_eq!(amounts(&cart), vec![(3, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn add_existing_product_increments_in_place() {
        let cart = Cart::new()
            .add_to_cart(&product(1, Decimal::ONE))
            .add_to_cart(&product(2, Decimal::ONE))
            .add_to_cart(&product(1, Decimal::ONE));

        assert_eq!(amounts(&cart), vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn add_does_not_mutate_previous_snapshot() {
        let before = Cart::new().add_to_cart(&product(1, Decimal::ONE));

        let after = before.add_to_cart(&product(1, Decimal::ONE));

        assert_eq!(amounts(&before), vec![(1, 1)]);
        assert_eq!(amounts(&after), vec![(1, 2)]);
    }

    #[test]
    fn remove_decrements_line_above_one() {
        let cart = Cart::new()
            .add_to_cart(&product(1, Decimal::ONE))
            .add_to_cart(&product(1, Decimal::ONE));

        let cart = cart.remove_from_cart(ProductId(1));

        assert_eq!(amounts(&cart), vec![(1, 1)]);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn remove_drops_line_at_one() {
        let cart = Cart::new()
            .add_to_cart(&product(1, Decimal::ONE))
            .add_to_cart(&product(2, Decimal::ONE))
            .add_to_cart(&product(3, Decimal::ONE));

        let cart = cart.remove_from_cart(ProductId(2));

        assert_eq!(amounts(&cart), vec![(1, 1), (3, 1)]);
        assert!(!cart.contains(ProductId(2)));
    }

    #[test]
    fn remove_last_line_empties_cart() {
        let cart = Cart::new().add_to_cart(&product(1, Decimal::new(10, 0)));

        let cart = cart.remove_from_cart(ProductId(1));

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn remove_absent_product_is_noop() {
        let cart = Cart::new()
            .add_to_cart(&product(1, Decimal::ONE))
            .add_to_cart(&product(2, Decimal::ONE));

        let result = cart.remove_from_cart(ProductId(99));

        assert_eq!(result, cart);
    }

    #[test]
    fn remove_from_empty_cart_is_noop() {
        let cart = Cart::new().remove_from_cart(ProductId(1));

        assert!(cart.is_empty());
    }

    #[test]
    fn reduce_routes_actions() {
        let added = product(5, Decimal::ONE);

        let cart = Cart::new()
            .reduce(&CartAction::Add(added.clone()))
            .reduce(&CartAction::Add(added))
            .reduce(&CartAction::Remove(ProductId(5)));

        assert_eq!(amounts(&cart), vec![(5, 1)]);
    }

    #[test]
    fn line_total_multiplies_price_by_amount() -> TestResult {
        let cart = Cart::new()
            .add_to_cart(&product(1, Decimal::new(1999, 2)))
            .add_to_cart(&product(1, Decimal::new(1999, 2)))
            .add_to_cart(&product(1, Decimal::new(1999, 2)));

        let entry = cart.entry(ProductId(1)).ok_or("missing entry")?;

        assert_eq!(entry.line_total(), Decimal::new(5997, 2));

        Ok(())
    }

    #[test]
    fn subtotal_sums_line_totals() {
        let cart = Cart::new()
            .add_to_cart(&product(1, Decimal::new(1000, 2)))
            .add_to_cart(&product(2, Decimal::new(250, 2)))
            .add_to_cart(&product(2, Decimal::new(250, 2)));

        assert_eq!(cart.subtotal(), Decimal::new(1500, 2));
        assert_eq!(format!("{}", cart.subtotal_money()), "$15.00");
    }

    #[test]
    fn line_total_saturates_for_huge_price() -> TestResult {
        let price = Decimal::MAX / Decimal::TEN;
        let mut cart = Cart::new();

        for _ in 0..17 {
            cart = cart.add_to_cart(&product(1, price));
        }

        let entry = cart.entry(ProductId(1)).ok_or("missing entry")?;

        assert_eq!(entry.amount(), 17);
        assert_eq!(entry.line_total(), Decimal::MAX);

        Ok(())
    }

    #[test]
    fn subtotal_saturates_across_lines() {
        let cart = Cart::new()
            .add_to_cart(&product(1, Decimal::MAX))
            .add_to_cart(&product(2, Decimal::MAX));

        assert_eq!(cart.subtotal(), Decimal::MAX);
    }

    #[test]
    fn entry_serializes_product_fields_with_amount() -> TestResult {
        let cart = Cart::new().add_to_cart(&product(1, Decimal::new(10, 0)));

        let value = serde_json::to_value(&cart)?;

        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["amount"], 1);
        assert_eq!(value[0]["price"], 10.0);
        assert_eq!(value[0]["title"], "Product 1");

        Ok(())
    }
}
