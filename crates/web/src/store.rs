//! Cart store: owns the cart signal and applies dispatched actions.

use leptos::prelude::*;
use storefront::cart::{Cart, CartAction};
use tracing::debug;

/// Reactive owner of the cart value.
///
/// Views read snapshots and dispatch actions; only [`CartStore::dispatch`]
/// replaces the cart.
#[derive(Debug, Clone, Copy)]
pub struct CartStore {
    cart: RwSignal<Cart>,
}

impl CartStore {
    /// Create a store holding an empty cart.
    pub fn new() -> Self {
        Self {
            cart: RwSignal::new(Cart::new()),
        }
    }

    /// Replace the cart with the result of applying `action`.
    pub fn dispatch(&self, action: CartAction) {
        let product = action.product_id();

        self.cart.update(move |cart| *cart = cart.reduce(&action));

        debug!(
            %product,
            total_items = self.cart.with_untracked(Cart::total_items),
            "cart updated"
        );
    }

    /// Tracked snapshot of the current cart.
    pub fn snapshot(&self) -> Cart {
        self.cart.get()
    }

    /// Tracked item count for the badge.
    pub fn total_items(&self) -> u64 {
        self.cart.with(Cart::total_items)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
