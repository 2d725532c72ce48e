use leptos::{ev, prelude::*};
use storefront::{cart::Cart, pricing::format_money};

use crate::store::CartStore;

mod badge;
mod line_item;

pub use badge::CartButton;
use line_item::CartLine;

fn format_cart_total(cart: &Cart) -> String {
    format!("Total: {}", format_money(&cart.subtotal_money()))
}

fn render_cart_contents(
    cart: &Cart,
    store: CartStore,
    live_message: RwSignal<(u64, String)>,
) -> AnyView {
    let lines = if cart.is_empty() {
        view! { <p class="cart-empty">"No items in cart."</p> }.into_any()
    } else {
        view! {
            <ul class="cart-lines">
                {cart
                    .entries()
                    .iter()
                    .map(|entry| {
                        view! {
                            <CartLine entry=entry.clone() store=store live_message=live_message />
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class="cart-contents">
            {lines}
            <p class="cart-total">{format_cart_total(cart)}</p>
        </div>
    }
    .into_any()
}

/// Right-anchored slide-out panel listing the cart.
#[component]
pub fn CartDrawer(
    /// Whether the drawer is showing.
    open: RwSignal<bool>,
    /// Cart store the drawer reads from and dispatches to.
    store: CartStore,
    /// Live-region announcement signal.
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let escape_listener = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            open.set(false);
        }
    });

    on_cleanup(move || escape_listener.remove());

    view! {
        <div
            class="drawer-backdrop"
            class:drawer-backdrop-open=move || open.get()
            aria-hidden="true"
            on:click=move |_| open.set(false)
        ></div>
        <aside
            class="cart-drawer"
            class:cart-drawer-open=move || open.get()
            role="dialog"
            aria-label="Shopping cart"
            aria-hidden=move || (!open.get()).to_string()
        >
            <div class="cart-drawer-header">
                <h2 class="cart-drawer-title">"Your Shopping Cart"</h2>
                <button
                    type="button"
                    class="icon-button icon-button-secondary"
                    aria-label="Close cart"
                    on:click=move |_| open.set(false)
                >
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class="lucide lucide-x-icon lucide-x"
                        aria-hidden="true"
                    >
                        <path d="M18 6 6 18"></path>
                        <path d="m6 6 12 12"></path>
                    </svg>
                </button>
            </div>
            {move || render_cart_contents(&store.snapshot(), store, live_message)}
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use storefront::products::{Product, ProductId};

    use super::*;

    fn product(id: u64, price: Decimal) -> Product {
        Product {
            id: ProductId(id),
            category: String::new(),
            description: String::new(),
            image: String::new(),
            price,
            title: format!("Product {id}"),
        }
    }

    #[test]
    fn test_format_cart_total_empty() {
        let result = format_cart_total(&Cart::new());

        assert_eq!(result, "Total: $0.00");
    }

    #[test]
    fn test_format_cart_total_sums_lines() {
        let cart = Cart::new()
            .add_to_cart(&product(1, Decimal::new(10_995, 2)))
            .add_to_cart(&product(2, Decimal::new(2230, 2)))
            .add_to_cart(&product(2, Decimal::new(2230, 2)));

        let result = format_cart_total(&cart);

        assert_eq!(result, "Total: $154.55");
    }
}
