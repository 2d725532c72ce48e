use leptos::prelude::*;

use crate::store::CartStore;

pub(super) fn cart_button_label(total_items: u64) -> String {
    match total_items {
        0 => "Open cart, cart is empty".to_string(),
        1 => "Open cart, 1 item".to_string(),
        count => format!("Open cart, {count} items"),
    }
}

/// Header button that opens the cart drawer, with an item-count badge.
#[component]
pub fn CartButton(
    /// Drawer visibility the button opens.
    open: RwSignal<bool>,
    /// Cart store the badge counts.
    store: CartStore,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="cart-button"
            aria-label=move || cart_button_label(store.total_items())
            aria-haspopup="dialog"
            on:click=move |_| open.set(true)
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
                class="lucide lucide-shopping-cart-icon lucide-shopping-cart"
                aria-hidden="true"
            >
                <circle cx="8" cy="21" r="1"></circle>
                <circle cx="19" cy="21" r="1"></circle>
                <path d="M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12"></path>
            </svg>
            <span
                class="cart-badge"
                class:cart-badge-hidden=move || store.total_items() == 0
                aria-hidden="true"
            >
                {move || store.total_items()}
            </span>
        </button>
    }
}
