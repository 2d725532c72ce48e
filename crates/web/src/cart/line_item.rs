use leptos::prelude::*;
use storefront::{
    cart::{CartAction, CartEntry},
    pricing::{format_money, to_money},
};

use crate::{announce, store::CartStore};

pub(super) fn remove_button_label(title: &str, amount: u32) -> String {
    if amount == 1 {
        format!("Remove {title} from cart")
    } else {
        format!("Remove one {title} from cart ({amount} in cart)")
    }
}

pub(super) fn add_button_label(title: &str, price: &str) -> String {
    format!("Add another {title} ({price}) to cart")
}

#[component]
fn RemoveLineButton(
    entry: CartEntry,
    store: CartStore,
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let id = entry.id();
    let title = entry.product().title.clone();
    let remove_button_label = remove_button_label(&title, entry.amount());

    view! {
        <button
            type="button"
            class="icon-button icon-button-secondary"
            aria-label=remove_button_label
            on:click=move |_| {
                store.dispatch(CartAction::Remove(id));
                announce(live_message, format!("Removed {title} from cart."));
            }
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
                class="lucide lucide-minus-icon lucide-minus"
                aria-hidden="true"
            >
                <path d="M5 12h14"></path>
            </svg>
        </button>
    }
}

#[component]
fn AddLineButton(
    entry: CartEntry,
    store: CartStore,
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let product = entry.product().clone();
    let title = product.title.clone();
    let add_button_label = add_button_label(&title, &format_money(&product.price_money()));

    view! {
        <button
            type="button"
            class="icon-button icon-button-primary"
            aria-label=add_button_label
            on:click=move |_| {
                store.dispatch(CartAction::Add(product.clone()));
                announce(live_message, format!("Added {title} to cart."));
            }
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
                class="lucide lucide-plus-icon lucide-plus"
                aria-hidden="true"
            >
                <path d="M5 12h14"></path>
                <path d="M12 5v14"></path>
            </svg>
        </button>
    }
}

#[component]
pub(super) fn CartLine(
    entry: CartEntry,
    store: CartStore,
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let product = entry.product();

    let title = product.title.clone();
    let image = product.image.clone();
    let image_alt = product.title.clone();
    let unit_price = format_money(&product.price_money());
    let line_total = format_money(&to_money(entry.line_total()));
    let amount = entry.amount();

    view! {
        <li class="cart-line">
            <div class="cart-line-content">
                <h3 class="cart-line-title">{title}</h3>
                <div class="cart-line-prices">
                    <p>"Price: " {unit_price}</p>
                    <p>"Total: " {line_total}</p>
                </div>
                <div class="cart-line-controls">
                    <RemoveLineButton
                        entry=entry.clone()
                        store=store
                        live_message=live_message
                    />
                    <p class="cart-line-amount">{amount}</p>
                    <AddLineButton entry=entry store=store live_message=live_message />
                </div>
            </div>
            <img class="cart-line-image" src=image alt=image_alt />
        </li>
    }
}
