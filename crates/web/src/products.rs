use std::sync::Arc;

use leptos::prelude::*;
use storefront::{cart::CartAction, pricing::format_money, products::Product};

use crate::{announce, store::CartStore};

fn add_button_label(title: &str, price: &str) -> String {
    format!("Add {title} ({price}) to cart")
}

#[component]
fn ProductCard(
    product: Product,
    store: CartStore,
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let price = format_money(&product.price_money());
    let add_button_label = add_button_label(&product.title, &price);

    let image = product.image.clone();
    let image_alt = product.title.clone();
    let title = product.title.clone();
    let description = product.description.clone();
    let announce_title = product.title.clone();

    view! {
        <li class="product-card">
            <img class="product-image" src=image alt=image_alt loading="lazy" />
            <div class="product-body">
                <h3 class="product-title">{title}</h3>
                <p class="product-description">{description}</p>
                <p class="product-price">{price}</p>
            </div>
            <button
                type="button"
                class="button button-primary product-add"
                aria-label=add_button_label
                on:click=move |_| {
                    store.dispatch(CartAction::Add(product.clone()));
                    announce(live_message, format!("Added {announce_title} to cart."));
                }
            >
                "Add to cart"
            </button>
        </li>
    }
}

/// Grid of catalog products, in delivered order.
#[component]
pub fn ProductGrid(
    /// Products to render.
    products: Arc<[Product]>,
    /// Cart store receiving add actions.
    store: CartStore,
    /// Live-region announcement signal.
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    view! {
        <ul class="product-grid">
            {products
                .iter()
                .map(|product| {
                    view! {
                        <ProductCard
                            product=product.clone()
                            store=store
                            live_message=live_message
                        />
                    }
                })
                .collect_view()}
        </ul>
    }
}
