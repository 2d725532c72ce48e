//! Storefront shell: one catalog fetch, then the grid, cart button and drawer.

use std::sync::Arc;

use leptos::prelude::*;
use storefront::{
    catalog::{CatalogSource, CatalogState, HttpCatalogClient},
    products::Product,
};

use crate::{
    cart::{CartButton, CartDrawer},
    config::AppConfig,
    products::ProductGrid,
    store::CartStore,
};

const FAILURE_MESSAGE: &str = "Something went wrong";

#[component]
fn LoadingBar() -> impl IntoView {
    view! {
        <div class="progress" role="progressbar" aria-label="Loading products" aria-busy="true">
            <div class="progress-indicator"></div>
        </div>
    }
}

#[component]
fn FailureMessage() -> impl IntoView {
    view! { <p class="catalog-failure" role="alert">{FAILURE_MESSAGE}</p> }
}

#[component]
fn LoadedStore(
    products: Arc<[Product]>,
    store: CartStore,
    drawer_open: RwSignal<bool>,
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    view! {
        <CartDrawer open=drawer_open store=store live_message=live_message />
        <div class="storefront-header">
            <h1 class="storefront-title">"Storefront"</h1>
            <CartButton open=drawer_open store=store />
        </div>
        <ProductGrid products=products store=store live_message=live_message />
    }
}

fn render_catalog(
    state: CatalogState,
    store: CartStore,
    drawer_open: RwSignal<bool>,
    live_message: RwSignal<(u64, String)>,
) -> AnyView {
    match state {
        CatalogState::Loading => view! { <LoadingBar /> }.into_any(),
        CatalogState::Failed(_) => view! { <FailureMessage /> }.into_any(),
        CatalogState::Loaded(products) => view! {
            <LoadedStore
                products=products
                store=store
                drawer_open=drawer_open
                live_message=live_message
            />
        }
        .into_any(),
    }
}

/// The storefront: fetches the catalog once and renders from its state.
#[component]
pub fn Storefront(
    /// Startup configuration.
    config: AppConfig,
    /// Live-region announcement signal.
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let client = HttpCatalogClient::new(config.catalog);

    let catalog = LocalResource::new(move || {
        let client = client.clone();

        async move { CatalogState::from(client.fetch_catalog().await) }
    });

    let store = CartStore::new();
    let drawer_open = RwSignal::new(false);

    move || {
        render_catalog(
            catalog.get().unwrap_or_default(),
            store,
            drawer_open,
            live_message,
        )
    }
}
