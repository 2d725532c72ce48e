//! Leptos Storefront Application

use leptos::prelude::*;
use thiserror::Error;
use tracing::info;

mod cart;
mod config;
mod logging;
mod products;
mod shop;
mod store;

use config::{AppConfig, AppConfigError};
use logging::{LoggingError, init_logging};

/// Errors that stop the storefront from starting.
#[derive(Debug, Error)]
enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] AppConfigError),

    #[error(transparent)]
    Logging(#[from] LoggingError),
}

fn start() -> Result<AppConfig, StartupError> {
    let config = AppConfig::load()?;

    init_logging(config.log_level)?;

    info!(catalog = config.catalog.endpoint(), "starting storefront");

    Ok(config)
}

/// Main app shell.
#[component]
fn App(startup: Result<AppConfig, String>) -> impl IntoView {
    match startup {
        Ok(config) => {
            let live_message = RwSignal::new((0_u64, String::new()));

            view! {
                <main class="storefront">
                    <p class="sr-only" role="status" aria-live="polite" aria-atomic="true">
                        {move || live_message.get().1}
                    </p>
                    <shop::Storefront config=config live_message=live_message />
                </main>
            }
            .into_any()
        }
        Err(error_message) => view! {
            <main class="storefront">
                <div class="startup-error">
                    <p>{error_message}</p>
                </div>
            </main>
        }
        .into_any(),
    }
}

/// Main client function
fn main() {
    console_error_panic_hook::set_once();

    let startup = start().map_err(|error| error.to_string());

    leptos::mount::mount_to_body(move || view! { <App startup=startup /> });
}

fn announce(live_message: RwSignal<(u64, String)>, message: String) {
    live_message.update(|(id, text)| {
        *id = id.saturating_add(1);
        *text = message;
    });
}
