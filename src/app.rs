use std::rc::Rc;

use dioxus::prelude::*;
use gamestore_core::CartEngine;
use tokio::sync::broadcast::error::RecvError;

use crate::context::{get_store_config, push_toast, Toast};
use crate::pages::Storefront;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The storefront page (catalog, cart drawer, promo codes, FAQ)
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Storefront {},
}

/// Root application component.
///
/// Provides global styles, store config, cart and toast context, and routing.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(|| Rc::new(get_store_config()));

    // One cart per session, dropped with the window
    let cart: Signal<CartEngine> = use_signal(|| config.new_cart());
    let toasts: Signal<Vec<Toast>> = use_signal(Vec::new);

    use_context_provider(|| cart);
    use_context_provider(|| toasts);

    // Turn cart events into toasts
    let toast_duration_ms = config.toast_duration_ms;
    use_future(move || async move {
        let mut events = cart.peek().subscribe_events();
        loop {
            match events.recv().await {
                Ok(event) => {
                    if let Some(notification) = event.notification() {
                        push_toast(toasts, notification, toast_duration_ms);
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Toast listener skipped {} cart events", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
