//! Toast stack in the bottom-right corner.
//!
//! Toasts are pushed by the cart event listener in `App` and expire on
//! their own; the close button only removes them early.

use dioxus::prelude::*;
use gamestore_ui::CloseButton;

use crate::context::{dismiss_toast, use_toasts};

#[component]
pub fn ToastStack() -> Element {
    let toasts = use_toasts();
    let visible = toasts.read().clone();

    rsx! {
        div { class: "toast-stack", role: "status", "aria-live": "polite",
            for toast in visible {
                {
                    let id = toast.id;
                    let class = if toast.notification.is_destructive() { "toast destructive" } else { "toast" };
                    rsx! {
                        div { key: "{id}", class: "{class}",
                            div { class: "toast-body",
                                p { class: "toast-title", "{toast.notification.title}" }
                                p { class: "toast-description", "{toast.notification.description}" }
                            }
                            CloseButton { onclick: move |_| dismiss_toast(toasts, id) }
                        }
                    }
                }
            }
        }
    }
}
