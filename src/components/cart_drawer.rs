//! Cart drawer component.
//!
//! Slides in from the right over the page. Lists cart lines with remove
//! buttons, takes a promo code, and shows the total. Payment is not wired
//! up, so the Pay button stays disabled.

use dioxus::prelude::*;
use gamestore_core::{CartLine, ItemId};
use gamestore_ui::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, CloseButton, IconButton, Input};

use crate::context::{use_cart, use_store_config};

/// A single line in the drawer.
#[component]
fn CartLineRow(line: CartLine, price: String, on_remove: EventHandler<ItemId>) -> Element {
    let id = line.id();

    rsx! {
        div { class: "cart-line",
            div { class: "cart-line-info",
                span { class: "cart-line-glyph", "{line.item.image}" }
                div {
                    p { class: "cart-line-name", "{line.item.name}" }
                    p { class: "cart-line-qty", "x{line.quantity}" }
                }
            }
            div { class: "cart-line-actions",
                span { class: "cart-line-price", "{price}" }
                IconButton {
                    aria_label: format!("Remove {}", line.item.name),
                    onclick: move |_| on_remove.call(id),
                    "🗑"
                }
            }
        }
    }
}

/// Promo code input with an Apply button.
///
/// The code field keeps its text after a rejected code so the user can
/// fix a typo.
#[component]
fn PromoForm() -> Element {
    let mut cart = use_cart();
    let mut code = use_signal(String::new);

    let mut apply = move || {
        let entered = code.read().clone();
        if cart.write().apply_promo_code(&entered).is_applied() {
            code.set(String::new());
        }
    };

    rsx! {
        div { class: "promo-form",
            Input {
                value: code(),
                oninput: move |s| code.set(s),
                onsubmit: move |_| apply(),
                placeholder: "Promo code".to_string(),
            }
            Button { variant: ButtonVariant::Secondary, onclick: move |_| apply(), "Apply" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CartDrawerProps {
    /// Whether the drawer is visible
    pub open: bool,
    /// Called when the drawer should close
    pub on_close: EventHandler<()>,
}

/// Cart drawer showing lines, promo form and total.
#[component]
pub fn CartDrawer(props: CartDrawerProps) -> Element {
    let config = use_store_config();
    let mut cart = use_cart();

    if !props.open {
        return rsx! {};
    }

    let on_close = props.on_close;
    let on_remove = EventHandler::new(move |id: ItemId| {
        cart.write().remove_item(id);
    });

    let engine = cart.read();
    let lines: Vec<(CartLine, String)> = engine
        .lines()
        .iter()
        .map(|line| (line.clone(), config.format_price(line.line_total())))
        .collect();
    let promo_discount = engine.promo_discount();
    let total = config.format_price(engine.compute_total());
    drop(engine);

    rsx! {
        div { class: "drawer-backdrop", onclick: move |_| on_close.call(()) }
        aside { class: "cart-drawer", role: "dialog", "aria-label": "Cart",
            div { class: "drawer-header",
                div {
                    h2 { class: "drawer-title", "Cart" }
                    p { class: "drawer-subtitle", "Your purchases" }
                }
                CloseButton { onclick: move |_| on_close.call(()) }
            }

            div { class: "drawer-body",
                if lines.is_empty() {
                    p { class: "cart-empty", "Cart is empty" }
                } else {
                    for (line, price) in lines {
                        {
                            let key = line.id().get();
                            rsx! {
                                CartLineRow {
                                    key: "{key}",
                                    line: line,
                                    price: price,
                                    on_remove: on_remove,
                                }
                            }
                        }
                    }

                    div { class: "cart-summary",
                        PromoForm {}

                        if promo_discount > 0 {
                            Badge { variant: BadgeVariant::Secondary, class: "promo-active".to_string(),
                                "Discount {promo_discount}% active!"
                            }
                        }

                        div { class: "cart-total",
                            span { "Total:" }
                            span { class: "cart-total-amount", "{total}" }
                        }

                        Button {
                            size: ButtonSize::Lg,
                            class: "wide".to_string(),
                            disabled: true,
                            "💳 Pay"
                        }
                    }
                }
            }
        }
    }
}
