//! Navigation Header Component
//!
//! Sticky header with store title, section anchors, the (inert) profile
//! button and the cart button with its line-count badge.

use dioxus::prelude::*;
use gamestore_ui::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant};

use crate::context::{use_cart, use_store_config};

/// Page sections reachable from the header
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Catalog,
    Faq,
    Support,
}

impl NavLocation {
    pub const ALL: [NavLocation; 3] = [NavLocation::Catalog, NavLocation::Faq, NavLocation::Support];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Catalog => "Shop",
            NavLocation::Faq => "FAQ",
            NavLocation::Support => "Support",
        }
    }

    /// Anchor href of the section
    pub fn anchor(&self) -> &'static str {
        match self {
            NavLocation::Catalog => "#catalog",
            NavLocation::Faq => "#faq",
            NavLocation::Support => "#support",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Called when the cart button is clicked
    pub on_open_cart: EventHandler<()>,
}

/// Navigation Header component
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let config = use_store_config();
    let cart = use_cart();

    let line_count = cart.read().line_count();

    rsx! {
        header { class: "nav-header",
            div { class: "container nav-inner",
                div { class: "nav-brand",
                    span { class: "nav-logo", "🎮" }
                    h1 { class: "nav-title", "{config.store_name}" }
                }

                nav { class: "nav-links",
                    for location in NavLocation::ALL {
                        a {
                            class: "nav-link",
                            href: location.anchor(),
                            {location.display_name()}
                        }
                    }
                    // No account system yet
                    Button { variant: ButtonVariant::Outline, size: ButtonSize::Sm,
                        "👤 Profile"
                    }
                }

                Button {
                    size: ButtonSize::Sm,
                    class: "cart-button".to_string(),
                    onclick: move |_| props.on_open_cart.call(()),
                    "🛒 Cart"
                    if line_count > 0 {
                        Badge { variant: BadgeVariant::Secondary, class: "cart-count".to_string(),
                            "{line_count}"
                        }
                    }
                }
            }
        }
    }
}
