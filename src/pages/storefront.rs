//! Storefront page - the whole shop on one page.
//!
//! Header with cart button, hero, catalog tabs, promo code showcase, FAQ,
//! support and footer. The cart drawer slides over the page when opened.

use dioxus::prelude::*;
use gamestore_core::content;
use gamestore_ui::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant};

use crate::components::{
    CartDrawer, CatalogSection, FaqSection, NavHeader, PromoShowcaseSection, ToastStack,
};
use crate::context::use_store_config;

/// Storefront page component.
#[component]
pub fn Storefront() -> Element {
    let config = use_store_config();
    let mut cart_open = use_signal(|| false);

    rsx! {
        div { class: "storefront",
            NavHeader { on_open_cart: move |_| cart_open.set(true) }

            CartDrawer {
                open: cart_open(),
                on_close: move |_| cart_open.set(false),
            }

            section { class: "hero",
                div { class: "hero-glow" }
                div { class: "container hero-content",
                    Badge { variant: BadgeVariant::Secondary, class: "glow".to_string(),
                        {content::HERO_BADGE}
                    }
                    h1 { class: "hero-title", {content::HERO_TITLE} }
                    p { class: "hero-tagline", {content::HERO_TAGLINE} }
                    div { class: "hero-actions",
                        a { href: "#catalog",
                            Button { size: ButtonSize::Lg, "⚡ Browse the shop" }
                        }
                        a { href: "#promos",
                            Button { size: ButtonSize::Lg, variant: ButtonVariant::Outline,
                                "🎁 Promo codes"
                            }
                        }
                    }
                }
            }

            CatalogSection {}

            PromoShowcaseSection {}

            FaqSection {}

            section { id: "support", class: "support-section muted-bg",
                div { class: "container narrow centered",
                    div { class: "support-glyph", "💬" }
                    h2 { class: "section-title", {content::SUPPORT_TITLE} }
                    p { class: "section-subtitle", {content::SUPPORT_TAGLINE} }
                    div { class: "support-actions",
                        for (index, channel) in content::SUPPORT_CHANNELS.iter().enumerate() {
                            {
                                let variant = if index == 0 { ButtonVariant::Primary } else { ButtonVariant::Outline };
                                rsx! {
                                    Button { size: ButtonSize::Lg, variant: variant,
                                        "{channel.icon} {channel.label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            footer { class: "footer",
                p { "© {config.store_name}. All rights reserved." }
            }

            ToastStack {}
        }
    }
}
