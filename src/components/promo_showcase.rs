//! "Active promo codes" section.

use dioxus::prelude::*;
use gamestore_core::content::promo_showcase;

use crate::context::use_store_config;

#[component]
pub fn PromoShowcaseSection() -> Element {
    let config = use_store_config();
    let cards = promo_showcase(&config.promo_codes);

    rsx! {
        section { id: "promos", class: "promo-section muted-bg",
            div { class: "container",
                h2 { class: "section-title", "Active promo codes" }
                p { class: "section-subtitle", "Enter a code in the cart to get a discount" }

                div { class: "promo-grid",
                    for card in cards {
                        div {
                            key: "{card.code}",
                            class: if card.featured { "promo-card featured" } else { "promo-card" },
                            div { class: "promo-glyph", "{card.glyph}" }
                            code { class: "promo-code", "{card.code}" }
                            p { class: "promo-blurb", "{card.blurb}" }
                        }
                    }
                }
            }
        }
    }
}
