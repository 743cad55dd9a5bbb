//! Catalog section: category tabs and the product grid.

use dioxus::prelude::*;
use gamestore_core::{CatalogItem, CategoryFilter};
use gamestore_ui::{Badge, BadgeVariant, Button, CategoryPills};

use crate::context::{use_cart, use_store_config};

/// A single product card.
#[component]
pub fn ProductCard(item: CatalogItem, on_add: EventHandler<CatalogItem>) -> Element {
    let config = use_store_config();

    let price = config.format_price(item.unit_price());
    let discount = item.active_discount();
    let base_price = config.format_price(f64::from(item.price));
    let to_add = item.clone();

    rsx! {
        article { class: "product-card",
            {discount.map(|percent| rsx! {
                Badge { variant: BadgeVariant::Accent, class: "product-discount".to_string(),
                    "-{percent}%"
                }
            })}
            div { class: "product-glyph", "{item.image}" }
            h3 { class: "product-name", "{item.name}" }
            p { class: "product-description", "{item.description}" }
            div { class: "product-footer",
                div { class: "product-price",
                    span { class: "price-now", "{price}" }
                    if discount.is_some() {
                        span { class: "price-was", "{base_price}" }
                    }
                }
                Button { onclick: move |_| on_add.call(to_add.clone()), "🛒 Add" }
            }
        }
    }
}

/// Catalog section with category filter tabs.
#[component]
pub fn CatalogSection() -> Element {
    let config = use_store_config();
    let mut cart = use_cart();
    let mut selected = use_signal(CategoryFilter::default);

    let on_add = EventHandler::new(move |item: CatalogItem| {
        cart.write().add_item(&item);
    });

    let filter = selected();
    let items: Vec<CatalogItem> = config
        .catalog
        .filter_by_category(filter)
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        section { id: "catalog", class: "catalog-section",
            div { class: "container",
                h2 { class: "section-title", "Catalog" }
                p { class: "section-subtitle", "Pick what you need" }

                CategoryPills {
                    selected: filter,
                    on_select: move |next| selected.set(next),
                }

                if items.is_empty() {
                    p { class: "catalog-empty", "Nothing here yet" }
                } else {
                    div { class: "product-grid",
                        for item in items {
                            {
                                let key = item.id.get();
                                rsx! {
                                    ProductCard { key: "{key}", item: item, on_add: on_add }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
