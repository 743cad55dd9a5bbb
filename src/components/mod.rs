//! Storefront components for GameStore.
//!
//! Generic widgets (buttons, inputs, badges, pills) live in `gamestore-ui`;
//! these are the page sections that know about the cart and config.

mod cart_drawer;
mod catalog;
mod faq;
mod nav_header;
mod promo_showcase;
mod toast;

pub use cart_drawer::CartDrawer;
pub use catalog::{CatalogSection, ProductCard};
pub use faq::FaqSection;
pub use nav_header::{NavHeader, NavLocation};
pub use promo_showcase::PromoShowcaseSection;
pub use toast::ToastStack;
