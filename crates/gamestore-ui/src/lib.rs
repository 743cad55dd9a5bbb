//! GameStore UI Components
//!
//! Dioxus building blocks for the storefront page: buttons, badges, the
//! promo code input and the catalog category tabs. Styling comes from the
//! class names these components emit; the desktop app ships the stylesheet.

pub mod components;

pub use components::*;
