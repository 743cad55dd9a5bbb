//! Page components for GameStore.

mod storefront;

pub use storefront::Storefront;
