//! Theme for the GameStore storefront.

mod styles;

pub use styles::GLOBAL_STYLES;
