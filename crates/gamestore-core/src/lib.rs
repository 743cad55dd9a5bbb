//! GameStore Core Library
//!
//! Catalog, promo codes and the in-memory cart engine behind the GameStore
//! storefront.
//!
//! ## Overview
//!
//! A storefront session sells from a static [`Catalog`] and accepts codes
//! from a static [`PromoTable`], both loaded once from a [`StoreConfig`].
//! The [`CartEngine`] holds the session's cart lines and active promo
//! discount, and broadcasts a [`CartEvent`] after every change so the UI can
//! re-render and show notifications.
//!
//! Nothing is persisted; a cart lives for as long as its engine.
//!
//! ## Quick Start
//!
//! ```
//! use gamestore_core::{CategoryFilter, ItemId, StoreConfig};
//!
//! let config = StoreConfig::default();
//! let mut cart = config.new_cart();
//!
//! for item in config.catalog.filter_by_category("vip".parse::<CategoryFilter>().unwrap()) {
//!     println!("{} {}", item.image, item.name);
//! }
//!
//! cart.add_item_by_id(ItemId(1)).unwrap();
//! cart.apply_promo_code("game2024");
//! println!("Total: {}", config.format_price(cart.compute_total()));
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod logging;
pub mod promo;
pub mod types;

// Re-exports
pub use cart::{CartEngine, CartEventReceiver, PromoOutcome, TryRecvError};
pub use catalog::Catalog;
pub use config::{ConfigSource, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use events::{CartEvent, Notification, Severity};
pub use promo::PromoTable;
pub use types::*;
