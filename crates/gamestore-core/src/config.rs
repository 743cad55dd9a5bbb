//! Store configuration
//!
//! Everything static about a storefront: its name, currency symbol, toast
//! timing, catalog and promo table. Loaded once at process start and handed
//! to the cart engine; never mutated afterwards.
//!
//! The config file is JSON. Every field is optional and falls back to the
//! built-in default:
//!
//! ```json
//! {
//!   "store_name": "GameStore",
//!   "currency_symbol": "₽",
//!   "toast_duration_ms": 3000,
//!   "catalog": [
//!     { "id": 1, "name": "VIP Status", "description": "...", "price": 499,
//!       "discount": 20, "category": "vip", "image": "⭐" }
//!   ],
//!   "promo_codes": { "GAME2024": 15 }
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cart::CartEngine;
use crate::catalog::Catalog;
use crate::error::{StoreError, StoreResult};
use crate::promo::PromoTable;

/// File name looked up under the platform config directory
pub const CONFIG_FILE_NAME: &str = "store.json";

/// Default time a toast stays on screen
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Static storefront configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub store_name: String,
    pub currency_symbol: String,
    pub toast_duration_ms: u64,
    pub catalog: Catalog,
    pub promo_codes: PromoTable,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: "GameStore".to_string(),
            currency_symbol: "₽".to_string(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            catalog: Catalog::default(),
            promo_codes: PromoTable::default(),
        }
    }
}

/// Where a config was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    BuiltIn,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::BuiltIn => write!(f, "built-in defaults"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl StoreConfig {
    /// Parse and validate a JSON config document
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        let config: StoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be read,
    /// `StoreError::Json` if it is malformed, and the catalog/promo
    /// validation errors if its data is inconsistent.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        debug!(?path, "Reading store config");
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        info!(
            ?path,
            items = config.catalog.len(),
            promo_codes = config.promo_codes.len(),
            "Loaded store config"
        );
        Ok(config)
    }

    /// Resolve the config for this process
    ///
    /// An explicit path must exist. Without one, the file in the platform
    /// config directory is used when present, else the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> StoreResult<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            let config = Self::load(path)?;
            return Ok((config, ConfigSource::File(path.to_path_buf())));
        }

        if let Some(path) = default_config_path().filter(|p| p.is_file()) {
            let config = Self::load(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        debug!("No config file found, using built-in defaults");
        Ok((Self::default(), ConfigSource::BuiltIn))
    }

    /// Check catalog and promo invariants plus display settings
    pub fn validate(&self) -> StoreResult<()> {
        if self.store_name.trim().is_empty() {
            return Err(StoreError::Config("store_name must not be empty".to_string()));
        }
        self.catalog.validate()?;
        self.promo_codes.validate()?;
        Ok(())
    }

    /// Fresh empty cart over this config's catalog and promo codes
    pub fn new_cart(&self) -> CartEngine {
        CartEngine::new(
            Arc::new(self.catalog.clone()),
            Arc::new(self.promo_codes.clone()),
        )
    }

    /// Round and suffix an amount with this store's currency symbol
    pub fn format_price(&self, amount: f64) -> String {
        crate::types::format_price(amount, &self.currency_symbol)
    }
}

/// `<config_dir>/gamestore/store.json`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gamestore").join(CONFIG_FILE_NAME))
}
