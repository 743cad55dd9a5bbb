//! Static product catalog
//!
//! The catalog is loaded once at startup (built in, or from the store config
//! file) and never mutated afterwards. The cart engine holds it behind an
//! `Arc` and only ever reads it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::types::{CatalogItem, Category, CategoryFilter, ItemId};

/// Ordered list of purchasable items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog, checking ids, prices and discounts
    pub fn new(items: Vec<CatalogItem>) -> StoreResult<Self> {
        let catalog = Self { items };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check catalog invariants
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidCatalog` for a zero id, a duplicate id,
    /// a zero price, or a discount of 100% or more.
    pub fn validate(&self) -> StoreResult<()> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if item.id.get() == 0 {
                return Err(StoreError::InvalidCatalog(format!(
                    "item '{}' has id 0",
                    item.name
                )));
            }
            if !seen.insert(item.id) {
                return Err(StoreError::InvalidCatalog(format!(
                    "duplicate item id {}",
                    item.id
                )));
            }
            if item.price == 0 {
                return Err(StoreError::InvalidCatalog(format!(
                    "item {} has zero price",
                    item.id
                )));
            }
            if let Some(discount) = item.discount {
                if discount >= 100 {
                    return Err(StoreError::InvalidCatalog(format!(
                        "item {} has discount {}%",
                        item.id, discount
                    )));
                }
            }
        }
        Ok(())
    }

    /// All items in declared order
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id
    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items passing `filter`, in declared order
    ///
    /// `CategoryFilter::All` returns the whole catalog.
    pub fn filter_by_category(&self, filter: CategoryFilter) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|item| filter.matches(item.category))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            items: vec![
                CatalogItem::new(
                    1,
                    "VIP Status",
                    "Exclusive privileges for 30 days",
                    499,
                    Category::Vip,
                    "⭐",
                )
                .with_discount(20),
                CatalogItem::new(
                    2,
                    "Premium VIP",
                    "All privileges plus bonuses",
                    999,
                    Category::Vip,
                    "👑",
                ),
                CatalogItem::new(3, "1000 Crystals", "In-game currency", 99, Category::Currency, "💎"),
                CatalogItem::new(
                    4,
                    "5000 Crystals",
                    "In-game currency plus a 10% bonus",
                    449,
                    Category::Currency,
                    "💎",
                )
                .with_discount(10),
                CatalogItem::new(
                    5,
                    "Legendary Sword",
                    "Unique weapon with special effects",
                    299,
                    Category::Items,
                    "⚔️",
                ),
                CatalogItem::new(
                    6,
                    "Starter Pack",
                    "Everything you need to get started",
                    199,
                    Category::Special,
                    "🎁",
                )
                .with_discount(30),
            ],
        }
    }
}
