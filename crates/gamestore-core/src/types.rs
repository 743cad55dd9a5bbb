//! Core types for GameStore

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Unique identifier for a catalog item
///
/// Always positive; `Catalog::validate` rejects zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Get the raw numeric id
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let raw = trimmed.strip_prefix('#').unwrap_or(trimmed);
        raw.parse().map(ItemId)
    }
}

/// Product category, one tab per variant in the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vip,
    Currency,
    Items,
    Special,
}

impl Category {
    /// All categories in tab order
    pub const ALL: [Category; 4] = [
        Category::Vip,
        Category::Currency,
        Category::Items,
        Category::Special,
    ];

    /// Machine name, as used in config files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vip => "vip",
            Category::Currency => "currency",
            Category::Items => "items",
            Category::Special => "special",
        }
    }

    /// Human-readable tab label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Vip => "VIP",
            Category::Currency => "Currency",
            Category::Items => "Items",
            Category::Special => "Deals",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| StoreError::UnknownCategory(s.to_string()))
    }
}

/// Catalog filter selected by the category tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Every item, in declared order
    #[default]
    All,
    /// Only items of one category
    Only(Category),
}

impl CategoryFilter {
    /// All filters in tab order, starting with `All`
    pub fn tabs() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    /// Whether an item of `category` passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = StoreError;

    /// Parses `"all"` or a category name. Matching is exact.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// A purchasable product definition
///
/// Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Base price in whole currency units
    pub price: u32,
    /// Item-level markdown in percent, in `[0, 100)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
    pub category: Category,
    /// Display glyph
    pub image: String,
}

impl CatalogItem {
    /// Create an item without an item-level discount
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        price: u32,
        category: Category,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId(id),
            name: name.into(),
            description: description.into(),
            price,
            discount: None,
            category,
            image: image.into(),
        }
    }

    /// Builder-style setter for the item-level discount
    pub fn with_discount(mut self, percent: u8) -> Self {
        self.discount = Some(percent);
        self
    }

    /// The discount that actually applies. `Some(0)` counts as no discount.
    pub fn active_discount(&self) -> Option<u8> {
        self.discount.filter(|d| *d > 0)
    }

    /// Price of one unit after the item-level discount
    pub fn unit_price(&self) -> f64 {
        match self.active_discount() {
            Some(percent) => apply_percent_off(f64::from(self.price), percent),
            None => f64::from(self.price),
        }
    }
}

/// One catalog item plus the quantity selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: CatalogItem,
    /// Always at least 1; a line is removed rather than decremented to 0
    pub quantity: u32,
}

impl CartLine {
    pub fn new(item: CatalogItem) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn id(&self) -> ItemId {
        self.item.id
    }

    /// Discounted unit price times quantity
    pub fn line_total(&self) -> f64 {
        self.item.unit_price() * f64::from(self.quantity)
    }

    /// Base price times quantity, before any discount
    pub fn base_total(&self) -> f64 {
        f64::from(self.item.price) * f64::from(self.quantity)
    }
}

/// `amount * (1 - percent/100)`
pub fn apply_percent_off(amount: f64, percent: u8) -> f64 {
    amount * (1.0 - f64::from(percent) / 100.0)
}

/// Round to whole currency units for display, halves away from zero
pub fn format_price(amount: f64, currency_symbol: &str) -> String {
    format!("{}{}", amount.round() as i64, currency_symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword() -> CatalogItem {
        CatalogItem::new(5, "Legendary Sword", "Unique weapon", 299, Category::Items, "⚔️")
    }

    #[test]
    fn test_item_id_display_and_parse() {
        assert_eq!(ItemId(7).to_string(), "#7");
        assert_eq!("7".parse::<ItemId>().unwrap(), ItemId(7));
        assert_eq!("#7".parse::<ItemId>().unwrap(), ItemId(7));
        assert!("seven".parse::<ItemId>().is_err());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("vip".parse::<Category>().unwrap(), Category::Vip);
        assert_eq!("special".parse::<Category>().unwrap(), Category::Special);
        assert!(matches!(
            "VIP".parse::<Category>(),
            Err(StoreError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "currency".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Currency)
        );
        assert!("weapons".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_category_filter_tabs() {
        let tabs = CategoryFilter::tabs();
        assert_eq!(tabs.len(), 5);
        assert_eq!(tabs[0], CategoryFilter::All);
        let labels: Vec<_> = tabs.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["All", "VIP", "Currency", "Items", "Deals"]);
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&Category::Currency).unwrap();
        assert_eq!(json, "\"currency\"");
    }

    #[test]
    fn test_unit_price_without_discount() {
        assert_eq!(sword().unit_price(), 299.0);
    }

    #[test]
    fn test_unit_price_with_discount() {
        let item = sword().with_discount(30);
        assert!((item.unit_price() - 209.3).abs() < 1e-9);
    }

    #[test]
    fn test_zero_discount_is_no_discount() {
        let item = sword().with_discount(0);
        assert_eq!(item.active_discount(), None);
        assert_eq!(item.unit_price(), 299.0);
    }

    #[test]
    fn test_line_totals() {
        let mut line = CartLine::new(sword().with_discount(10));
        line.quantity = 3;
        assert!((line.line_total() - 807.3).abs() < 1e-9);
        assert_eq!(line.base_total(), 897.0);
    }

    #[test]
    fn test_format_price_rounds() {
        assert_eq!(format_price(298.6, "₽"), "299₽");
        assert_eq!(format_price(597.2, "₽"), "597₽");
        assert_eq!(format_price(0.0, "$"), "0$");
    }
}
