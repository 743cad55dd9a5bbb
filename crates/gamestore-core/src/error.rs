//! Error types for GameStore

use thiserror::Error;

use crate::types::ItemId;

/// Main error type for GameStore operations
///
/// Cart operations themselves are total; these cover the edges where
/// outside input enters the system (ids typed on a command line, category
/// names, config files).
#[derive(Error, Debug)]
pub enum StoreError {
    /// No catalog item carries this id
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// Category name is not one of the known filters
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Catalog data violates an invariant (duplicate id, zero price, ...)
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Promo table entry is malformed
    #[error("Invalid promo code: {0}")]
    InvalidPromo(String),

    /// Configuration could not be resolved
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using StoreError
pub type StoreResult<T> = Result<T, StoreError>;
