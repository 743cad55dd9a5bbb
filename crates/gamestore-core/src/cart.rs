//! Cart engine - the in-memory shopping cart
//!
//! `CartEngine` owns the session's cart lines and active promo discount. The
//! catalog and promo table are injected at construction and only read.
//!
//! Every operation runs to completion synchronously. After each state change
//! (and after a rejected promo code) the engine broadcasts a [`CartEvent`]
//! so front-ends can re-render and show notifications.
//!
//! # Example
//!
//! ```
//! use gamestore_core::{CartEngine, ItemId, PromoOutcome};
//!
//! let mut cart = CartEngine::with_defaults();
//! cart.add_item_by_id(ItemId(1)).unwrap();
//! cart.add_item_by_id(ItemId(3)).unwrap();
//! cart.add_item_by_id(ItemId(3)).unwrap();
//! assert!((cart.compute_total() - 597.2).abs() < 1e-9);
//!
//! assert_eq!(cart.apply_promo_code("vip50"), PromoOutcome::Applied { code: "VIP50".into(), percent: 50 });
//! assert!((cart.compute_total() - 298.6).abs() < 1e-9);
//! ```

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::error::{StoreError, StoreResult};
use crate::events::CartEvent;
use crate::promo::{self, PromoTable};
use crate::types::{apply_percent_off, CartLine, CatalogItem, ItemId};

/// Default capacity for the event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Receiving end of a cart's event stream
pub type CartEventReceiver = broadcast::Receiver<CartEvent>;

pub use broadcast::error::TryRecvError;

/// Result of entering a promo code
///
/// A rejected code is a user-input outcome, not an error: the cart is left
/// as it was and the user can simply try again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromoOutcome {
    /// Code matched; the discount is now active
    Applied { code: String, percent: u8 },
    /// Code did not match; nothing changed
    Rejected { code: String },
}

impl PromoOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, PromoOutcome::Applied { .. })
    }
}

/// In-memory cart for one storefront session
pub struct CartEngine {
    /// Static catalog, shared with the view layer
    catalog: Arc<Catalog>,
    /// Static promo table
    promos: Arc<PromoTable>,
    /// Cart lines in first-added order, at most one per item id
    lines: Vec<CartLine>,
    /// Active promo percentage, 0 when none
    promo_discount: u8,
    /// Normalized code behind `promo_discount`
    active_promo: Option<String>,
    /// Event broadcast channel for notifying subscribers
    event_tx: broadcast::Sender<CartEvent>,
}

impl CartEngine {
    /// Create an empty cart over the given catalog and promo table
    pub fn new(catalog: Arc<Catalog>, promos: Arc<PromoTable>) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        debug!(
            items = catalog.len(),
            promo_codes = promos.len(),
            "Creating cart engine"
        );
        Self {
            catalog,
            promos,
            lines: Vec::new(),
            promo_discount: 0,
            active_promo: None,
            event_tx,
        }
    }

    /// Empty cart over the built-in catalog and promo codes
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(Catalog::default()), Arc::new(PromoTable::default()))
    }

    /// The catalog this cart sells from
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Mutations
    // ═══════════════════════════════════════════════════════════════════════

    /// Add one unit of `item`
    ///
    /// Increments the existing line for `item.id`, or appends a new line with
    /// quantity 1. Returns the line's quantity after the add.
    pub fn add_item(&mut self, item: &CatalogItem) -> u32 {
        let quantity = match self.lines.iter_mut().find(|line| line.id() == item.id) {
            Some(line) => {
                line.quantity += 1;
                line.quantity
            }
            None => {
                self.lines.push(CartLine::new(item.clone()));
                1
            }
        };

        debug!(item_id = %item.id, quantity, "Added item to cart");
        self.emit(CartEvent::ItemAdded {
            item_id: item.id,
            name: item.name.clone(),
            quantity,
        });
        quantity
    }

    /// Add one unit of the catalog item with `id`
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ItemNotFound` if the catalog has no such item.
    pub fn add_item_by_id(&mut self, id: ItemId) -> StoreResult<u32> {
        let catalog = Arc::clone(&self.catalog);
        let item = catalog.get(id).ok_or(StoreError::ItemNotFound(id))?;
        Ok(self.add_item(item))
    }

    /// Remove the whole line for `id`
    ///
    /// Removing an id that is not in the cart is a no-op and emits nothing.
    pub fn remove_item(&mut self, id: ItemId) -> Option<CartLine> {
        let index = self.lines.iter().position(|line| line.id() == id)?;
        let line = self.lines.remove(index);

        debug!(item_id = %id, quantity = line.quantity, "Removed line from cart");
        self.emit(CartEvent::ItemRemoved {
            item_id: id,
            name: line.item.name.clone(),
        });
        Some(line)
    }

    /// Look up `code` and activate its discount
    ///
    /// Matching is case-insensitive. A new valid code replaces the current
    /// one. An unknown code leaves the cart untouched.
    pub fn apply_promo_code(&mut self, code: &str) -> PromoOutcome {
        match self.promos.lookup(code) {
            Some(percent) => {
                let normalized = promo::normalize(code);
                self.promo_discount = percent;
                self.active_promo = Some(normalized.clone());

                info!(code = %normalized, percent, "Promo code applied");
                self.emit(CartEvent::PromoApplied {
                    code: normalized.clone(),
                    percent,
                });
                PromoOutcome::Applied {
                    code: normalized,
                    percent,
                }
            }
            None => {
                warn!(code, "Rejected unknown promo code");
                self.emit(CartEvent::PromoRejected {
                    code: code.to_string(),
                });
                PromoOutcome::Rejected {
                    code: code.to_string(),
                }
            }
        }
    }

    /// Remove every line. The active promo stays applied.
    pub fn clear(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        self.lines.clear();
        debug!("Cleared cart");
        self.emit(CartEvent::CartCleared);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Derived values
    // ═══════════════════════════════════════════════════════════════════════

    /// Sum of discounted line totals, before the promo
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Amount to pay
    ///
    /// Item discounts apply first; the promo discount then applies to the
    /// already-discounted sum. Zero for an empty cart.
    pub fn compute_total(&self) -> f64 {
        apply_percent_off(self.subtotal(), self.promo_discount)
    }

    /// Base price of everything in the cart minus the amount to pay
    pub fn savings(&self) -> f64 {
        let base: f64 = self.lines.iter().map(CartLine::base_total).sum();
        base - self.compute_total()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    /// Number of distinct lines, as shown on the cart badge
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Active promo percentage, 0 when none
    pub fn promo_discount(&self) -> u8 {
        self.promo_discount
    }

    /// Normalized code of the active promo
    pub fn active_promo(&self) -> Option<&str> {
        self.active_promo.as_deref()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Events
    // ═══════════════════════════════════════════════════════════════════════

    /// Subscribe to cart events
    ///
    /// Every mutation sends exactly one event after the state has changed.
    /// Multiple subscribers can exist; events are broadcast to all.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut events = cart.subscribe_events();
    ///
    /// cart.apply_promo_code("FAKE123");
    /// if let Ok(event) = events.try_recv() {
    ///     if let Some(note) = event.notification() {
    ///         println!("{}", note);
    ///     }
    /// }
    /// ```
    pub fn subscribe_events(&self) -> CartEventReceiver {
        self.event_tx.subscribe()
    }

    fn emit(&self, event: CartEvent) {
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}

impl std::fmt::Debug for CartEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartEngine")
            .field("lines", &self.lines)
            .field("promo_discount", &self.promo_discount)
            .field("active_promo", &self.active_promo)
            .finish_non_exhaustive()
    }
}
