//! Cart events and user-facing notifications
//!
//! The cart engine broadcasts a [`CartEvent`] after every state change and
//! for every outcome the user should hear about. Front-ends subscribe to
//! re-render and to surface toasts.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  CartEvent                         Notification                 │
//! │  ├── ItemAdded       ───────────►  "Added to cart!"             │
//! │  ├── ItemRemoved                   (none)                       │
//! │  ├── PromoApplied    ───────────►  "Promo code activated!"      │
//! │  ├── PromoRejected   ───────────►  "Invalid promo code" (red)   │
//! │  └── CartCleared                   (none)                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use crate::types::ItemId;

/// How a notification should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    /// Failed user action, shown in the danger color
    Destructive,
}

/// A transient toast message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Events emitted by the cart engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// An item was added, or its quantity incremented
    ItemAdded {
        item_id: ItemId,
        name: String,
        /// Quantity of the line after the add
        quantity: u32,
    },
    /// A line was removed entirely
    ItemRemoved { item_id: ItemId, name: String },
    /// A promo code matched and is now active
    PromoApplied {
        /// Normalized code
        code: String,
        percent: u8,
    },
    /// A promo code did not match; cart state is unchanged
    PromoRejected {
        /// Code as entered by the user
        code: String,
    },
    /// All lines were removed
    CartCleared,
}

impl CartEvent {
    /// Toast to show for this event, if the user should see one
    pub fn notification(&self) -> Option<Notification> {
        match self {
            CartEvent::ItemAdded { name, .. } => {
                Some(Notification::info("Added to cart!", format!("{} added", name)))
            }
            CartEvent::PromoApplied { percent, .. } => Some(Notification::info(
                "Promo code activated!",
                format!("{}% discount applied", percent),
            )),
            CartEvent::PromoRejected { .. } => Some(Notification::destructive(
                "Invalid promo code",
                "Try another code",
            )),
            CartEvent::ItemRemoved { .. } | CartEvent::CartCleared => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_added_notification_names_item() {
        let event = CartEvent::ItemAdded {
            item_id: ItemId(1),
            name: "VIP Status".to_string(),
            quantity: 1,
        };
        let note = event.notification().unwrap();
        assert_eq!(note.title, "Added to cart!");
        assert_eq!(note.description, "VIP Status added");
        assert!(!note.is_destructive());
    }

    #[test]
    fn test_promo_notifications() {
        let applied = CartEvent::PromoApplied {
            code: "VIP50".to_string(),
            percent: 50,
        };
        assert_eq!(
            applied.notification().unwrap().description,
            "50% discount applied"
        );

        let rejected = CartEvent::PromoRejected {
            code: "FAKE123".to_string(),
        };
        let note = rejected.notification().unwrap();
        assert!(note.is_destructive());
        assert_eq!(note.to_string(), "Invalid promo code: Try another code");
    }

    #[test]
    fn test_silent_events() {
        let removed = CartEvent::ItemRemoved {
            item_id: ItemId(2),
            name: "Premium VIP".to_string(),
        };
        assert!(removed.notification().is_none());
        assert!(CartEvent::CartCleared.notification().is_none());
    }
}
