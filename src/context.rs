//! Shared storefront state for GameStore.
//!
//! Provides the store config, the session cart and the toast queue to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut cart = use_cart();
//! cart.write().add_item(&item);
//!
//! let total = cart.read().compute_total();
//! ```

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dioxus::prelude::*;
use gamestore_core::{CartEngine, Notification, StoreConfig};

/// Most toasts shown at once; older ones are dropped first
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// Get the store configuration resolved at startup.
pub fn get_store_config() -> StoreConfig {
    crate::get_store_config()
}

/// Hook to access the static store configuration.
pub fn use_store_config() -> Rc<StoreConfig> {
    use_context::<Rc<StoreConfig>>()
}

/// Hook to access the session cart.
///
/// Writing through the signal re-renders every component that read it, so
/// totals and badges stay current without any extra wiring.
pub fn use_cart() -> Signal<CartEngine> {
    use_context::<Signal<CartEngine>>()
}

/// A notification currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Hook to access the toast queue (newest last).
pub fn use_toasts() -> Signal<Vec<Toast>> {
    use_context::<Signal<Vec<Toast>>>()
}

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

/// Show `notification` and schedule its removal after `duration_ms`.
pub fn push_toast(mut toasts: Signal<Vec<Toast>>, notification: Notification, duration_ms: u64) {
    let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);

    enqueue_toast(&mut toasts.write(), Toast { id, notification });

    spawn(async move {
        tokio::time::sleep(Duration::from_millis(duration_ms)).await;
        dismiss_toast(toasts, id);
    });
}

/// Append `toast`, dropping the oldest ones past [`MAX_VISIBLE_TOASTS`].
fn enqueue_toast(queue: &mut Vec<Toast>, toast: Toast) {
    queue.push(toast);
    if queue.len() > MAX_VISIBLE_TOASTS {
        let excess = queue.len() - MAX_VISIBLE_TOASTS;
        queue.drain(..excess);
    }
}

/// Remove a toast before its timer runs out.
pub fn dismiss_toast(mut toasts: Signal<Vec<Toast>>, id: u64) {
    toasts.write().retain(|toast| toast.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast {
            id,
            notification: Notification::info("Added to cart!", format!("item {} added", id)),
        }
    }

    #[test]
    fn queue_keeps_newest_toasts() {
        let mut queue = Vec::new();
        for id in 1..=5 {
            enqueue_toast(&mut queue, toast(id));
        }
        let ids: Vec<u64> = queue.iter().map(|t| t.id).collect();
        assert_eq!(ids, [3, 4, 5]);
    }

    #[test]
    fn queue_under_cap_is_untouched() {
        let mut queue = Vec::new();
        enqueue_toast(&mut queue, toast(1));
        enqueue_toast(&mut queue, toast(2));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue[0].id, 1);
    }
}
