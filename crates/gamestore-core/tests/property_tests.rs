//! Property-based tests for CartEngine operations
//!
//! Uses proptest to verify cart invariants over random operation sequences.

use std::collections::HashSet;

use proptest::prelude::*;
use gamestore_core::{CartEngine, CartEvent, ItemId, PromoTable};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Ids 1..=6 hit the default catalog; 7..=9 do not exist
fn item_id_strategy() -> impl Strategy<Value = ItemId> {
    (1u32..=9).prop_map(ItemId)
}

/// Mix of known codes in random case and garbage
fn promo_code_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["GAME2024", "newbie", "Vip50", "vip50"]).prop_map(String::from),
        prop::string::string_regex("[A-Z0-9]{0,10}").expect("valid regex"),
    ]
}

/// Operations that can be performed on a cart
#[derive(Debug, Clone)]
enum CartOp {
    Add(ItemId),
    Remove(ItemId),
    Promo(String),
}

/// Generate a sequence of cart operations
fn cart_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<CartOp>> {
    prop::collection::vec(
        prop_oneof![
            4 => item_id_strategy().prop_map(CartOp::Add),
            2 => item_id_strategy().prop_map(CartOp::Remove),
            1 => promo_code_strategy().prop_map(CartOp::Promo),
        ],
        0..max_ops,
    )
}

fn apply(cart: &mut CartEngine, op: &CartOp) {
    match op {
        CartOp::Add(id) => {
            // Unknown ids are rejected without touching the cart
            let _ = cart.add_item_by_id(*id);
        }
        CartOp::Remove(id) => {
            cart.remove_item(*id);
        }
        CartOp::Promo(code) => {
            cart.apply_promo_code(code);
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// No item id ever appears on two lines
    #[test]
    fn lines_are_unique_per_id(ops in cart_ops_strategy(60)) {
        let mut cart = CartEngine::with_defaults();
        for op in &ops {
            apply(&mut cart, op);
            let ids: HashSet<ItemId> = cart.lines().iter().map(|l| l.id()).collect();
            prop_assert_eq!(ids.len(), cart.line_count());
        }
    }

    /// Every line has quantity >= 1
    #[test]
    fn quantities_are_positive(ops in cart_ops_strategy(60)) {
        let mut cart = CartEngine::with_defaults();
        for op in &ops {
            apply(&mut cart, op);
        }
        prop_assert!(cart.lines().iter().all(|l| l.quantity >= 1));
    }

    /// Adding the same item n times yields one line of quantity n
    #[test]
    fn repeated_add_increments(id in 1u32..=6, n in 1u32..20) {
        let mut cart = CartEngine::with_defaults();
        for _ in 0..n {
            cart.add_item_by_id(ItemId(id)).unwrap();
        }
        prop_assert_eq!(cart.line_count(), 1);
        prop_assert_eq!(cart.lines()[0].quantity, n);
    }

    /// Totals are never negative and never exceed the subtotal
    #[test]
    fn total_bounded_by_subtotal(ops in cart_ops_strategy(60)) {
        let mut cart = CartEngine::with_defaults();
        for op in &ops {
            apply(&mut cart, op);
        }
        let total = cart.compute_total();
        prop_assert!(total >= 0.0);
        prop_assert!(total <= cart.subtotal() + 1e-9);
        prop_assert!(cart.savings() >= -1e-9);
    }

    /// The promo discount always comes from the table (or is 0)
    #[test]
    fn promo_discount_only_from_table(ops in cart_ops_strategy(40)) {
        let table = PromoTable::default();
        let mut cart = CartEngine::with_defaults();
        for op in &ops {
            apply(&mut cart, op);
        }
        let discount = cart.promo_discount();
        match cart.active_promo() {
            Some(code) => prop_assert_eq!(table.lookup(code), Some(discount)),
            None => prop_assert_eq!(discount, 0),
        }
    }

    /// A rejected code changes nothing
    #[test]
    fn unknown_code_is_inert(
        ops in cart_ops_strategy(30),
        garbage in "[QXZ]{3,8}[0-9]{0,3}",
    ) {
        let mut cart = CartEngine::with_defaults();
        for op in &ops {
            apply(&mut cart, op);
        }
        let lines = cart.lines().to_vec();
        let discount = cart.promo_discount();
        let total = cart.compute_total();

        let outcome = cart.apply_promo_code(&garbage);
        prop_assert!(!outcome.is_applied());
        prop_assert_eq!(cart.lines(), lines.as_slice());
        prop_assert_eq!(cart.promo_discount(), discount);
        prop_assert_eq!(cart.compute_total(), total);
    }

    /// Each effective operation produces exactly one event
    #[test]
    fn one_event_per_effective_op(ops in cart_ops_strategy(40)) {
        let mut cart = CartEngine::with_defaults();
        let mut events = cart.subscribe_events();
        let mut expected = 0usize;

        for op in &ops {
            let was_present = match op {
                CartOp::Remove(id) => cart.line(*id).is_some(),
                _ => false,
            };
            apply(&mut cart, op);
            expected += match op {
                CartOp::Add(id) => usize::from(id.get() <= 6),
                CartOp::Remove(_) => usize::from(was_present),
                CartOp::Promo(_) => 1,
            };
        }

        let mut received = Vec::new();
        while let Ok(event) = events.try_recv() {
            received.push(event);
        }
        prop_assert_eq!(received.len(), expected);
        prop_assert!(received.iter().all(|e| !matches!(e, CartEvent::CartCleared)));
    }
}
