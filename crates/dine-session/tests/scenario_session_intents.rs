//! Scenario: a full visit driven through intents.
//!
//! # Invariants under test
//! - Cart totals and ETA follow the sample menu prices and prep times.
//! - Entering `Waiting` clears the cart and the countdown equals ETA × 60.
//! - Rejected intents leave the view unchanged.
//! - Intents parse from the YAML script form used by the CLI.

use std::sync::Arc;

use dine_catalog::{sample_catalog, CategoryFilter, ItemId};
use dine_flow::{FlowError, OrderPhase};
use dine_session::{Intent, Session, SessionError, SessionSettings};

fn session() -> Session {
    Session::new(Arc::new(sample_catalog().unwrap()), &SessionSettings::default())
}

#[test]
fn pizza_and_drink_visit() {
    let mut s = session();
    for id in [1, 5, 1] {
        s.apply(Intent::AddItem { item_id: ItemId(id) }).unwrap();
    }
    let v = s.view();
    assert_eq!(v.cart.total, 335_000);
    assert_eq!(v.cart.item_count, 3);
    assert_eq!(v.cart.estimated_delivery_minutes, 40);
    let lines: Vec<(u32, u32)> = v.cart.lines.iter().map(|l| (l.item_id.0, l.quantity)).collect();
    assert_eq!(lines, vec![(1, 2), (5, 1)]);

    s.apply(Intent::ProceedToCheckout).unwrap();
    let before = s.view();
    let err = s.apply(Intent::SelectTable { table: 21 }).unwrap_err();
    assert_eq!(
        err,
        SessionError::Flow(FlowError::InvalidTable {
            table: 21,
            table_count: 20
        })
    );
    assert_eq!(s.view(), before);

    s.apply(Intent::SelectTable { table: 5 }).unwrap();
    s.apply(Intent::Continue).unwrap();
    assert_eq!(s.phase(), OrderPhase::Confirming);
    s.apply(Intent::ConfirmAndPay).unwrap();

    let v = s.view();
    assert_eq!(v.flow.phase, OrderPhase::Waiting);
    assert_eq!(v.cart.item_count, 0);
    assert_eq!(v.flow.remaining_seconds, Some(40 * 60));
    let order = v.flow.order.unwrap();
    assert_eq!(order.table_number, 5);
    assert_eq!(order.total, 335_000);
    assert_eq!(order.order_id.seq, 1);
}

#[test]
fn drink_filter_lists_only_drinks() {
    let mut s = session();
    s.apply(Intent::SetCategory {
        category: CategoryFilter::parse("drink"),
    })
    .unwrap();
    assert_eq!(s.view().visible_items, vec![ItemId(5)]);
}

#[test]
fn yaml_script_parses_into_intents() {
    let script = r#"
- { type: add_item, item_id: 2 }
- { type: toggle_favorite, item_id: 2 }
- { type: set_query, query: burger }
- type: proceed_to_checkout
- { type: select_table, table: 3 }
- type: continue
- type: confirm_and_pay
"#;
    let intents: Vec<Intent> = serde_yaml::from_str(script).unwrap();
    let mut s = session();
    for intent in intents {
        s.apply(intent).unwrap();
    }
    let v = s.view();
    assert_eq!(v.favorites, vec![ItemId(2)]);
    assert_eq!(v.visible_items, vec![ItemId(2)]);
    assert_eq!(v.flow.phase, OrderPhase::Waiting);
    assert_eq!(v.flow.remaining_seconds, Some((15 + 15) * 60));
}
