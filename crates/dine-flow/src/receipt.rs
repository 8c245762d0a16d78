use chrono::{DateTime, Utc};
use dine_cart::{Cart, CartLineView};
use serde::{Deserialize, Serialize};

use crate::order_id::OrderId;

/// Snapshot of the cart taken at the moment an order is placed.
///
/// Built before the cart is cleared; it is the only record of what was
/// ordered while the diner waits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub order_id: OrderId,
    pub table_number: u32,
    pub lines: Vec<CartLineView>,
    pub total: u64,
    pub item_count: u32,
    pub eta_minutes: u32,
    pub placed_at: DateTime<Utc>,
}

impl PlacedOrder {
    pub fn from_cart(
        order_id: OrderId,
        table_number: u32,
        cart: &Cart,
        placed_at: DateTime<Utc>,
    ) -> Self {
        let snap = cart.snapshot();
        Self {
            order_id,
            table_number,
            lines: snap.lines,
            total: snap.total,
            item_count: snap.item_count,
            eta_minutes: snap.estimated_delivery_minutes,
            placed_at,
        }
    }
}
