//! Cart ledger: quantity-per-item state with derived totals.
//!
//! # Invariants
//! - At most one [`CartLine`] per item id.
//! - Every line has `quantity >= 1`; a line reaching zero is removed.
//! - Lines keep insertion order; an existing line is never moved.
//!
//! Totals, item count and ETA are recomputed on every read. Nothing derived
//! is stored, so no mutation can leave a stale total behind.
//!
//! # Usage
//! ```ignore
//! let mut cart = Cart::new();
//! cart.add_item(&pizza);
//! cart.add_item(&cola);
//! assert_eq!(cart.item_count(), 2);
//! ```

use std::sync::Arc;

use dine_catalog::{ItemId, MenuItem};
use serde::{Deserialize, Serialize};

use crate::SERVING_OVERHEAD_MINUTES;

// ---------------------------------------------------------------------------
// CartLine
// ---------------------------------------------------------------------------

/// One (item, quantity) pairing. Only the ledger can construct or mutate it.
#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    item: Arc<MenuItem>,
    quantity: u32,
}

impl CartLine {
    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    pub fn item_id(&self) -> ItemId {
        self.item.id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price × quantity`, saturating.
    pub fn line_total(&self) -> u64 {
        self.item.price.saturating_mul(u64::from(self.quantity))
    }
}

// ---------------------------------------------------------------------------
// Snapshot (read model for the presentation layer)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineView {
    pub item_id: ItemId,
    pub name: String,
    pub unit_price: u64,
    pub quantity: u32,
    pub line_total: u64,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            item_id: line.item.id,
            name: line.item.name.clone(),
            unit_price: line.item.price,
            quantity: line.quantity,
            line_total: line.line_total(),
        }
    }
}

/// Point-in-time copy of the cart and its derived values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub lines: Vec<CartLineView>,
    pub total: u64,
    pub item_count: u32,
    pub estimated_delivery_minutes: u32,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Cart
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    serving_overhead_minutes: u32,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Empty cart using the default serving overhead.
    pub fn new() -> Self {
        Self::with_serving_overhead(SERVING_OVERHEAD_MINUTES)
    }

    /// Empty cart with a custom fixed overhead added to the ETA.
    pub fn with_serving_overhead(minutes: u32) -> Self {
        Self {
            lines: Vec::new(),
            serving_overhead_minutes: minutes,
        }
    }

    // -----------------------------------------------------------------------
    // Write surface
    // -----------------------------------------------------------------------

    /// Add one unit of `item`. Returns the line's new quantity.
    pub fn add_item(&mut self, item: &Arc<MenuItem>) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }
        self.lines.push(CartLine {
            item: Arc::clone(item),
            quantity: 1,
        });
        1
    }

    /// Remove one unit of `id`. Returns the remaining quantity (0 when the
    /// line is gone or never existed). Unknown ids are a silent no-op.
    pub fn remove_item(&mut self, id: ItemId) -> u32 {
        let Some(idx) = self.lines.iter().position(|l| l.item.id == id) else {
            return 0;
        };
        if self.lines[idx].quantity > 1 {
            self.lines[idx].quantity -= 1;
            self.lines[idx].quantity
        } else {
            self.lines.remove(idx);
            0
        }
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    // -----------------------------------------------------------------------
    // Read surface
    // -----------------------------------------------------------------------

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity of `id` in the cart (0 if absent).
    pub fn quantity_of(&self, id: ItemId) -> u32 {
        self.lines
            .iter()
            .find(|l| l.item.id == id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    /// Σ price × quantity over all lines.
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(l.line_total()))
    }

    /// Σ quantity over all lines.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Slowest prep time in the cart plus the serving overhead; 0 when empty.
    pub fn estimated_delivery_minutes(&self) -> u32 {
        self.lines
            .iter()
            .map(|l| l.item.prep_time)
            .max()
            .map(|slowest| slowest.saturating_add(self.serving_overhead_minutes))
            .unwrap_or(0)
    }

    pub fn serving_overhead_minutes(&self) -> u32 {
        self.serving_overhead_minutes
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.iter().map(CartLineView::from).collect(),
            total: self.total(),
            item_count: self.item_count(),
            estimated_delivery_minutes: self.estimated_delivery_minutes(),
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
