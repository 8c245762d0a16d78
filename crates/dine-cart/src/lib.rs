//! dine-cart
//!
//! Diner-side mutable state that lives for one session:
//! - [`Cart`]: quantity-per-item ledger with derived total / count / ETA
//! - [`FavoriteSet`]: toggle-membership store, independent of the cart
//! - Pure deterministic logic (no IO, no time)

pub mod favorites;
pub mod ledger;

pub use favorites::FavoriteSet;
pub use ledger::{Cart, CartLine, CartLineView, CartSnapshot};

/// Fixed preparation/serving overhead added to the slowest item's prep time.
pub const SERVING_OVERHEAD_MINUTES: u32 = 15;
