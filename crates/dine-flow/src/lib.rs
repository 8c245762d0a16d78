//! dine-flow
//!
//! The checkout sequence as an explicit state machine:
//! Browsing → SelectingTable → Confirming → Waiting → Browsing.
//! - [`OrderFlow`]: phases, table choice, the active order and its countdown
//! - [`OrderIdGenerator`]: monotonic per-session ids with a UUID v5 identity
//! - [`PlacedOrder`]: cart snapshot taken when the order is placed
//!
//! Pure deterministic logic: no IO, no clock reads, no timers. The caller
//! stamps `placed_at` and delivers ticks.

pub mod countdown;
pub mod order_id;
pub mod receipt;
pub mod state_machine;

pub use countdown::{Countdown, TickOutcome};
pub use order_id::{OrderId, OrderIdGenerator, FIRST_ORDER_SEQ};
pub use receipt::PlacedOrder;
pub use state_machine::{FlowError, FlowEvent, FlowOutcome, FlowView, OrderFlow, OrderPhase};
