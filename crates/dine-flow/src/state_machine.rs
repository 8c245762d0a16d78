//! Order flow state machine.
//!
//! # Design
//!
//! Explicit state machine for one diner's checkout. Every user intent (and the
//! countdown tick) is applied via [`OrderFlow::apply`], which enforces:
//!
//! 1. **Legal transitions only.** Anything not in the table below returns
//!    [`FlowError`] and leaves the flow untouched.
//! 2. **Guards before effects.** A guard failure (empty cart, bad table, no
//!    table chosen) is checked before any field changes.
//!
//! # State diagram
//!
//! ```text
//!              ProceedToCheckout (cart non-empty)
//!   Browsing ─────────────────────────────────► SelectingTable ◄─┐ SelectTable(n)
//!      ▲  ▲               Back                   │    ▲    └────┘
//!      │  └──────────────────────────────────────┘    │
//!      │                                    Continue   │ Back
//!      │                                 (table set)   │
//!      │                                       ▼       │
//!      │                                   Confirming ─┘
//!      │                                       │
//!      │ ReturnToMenu                ConfirmAndPay (clears cart)
//!      │                                       ▼
//!      └──────────────────────────────────── Waiting ◄─┐ Tick (remaining > 0)
//!                                                 └────┘
//! ```
//!
//! Reaching zero inside `Waiting` does not leave the state; only
//! `ReturnToMenu` does.

use chrono::{DateTime, Utc};
use dine_cart::Cart;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::countdown::{Countdown, TickOutcome};
use crate::order_id::{OrderId, OrderIdGenerator};
use crate::receipt::PlacedOrder;

// ---------------------------------------------------------------------------
// OrderPhase
// ---------------------------------------------------------------------------

/// Which screen of the ordering flow is active.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderPhase {
    /// Browsing the menu and editing the cart.
    #[default]
    Browsing,
    /// Choosing a table.
    SelectingTable,
    /// Reviewing the order before paying.
    Confirming,
    /// Order placed; counting down until it is ready.
    Waiting,
}

impl OrderPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Browsing => "browsing",
            Self::SelectingTable => "selecting_table",
            Self::Confirming => "confirming",
            Self::Waiting => "waiting",
        }
    }
}

// ---------------------------------------------------------------------------
// FlowEvent
// ---------------------------------------------------------------------------

/// Events that drive an [`OrderFlow`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowEvent {
    /// Leave the menu for table selection.
    ProceedToCheckout,
    /// Pick table `n` (stays in `SelectingTable`).
    SelectTable(u32),
    /// Move on to confirmation once a table is chosen.
    Continue,
    /// Step back one screen.
    Back,
    /// Place the order. `placed_at` is stamped by the caller.
    ConfirmAndPay { placed_at: DateTime<Utc> },
    /// One second of countdown elapsed for `order_id`.
    Tick { order_id: OrderId },
    /// Leave the waiting screen and start over.
    ReturnToMenu,
}

// ---------------------------------------------------------------------------
// FlowError
// ---------------------------------------------------------------------------

/// Returned when an event is rejected. The flow and cart are unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// Nothing in the cart. Raised by `ProceedToCheckout` and again by
    /// `ConfirmAndPay`, since the cart stays editable while confirming.
    EmptyCart,
    /// Table outside `1..=table_count`.
    InvalidTable { table: u32, table_count: u32 },
    /// `Continue` before any table was chosen.
    NoTableSelected,
    /// Tick for an order that is not the one being waited on.
    StaleTick { order_id: OrderId },
    /// The event is not legal in the current phase.
    IllegalTransition { from: OrderPhase, event: String },
}

impl std::fmt::Display for FlowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCart => write!(f, "cannot check out an empty cart"),
            Self::InvalidTable { table, table_count } => {
                write!(f, "table {table} is not in 1..={table_count}")
            }
            Self::NoTableSelected => write!(f, "choose a table before continuing"),
            Self::StaleTick { order_id } => {
                write!(f, "stale countdown tick for order {order_id}")
            }
            Self::IllegalTransition { from, event } => {
                write!(f, "illegal order flow transition: {} + {}", from.as_str(), event)
            }
        }
    }
}

impl std::error::Error for FlowError {}

// ---------------------------------------------------------------------------
// FlowOutcome
// ---------------------------------------------------------------------------

/// What an accepted event did. Drives side effects in the session owner
/// (starting or stopping the countdown timer, logging).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowOutcome {
    PhaseChanged { from: OrderPhase, to: OrderPhase },
    TableSelected { table: u32 },
    OrderPlaced(PlacedOrder),
    Ticked { remaining_seconds: u64 },
    CountdownFinished { order_id: OrderId },
    /// Tick after the countdown already reached zero.
    CountdownIdle,
    OrderClosed { order_id: OrderId },
}

// ---------------------------------------------------------------------------
// Active order
// ---------------------------------------------------------------------------

/// The order being waited on. Exists only in `Waiting`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ActiveOrder {
    pub placed: PlacedOrder,
    pub countdown: Countdown,
}

/// Serializable read model of the flow for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowView {
    pub phase: OrderPhase,
    pub table_number: Option<u32>,
    pub table_count: u32,
    pub order: Option<PlacedOrder>,
    pub remaining_seconds: Option<u64>,
    /// `MM:SS` of `remaining_seconds`.
    pub remaining_clock: Option<String>,
}

// ---------------------------------------------------------------------------
// OrderFlow
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub struct OrderFlow {
    phase: OrderPhase,
    table_number: Option<u32>,
    table_count: u32,
    active: Option<ActiveOrder>,
    ids: OrderIdGenerator,
}

impl OrderFlow {
    /// New flow in `Browsing` with tables `1..=table_count`.
    ///
    /// # Panics (debug only)
    /// Panics if `table_count` is 0.
    pub fn new(session_id: Uuid, table_count: u32) -> Self {
        debug_assert!(table_count > 0, "table_count must be positive");
        Self {
            phase: OrderPhase::Browsing,
            table_number: None,
            table_count,
            active: None,
            ids: OrderIdGenerator::new(session_id),
        }
    }

    pub fn phase(&self) -> OrderPhase {
        self.phase
    }

    pub fn table_number(&self) -> Option<u32> {
        self.table_number
    }

    pub fn table_count(&self) -> u32 {
        self.table_count
    }

    pub fn order_id(&self) -> Option<OrderId> {
        self.active.as_ref().map(|a| a.placed.order_id)
    }

    pub fn remaining_seconds(&self) -> Option<u64> {
        self.active.as_ref().map(|a| a.countdown.remaining_seconds())
    }

    pub fn session_id(&self) -> Uuid {
        self.ids.session_id()
    }

    pub fn view(&self) -> FlowView {
        FlowView {
            phase: self.phase,
            table_number: self.table_number,
            table_count: self.table_count,
            order: self.active.as_ref().map(|a| a.placed.clone()),
            remaining_seconds: self.remaining_seconds(),
            remaining_clock: self.active.as_ref().map(|a| a.countdown.as_clock()),
        }
    }

    /// Tick the order currently being waited on.
    pub fn tick(&mut self, cart: &mut Cart) -> Result<FlowOutcome, FlowError> {
        match self.order_id() {
            Some(order_id) => self.apply(FlowEvent::Tick { order_id }, cart),
            None => Err(self.illegal("Tick")),
        }
    }

    /// Apply an event.
    ///
    /// `cart` is read by the checkout guard and snapshotted then cleared by
    /// `ConfirmAndPay`; no other event touches it.
    ///
    /// # Errors
    /// Returns [`FlowError`] for guard failures and illegal transitions.
    /// Nothing is mutated on error.
    pub fn apply(&mut self, event: FlowEvent, cart: &mut Cart) -> Result<FlowOutcome, FlowError> {
        use FlowEvent::*;
        use OrderPhase::*;

        let from = self.phase;
        match (from, event) {
            // ------------------------------------------------------------------
            // Browsing
            // ------------------------------------------------------------------
            (Browsing, ProceedToCheckout) => {
                if cart.is_empty() {
                    return Err(FlowError::EmptyCart);
                }
                Ok(self.enter(SelectingTable))
            }

            // ------------------------------------------------------------------
            // Table selection
            // ------------------------------------------------------------------
            (SelectingTable, SelectTable(table)) => {
                if table == 0 || table > self.table_count {
                    return Err(FlowError::InvalidTable {
                        table,
                        table_count: self.table_count,
                    });
                }
                self.table_number = Some(table);
                Ok(FlowOutcome::TableSelected { table })
            }

            (SelectingTable, Continue) => {
                if self.table_number.is_none() {
                    return Err(FlowError::NoTableSelected);
                }
                Ok(self.enter(Confirming))
            }

            (SelectingTable, Back) => Ok(self.enter(Browsing)),

            // ------------------------------------------------------------------
            // Confirmation
            // ------------------------------------------------------------------
            (Confirming, Back) => Ok(self.enter(SelectingTable)),

            (Confirming, ConfirmAndPay { placed_at }) => {
                let Some(table) = self.table_number else {
                    return Err(FlowError::NoTableSelected);
                };
                // The cart stays editable while confirming; re-check the guard.
                if cart.is_empty() {
                    return Err(FlowError::EmptyCart);
                }
                // Snapshot before clearing: the countdown uses the ETA of what
                // was actually ordered.
                let order_id = self.ids.next_id();
                let placed = PlacedOrder::from_cart(order_id, table, cart, placed_at);
                let countdown = Countdown::from_minutes(placed.eta_minutes);
                cart.clear();
                self.active = Some(ActiveOrder {
                    placed: placed.clone(),
                    countdown,
                });
                self.phase = Waiting;
                Ok(FlowOutcome::OrderPlaced(placed))
            }

            // ------------------------------------------------------------------
            // Waiting
            // ------------------------------------------------------------------
            (Waiting, Tick { order_id }) => {
                let Some(active) = self.active.as_mut() else {
                    return Err(FlowError::StaleTick { order_id });
                };
                if active.placed.order_id != order_id {
                    return Err(FlowError::StaleTick { order_id });
                }
                Ok(match active.countdown.tick() {
                    TickOutcome::Ticked { remaining_seconds } => {
                        FlowOutcome::Ticked { remaining_seconds }
                    }
                    TickOutcome::Finished => FlowOutcome::CountdownFinished { order_id },
                    TickOutcome::Idle => FlowOutcome::CountdownIdle,
                })
            }

            (Waiting, ReturnToMenu) => {
                let closed = self.active.take().map(|a| a.placed.order_id);
                self.table_number = None;
                self.phase = Browsing;
                Ok(match closed {
                    Some(order_id) => FlowOutcome::OrderClosed { order_id },
                    None => FlowOutcome::PhaseChanged {
                        from: Waiting,
                        to: Browsing,
                    },
                })
            }

            // ------------------------------------------------------------------
            // Everything else is illegal (including ticks outside Waiting).
            // ------------------------------------------------------------------
            (_, ev) => Err(self.illegal(format!("{ev:?}"))),
        }
    }

    fn enter(&mut self, to: OrderPhase) -> FlowOutcome {
        let from = self.phase;
        self.phase = to;
        FlowOutcome::PhaseChanged { from, to }
    }

    fn illegal(&self, event: impl Into<String>) -> FlowError {
        FlowError::IllegalTransition {
            from: self.phase,
            event: event.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
