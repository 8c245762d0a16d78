//! Session runtime: a tokio actor owning one [`Session`].
//!
//! # Design
//! ```text
//!  SessionHandle ──Command──► mpsc ─┐
//!                                   ├─► run loop ──► Session::apply / tick
//!  CountdownTimer ──TimerTick──► mpsc ┘          │
//!                                                └──► broadcast<SessionEvent>
//! ```
//! Intents and ticks are applied one at a time by the loop task; there is no
//! other writer. The timer guard lives in `Option<CountdownTimer>`: set when an
//! order is placed, taken (and so aborted) when the diner returns to the menu,
//! when the countdown reaches zero, and when the loop exits.

use std::time::Duration;

use dine_cart::CartSnapshot;
use dine_flow::{FlowOutcome, OrderId, OrderPhase, PlacedOrder};
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::intent::Intent;
use crate::session::{Session, SessionError, SessionView};
use crate::timer::{CountdownTimer, TimerTick};

const COMMAND_CAPACITY: usize = 64;
const TICK_CAPACITY: usize = 8;
const EVENT_CAPACITY: usize = 256;

// ---------------------------------------------------------------------------
// SessionEvent: broadcast bus payload
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    CartChanged { cart: CartSnapshot },
    PhaseChanged { from: OrderPhase, to: OrderPhase },
    TableSelected { table: u32 },
    OrderPlaced { order: PlacedOrder },
    Countdown { order_id: OrderId, remaining_seconds: u64 },
    CountdownFinished { order_id: OrderId },
    OrderClosed { order_id: OrderId },
    IntentRejected { intent: String, reason: String },
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

enum Command {
    Apply {
        intent: Intent,
        reply: oneshot::Sender<Result<SessionView, SessionError>>,
    },
    View {
        reply: oneshot::Sender<SessionView>,
    },
    TimerRunning {
        reply: oneshot::Sender<bool>,
    },
    Shutdown {
        reply: oneshot::Sender<SessionView>,
    },
}

// ---------------------------------------------------------------------------
// SessionHandle
// ---------------------------------------------------------------------------

/// Cloneable front door to a running session.
#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<Command>,
    bus: broadcast::Sender<SessionEvent>,
}

impl SessionHandle {
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.bus.subscribe()
    }

    /// Apply one intent and return the resulting view.
    pub async fn apply(&self, intent: Intent) -> Result<SessionView, SessionError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Apply { intent, reply }).await?;
        rx.await.map_err(|_| SessionError::RuntimeClosed)?
    }

    pub async fn view(&self) -> Result<SessionView, SessionError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::View { reply }).await?;
        rx.await.map_err(|_| SessionError::RuntimeClosed)
    }

    /// Whether a countdown timer task is currently held.
    pub async fn timer_running(&self) -> Result<bool, SessionError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::TimerRunning { reply }).await?;
        rx.await.map_err(|_| SessionError::RuntimeClosed)
    }

    /// Stop the runtime and return the final view.
    pub async fn shutdown(&self) -> Result<SessionView, SessionError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Shutdown { reply }).await?;
        rx.await.map_err(|_| SessionError::RuntimeClosed)
    }

    async fn send(&self, cmd: Command) -> Result<(), SessionError> {
        self.commands
            .send(cmd)
            .await
            .map_err(|_| SessionError::RuntimeClosed)
    }
}

// ---------------------------------------------------------------------------
// SessionRuntime
// ---------------------------------------------------------------------------

pub struct SessionRuntime {
    session: Session,
    tick_period: Duration,
    commands: mpsc::Receiver<Command>,
    ticks_tx: mpsc::Sender<TimerTick>,
    ticks_rx: mpsc::Receiver<TimerTick>,
    bus: broadcast::Sender<SessionEvent>,
    timer: Option<CountdownTimer>,
}

impl SessionRuntime {
    /// Spawn the run loop. `tick_period` is the wall-clock length of one
    /// countdown second.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(session: Session, tick_period: Duration) -> (SessionHandle, JoinHandle<()>) {
        let (cmd_tx, cmd_rx) = mpsc::channel(COMMAND_CAPACITY);
        let (ticks_tx, ticks_rx) = mpsc::channel(TICK_CAPACITY);
        let (bus, _rx) = broadcast::channel(EVENT_CAPACITY);

        let runtime = Self {
            session,
            tick_period,
            commands: cmd_rx,
            ticks_tx,
            ticks_rx,
            bus: bus.clone(),
            timer: None,
        };
        let task = tokio::spawn(runtime.run());
        let handle = SessionHandle {
            commands: cmd_tx,
            bus,
        };
        (handle, task)
    }

    async fn run(mut self) {
        info!(session_id = %self.session.session_id(), "session started");
        loop {
            tokio::select! {
                cmd = self.commands.recv() => match cmd {
                    Some(Command::Apply { intent, reply }) => {
                        let result = self.handle_intent(intent);
                        let _ = reply.send(result);
                    }
                    Some(Command::View { reply }) => {
                        let _ = reply.send(self.session.view());
                    }
                    Some(Command::TimerRunning { reply }) => {
                        let _ = reply.send(self.timer.is_some());
                    }
                    Some(Command::Shutdown { reply }) => {
                        self.stop_timer("shutdown");
                        let _ = reply.send(self.session.view());
                        break;
                    }
                    // Every handle dropped.
                    None => break,
                },
                Some(tick) = self.ticks_rx.recv() => self.handle_tick(tick),
            }
        }
        self.stop_timer("runtime exit");
        info!(session_id = %self.session.session_id(), "session stopped");
    }

    fn handle_intent(&mut self, intent: Intent) -> Result<SessionView, SessionError> {
        let name = intent.name();
        let touches_cart = matches!(
            intent,
            Intent::AddItem { .. } | Intent::RemoveItem { .. } | Intent::ConfirmAndPay
        );

        match self.session.apply(intent) {
            Ok(outcome) => {
                debug!(intent = name, "intent applied");
                if let Some(outcome) = outcome {
                    self.on_flow_outcome(outcome);
                }
                if touches_cart {
                    self.publish(SessionEvent::CartChanged {
                        cart: self.session.cart().snapshot(),
                    });
                }
                Ok(self.session.view())
            }
            Err(e) => {
                warn!(intent = name, error = %e, "intent rejected");
                self.publish(SessionEvent::IntentRejected {
                    intent: name.to_string(),
                    reason: e.to_string(),
                });
                Err(e)
            }
        }
    }

    fn handle_tick(&mut self, tick: TimerTick) {
        let owned = self.timer.as_ref().is_some_and(|t| t.owns(&tick));
        if !owned {
            debug!(order_id = %tick.order_id, "discarding stale countdown tick");
            return;
        }
        match self.session.tick(tick.order_id) {
            Ok(outcome) => self.on_flow_outcome(outcome),
            Err(e) => {
                warn!(order_id = %tick.order_id, error = %e, "countdown tick rejected");
                self.stop_timer("tick rejected");
            }
        }
    }

    fn on_flow_outcome(&mut self, outcome: FlowOutcome) {
        match outcome {
            FlowOutcome::PhaseChanged { from, to } => {
                info!(from = from.as_str(), to = to.as_str(), "order phase changed");
                if from == OrderPhase::Waiting {
                    self.stop_timer("left waiting");
                }
                self.publish(SessionEvent::PhaseChanged { from, to });
            }
            FlowOutcome::TableSelected { table } => {
                self.publish(SessionEvent::TableSelected { table });
            }
            FlowOutcome::OrderPlaced(order) => {
                info!(
                    order_id = %order.order_id,
                    table = order.table_number,
                    total = order.total,
                    eta_minutes = order.eta_minutes,
                    "order placed"
                );
                self.start_timer(order.order_id);
                self.publish(SessionEvent::PhaseChanged {
                    from: OrderPhase::Confirming,
                    to: OrderPhase::Waiting,
                });
                self.publish(SessionEvent::OrderPlaced { order });
            }
            FlowOutcome::Ticked { remaining_seconds } => {
                if let Some(order_id) = self.session.flow().order_id() {
                    self.publish(SessionEvent::Countdown {
                        order_id,
                        remaining_seconds,
                    });
                }
            }
            FlowOutcome::CountdownFinished { order_id } => {
                info!(order_id = %order_id, "countdown finished");
                self.stop_timer("countdown finished");
                self.publish(SessionEvent::Countdown {
                    order_id,
                    remaining_seconds: 0,
                });
                self.publish(SessionEvent::CountdownFinished { order_id });
            }
            FlowOutcome::CountdownIdle => self.stop_timer("countdown idle"),
            FlowOutcome::OrderClosed { order_id } => {
                info!(order_id = %order_id, "order closed");
                self.stop_timer("returned to menu");
                self.publish(SessionEvent::PhaseChanged {
                    from: OrderPhase::Waiting,
                    to: OrderPhase::Browsing,
                });
                self.publish(SessionEvent::OrderClosed { order_id });
            }
        }
    }

    fn start_timer(&mut self, order_id: OrderId) {
        // Replacing the guard drops (and aborts) any previous timer.
        self.timer = Some(CountdownTimer::start(
            order_id,
            self.tick_period,
            self.ticks_tx.clone(),
        ));
        info!(order_id = %order_id, "countdown timer started");
    }

    fn stop_timer(&mut self, reason: &'static str) {
        if let Some(timer) = self.timer.take() {
            info!(order_id = %timer.order_id(), reason, "countdown timer stopped");
        }
    }

    fn publish(&self, event: SessionEvent) {
        // No subscribers is fine.
        let _ = self.bus.send(event);
    }
}
