//! Countdown timer guard.
//!
//! A [`CountdownTimer`] owns the spawned interval task that feeds countdown
//! seconds back to the session runtime. Dropping the guard aborts the task,
//! so every path that discards the guard stops the ticking.

use std::time::Duration;

use dine_flow::OrderId;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// One elapsed countdown second, tagged with the order it was started for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimerTick {
    pub order_id: OrderId,
}

#[derive(Debug)]
pub struct CountdownTimer {
    order_id: OrderId,
    task: JoinHandle<()>,
}

impl CountdownTimer {
    /// Start ticking for `order_id` every `period`. The first tick arrives one
    /// full period after start.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(order_id: OrderId, period: Duration, ticks: mpsc::Sender<TimerTick>) -> Self {
        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if ticks.send(TimerTick { order_id }).await.is_err() {
                    break;
                }
            }
        });
        Self { order_id, task }
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    /// Whether `tick` was produced by this timer.
    pub fn owns(&self, tick: &TimerTick) -> bool {
        tick.order_id == self.order_id
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
