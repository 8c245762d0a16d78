//! Countdown until a placed order is ready.
//!
//! Monotonically non-increasing and floored at zero. Reaching zero is a
//! terminal sub-state: further ticks are no-ops.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// One second elapsed; time still remains.
    Ticked { remaining_seconds: u64 },
    /// This tick brought the countdown to zero.
    Finished,
    /// Already at zero; nothing changed.
    Idle,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    remaining_seconds: u64,
}

impl Countdown {
    pub fn from_seconds(seconds: u64) -> Self {
        Self {
            remaining_seconds: seconds,
        }
    }

    pub fn from_minutes(minutes: u32) -> Self {
        Self::from_seconds(u64::from(minutes) * 60)
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn tick(&mut self) -> TickOutcome {
        match self.remaining_seconds {
            0 => TickOutcome::Idle,
            1 => {
                self.remaining_seconds = 0;
                TickOutcome::Finished
            }
            n => {
                self.remaining_seconds = n - 1;
                TickOutcome::Ticked {
                    remaining_seconds: n - 1,
                }
            }
        }
    }

    /// `MM:SS` rendering; minutes are not wrapped at 60.
    pub fn as_clock(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_seconds / 60,
            self.remaining_seconds % 60
        )
    }
}
