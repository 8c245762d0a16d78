//! dine-session
//!
//! One diner's visit.
//! - [`Session`]: synchronous single owner of cart, favorites, filter and
//!   order flow; applies [`Intent`]s one at a time
//! - [`SessionRuntime`]: tokio actor around a `Session` that drives the
//!   countdown timer and publishes [`SessionEvent`]s
//! - [`open_catalog`]: catalog selection from configuration

mod bootstrap;
mod intent;
mod runtime;
mod session;
mod timer;

pub use bootstrap::{open_catalog, SessionSettings};
pub use intent::Intent;
pub use runtime::{SessionEvent, SessionHandle, SessionRuntime};
pub use session::{FilterView, Session, SessionError, SessionView};
pub use timer::{CountdownTimer, TimerTick};
