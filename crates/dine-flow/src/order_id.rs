//! Order identifiers.
//!
//! Each session owns one [`OrderIdGenerator`]. It hands out a monotonic
//! sequence number (shown to the diner) paired with a UUID v5 derived from the
//! session id and that sequence. Within a session ids never repeat; across
//! sessions the UUID keeps them distinct.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// First sequence number handed out in a session.
pub const FIRST_ORDER_SEQ: u64 = 1;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId {
    /// Per-session monotonic number, starting at [`FIRST_ORDER_SEQ`].
    pub seq: u64,
    /// Collision-resistant identity: v5(session namespace, seq).
    pub uuid: Uuid,
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:04}", self.seq)
    }
}

#[derive(Clone, Debug)]
pub struct OrderIdGenerator {
    namespace: Uuid,
    next_seq: u64,
}

impl OrderIdGenerator {
    pub fn new(session_id: Uuid) -> Self {
        Self {
            namespace: session_id,
            next_seq: FIRST_ORDER_SEQ,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.namespace
    }

    /// Allocate the next id. Never returns the same id twice.
    pub fn next_id(&mut self) -> OrderId {
        let seq = self.next_seq;
        self.next_seq += 1;
        OrderId {
            seq,
            uuid: Uuid::new_v5(&self.namespace, &seq.to_be_bytes()),
        }
    }
}
