//! Shared lookup types

use orderscope_gateway::Order;
use serde::{Deserialize, Serialize};

/// The single visual mode shown to the user at any instant.
///
/// Exactly one of these holds at a time. The value is derived from the
/// presenter's toggles, never stored, so it cannot drift out of sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayState {
    /// Nothing looked up yet.
    Idle,
    /// A lookup is in flight.
    Loading,
    /// The most recent lookup succeeded and its order is on screen.
    Result,
    /// The most recent lookup failed and its message is on screen.
    Error,
}

/// Measured facts about a completed lookup, displayed beside the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupMeta {
    /// Wall-clock time the lookup took, in milliseconds.
    pub latency_ms: u64,
    /// Whether the backend served the order from its fast path.
    pub served_from_cache: bool,
}

/// Successful lookup outcome: the order plus its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupReply {
    pub order: Order,
    pub meta: LookupMeta,
}
