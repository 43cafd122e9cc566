//! Typed lifecycle events delivered to the host
//!
//! The engine never invokes host callbacks synchronously: events are queued
//! after the engine's own state transition has completed, and the host
//! drains them at its convenience via [`RainState::drain_events`]. A
//! reentrant `start`/`stop` issued while handling an event therefore cannot
//! observe a half-finished transition.
//!
//! [`RainState::drain_events`]: crate::engine::state::RainState::drain_events

use serde::{Deserialize, Serialize};

use crate::engine::host::VisualHandle;
use crate::engine::state::ItemCategory;

/// Host-visible lifecycle and interaction events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RainEvent {
    /// A new item entered the viewport; `ordinal` is 1-based per category
    ItemAppeared { category: ItemCategory, ordinal: u32 },
    /// A tap struck a live item
    ItemClicked {
        category: ItemCategory,
        visual: VisualHandle,
    },
    /// The session spent its total duration or was stopped
    SessionCompleted,
}
