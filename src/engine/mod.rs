//! Deterministic rain engine
//!
//! All scheduling, motion, and hit-test logic lives here. This module must
//! stay pure and host-agnostic:
//! - Fixed-granularity scheduling only
//! - Seeded RNG only
//! - Timestamps supplied by the caller, never read from a wall clock
//! - No rendering or platform dependencies

pub mod clock;
pub mod events;
pub mod hittest;
pub mod host;
pub mod motion;
pub mod rect;
pub mod session;
pub mod state;
pub mod tick;

pub use clock::Ticker;
pub use events::RainEvent;
pub use hittest::{TapOutcome, on_tap};
pub use host::{AnimationHost, HeadlessHost, ImageRef, ViewId, VisualHandle};
pub use motion::{FallPath, MotionClock, MotionState};
pub use rect::Rect;
pub use session::{pause, resume, start, stop};
pub use state::{Item, ItemCategory, Overlay, RainState, RainStats, SessionPhase};
pub use tick::{advance, tick};
