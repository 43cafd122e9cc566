//! Reward Rain - a timed falling-item overlay engine
//!
//! Core modules:
//! - `engine`: deterministic scheduling, motion, and hit-testing
//! - `config`: data-driven rain parameters
//!
//! The engine renders nothing itself: the embedding application injects an
//! [`AnimationHost`] for presentation and forwards tap coordinates to
//! [`engine::on_tap`]. Every timestamp comes from the caller, so no code
//! path ever reads a wall clock and whole sessions replay deterministically
//! from a seed.

pub mod config;
pub mod engine;

pub use config::RainConfig;
pub use engine::{
    AnimationHost, HeadlessHost, ImageRef, RainEvent, RainState, RainStats, Rect, SessionPhase,
    TapOutcome, ViewId, VisualHandle,
};

/// Engine timing constants
pub mod consts {
    /// Fixed scheduler granularity (seconds); configured intervals are
    /// quantized to whole multiples of this
    pub const TICK_GRANULARITY: f64 = 0.01;
    /// Longest stretch of missed time one `advance` call will replay
    pub const MAX_CATCHUP: f64 = 0.25;

    /// Default item edge length (pixels)
    pub const DEFAULT_ITEM_SIZE: f32 = 50.0;
    /// Default seconds per sprite-frame loop
    pub const DEFAULT_FRAME_CYCLE: f64 = 1.0;
    /// Default seconds between spawn events
    pub const DEFAULT_SPAWN_INTERVAL: f64 = 0.5;
    /// Default seconds for a full viewport traversal
    pub const DEFAULT_DROP_DURATION: f64 = 5.0;
    /// Default session length (seconds)
    pub const DEFAULT_TOTAL_DURATION: f64 = 30.0;
    /// Default viewport extents (pixels)
    pub const DEFAULT_VIEWPORT_W: f32 = 400.0;
    pub const DEFAULT_VIEWPORT_H: f32 = 800.0;
}
