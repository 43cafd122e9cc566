//! Rain configuration
//!
//! Every field has a default; invalid values are normalized rather than
//! rejected so the engine stays runnable on any input. Hosts that want
//! data-driven setups can load this from JSON (all fields optional).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::engine::host::{ImageRef, ViewId};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    /// Host view extents the rain falls across
    pub viewport: Vec2,
    /// Sprite frames the host cycles on Primary visuals. May be empty: the
    /// item still schedules and hit-tests, it just renders no frames.
    pub primary_images: Vec<ImageRef>,
    /// Primary item bounds
    pub item_size: Vec2,
    /// Seconds per full sprite-frame loop (host-side frame animation)
    pub frame_cycle: f64,
    /// Seconds between spawn events (floored to the tick granularity)
    pub spawn_interval: f64,
    /// Seconds for one item to traverse the viewport
    pub drop_duration: f64,
    /// Total session run-time budget
    pub total_duration: f64,
    /// Sprite frames for Hazard visuals
    pub hazard_images: Vec<ImageRef>,
    /// Hazard bounds; `None` falls back to `item_size`
    pub hazard_size: Option<Vec2>,
    /// One Hazard per this many Primaries (0 disables hazards)
    pub hazard_density: u32,
    /// Whether taps pass through foreign views to items beneath
    pub penetration_enabled: bool,
    /// Foreign views that absorb taps even when penetration is enabled
    pub blocking_views: Vec<ViewId>,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(DEFAULT_VIEWPORT_W, DEFAULT_VIEWPORT_H),
            primary_images: Vec::new(),
            item_size: Vec2::splat(DEFAULT_ITEM_SIZE),
            frame_cycle: DEFAULT_FRAME_CYCLE,
            spawn_interval: DEFAULT_SPAWN_INTERVAL,
            drop_duration: DEFAULT_DROP_DURATION,
            total_duration: DEFAULT_TOTAL_DURATION,
            hazard_images: Vec::new(),
            hazard_size: None,
            hazard_density: 0,
            penetration_enabled: false,
            blocking_views: Vec::new(),
        }
    }
}

impl RainConfig {
    /// Clamp every field into the engine's runnable domain
    pub fn normalized(mut self) -> Self {
        self.viewport = self.viewport.max(Vec2::ZERO);
        self.item_size = self.item_size.max(Vec2::ZERO);
        self.hazard_size = self.hazard_size.map(|s| s.max(Vec2::ZERO));
        self.frame_cycle = self.frame_cycle.max(0.0);
        self.spawn_interval = self.spawn_interval.max(0.0);
        self.drop_duration = self.drop_duration.max(0.0);
        self.total_duration = self.total_duration.max(0.0);
        self
    }

    /// Hazard bounds (falls back to the Primary size)
    pub fn hazard_size(&self) -> Vec2 {
        self.hazard_size.unwrap_or(self.item_size)
    }

    /// Spawn interval quantized to whole granules, floored to one
    pub fn interval_granules(&self) -> u64 {
        ((self.spawn_interval / TICK_GRANULARITY).round() as u64).max(1)
    }

    /// The interval the scheduler actually runs at after quantization
    pub fn effective_interval(&self) -> f64 {
        self.interval_granules() as f64 * TICK_GRANULARITY
    }

    /// Session budget in whole granules
    pub fn total_granules(&self) -> u64 {
        (self.total_duration / TICK_GRANULARITY).round() as u64
    }
}
