//! Falling motion: linear two-point paths and pausable per-item clocks
//!
//! The rendered position of an item is a pure function of the current time
//! and its `(FallPath, MotionClock)` record. Pausing stores the elapsed
//! traversal time; resuming rebases the effective time origin so the
//! remaining fraction plays out over the remaining duration. Any number of
//! pause/resume cycles is lossless: total elapsed plus remaining always
//! equals the original duration.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::engine::state::ItemCategory;

/// Two-point linear traversal (no easing)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallPath {
    /// Spawn position (top-left), above the viewport
    pub entry: Vec2,
    /// Final position (top-left), at or below the viewport bottom
    pub exit: Vec2,
    /// Traversal duration in seconds
    pub duration: f64,
}

impl FallPath {
    /// Randomized path for a new item: x uniform in `[0, viewport.x)` at
    /// both ends, entry y one item-height above the viewport. Primary items
    /// come to rest at the viewport bottom; Hazards overshoot by their own
    /// height so they fully leave the extended cull region.
    pub fn assign(
        rng: &mut Pcg32,
        category: ItemCategory,
        viewport: Vec2,
        size: Vec2,
        duration: f64,
    ) -> Self {
        let exit_y = match category {
            ItemCategory::Primary => viewport.y,
            ItemCategory::Hazard => viewport.y + size.y,
        };
        Self {
            entry: Vec2::new(random_x(rng, viewport.x), -size.y),
            exit: Vec2::new(random_x(rng, viewport.x), exit_y),
            duration: duration.max(0.0),
        }
    }

    /// Position after the given fraction of the traversal (clamped; the
    /// endpoints are returned exactly, not through the interpolation)
    pub fn position_at(&self, fraction: f32) -> Vec2 {
        if fraction <= 0.0 {
            self.entry
        } else if fraction >= 1.0 {
            self.exit
        } else {
            self.entry.lerp(self.exit, fraction)
        }
    }
}

/// Degenerate viewports spawn everything at x = 0 instead of rejecting the
/// configuration
fn random_x(rng: &mut Pcg32, width: f32) -> f32 {
    if width > 0.0 {
        rng.random_range(0.0..width)
    } else {
        0.0
    }
}

/// Whether an item's traversal timeline is advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    Running,
    Paused,
}

/// Pausable elapsed-time record for one item
///
/// `started_at` is the effective time origin, rebased on every resume so
/// elapsed time carries across pauses without replaying wall-clock gaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionClock {
    started_at: f64,
    elapsed_at_pause: f64,
    state: MotionState,
}

impl MotionClock {
    pub fn start(now: f64) -> Self {
        Self {
            started_at: now,
            elapsed_at_pause: 0.0,
            state: MotionState::Running,
        }
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Elapsed traversal time at `now` (frozen while paused)
    pub fn elapsed(&self, now: f64) -> f64 {
        match self.state {
            MotionState::Running => (now - self.started_at).max(0.0),
            MotionState::Paused => self.elapsed_at_pause,
        }
    }

    /// Freeze the timeline. No-op if already paused.
    pub fn pause(&mut self, now: f64) {
        if self.state == MotionState::Running {
            self.elapsed_at_pause = self.elapsed(now);
            self.state = MotionState::Paused;
        }
    }

    /// Continue from the frozen elapsed time. No-op if already running.
    pub fn resume(&mut self, now: f64) {
        if self.state == MotionState::Paused {
            self.started_at = now - self.elapsed_at_pause;
            self.state = MotionState::Running;
        }
    }

    /// Traversal fraction in `[0, 1]` for a path of `duration` seconds.
    /// A non-positive duration is an instantaneous traversal.
    pub fn progress(&self, now: f64, duration: f64) -> f32 {
        if duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed(now) / duration).clamp(0.0, 1.0) as f32
    }
}
