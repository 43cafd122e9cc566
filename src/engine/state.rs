//! Core item and session state
//!
//! `RainState` is the single owner of all live items. Mutation happens only
//! through the registry entry points (`spawn_item`, `retire_exited`,
//! `clear_items`, and the consume/click recorders used by the hit-test
//! dispatcher), never by ad-hoc list edits from handlers.

use std::collections::{HashSet, VecDeque};

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::RainConfig;
use crate::consts::TICK_GRANULARITY;
use crate::engine::clock::Ticker;
use crate::engine::events::RainEvent;
use crate::engine::host::{AnimationHost, ViewId, VisualHandle};
use crate::engine::motion::{FallPath, MotionClock};
use crate::engine::rect::Rect;

/// Falling item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    /// Main collectible sprite; a tap on it ends that tap's interaction
    Primary,
    /// Penalty sprite spawned at the configured density among Primaries
    Hazard,
}

/// Session phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Idle,
    Running,
    Paused,
    Completed,
}

/// One live falling item
#[derive(Debug, Clone)]
pub struct Item {
    /// Stable identity for the item's lifetime
    pub id: u32,
    pub category: ItemCategory,
    /// 1-based spawn index among items of this category
    pub ordinal: u32,
    pub size: Vec2,
    pub path: FallPath,
    pub clock: MotionClock,
    /// Host-owned visual these bounds belong to
    pub visual: VisualHandle,
    /// Set when a Primary is struck; consumed items no longer match taps
    pub consumed: bool,
}

impl Item {
    /// Currently rendered bounds: a pure function of `now` and the motion
    /// record, never the target position
    pub fn bounds(&self, now: f64) -> Rect {
        let fraction = self.clock.progress(now, self.path.duration);
        Rect::new(self.path.position_at(fraction), self.size)
    }
}

/// A foreign host view overlapping the rain layer (chrome above the items)
#[derive(Debug, Clone, Copy)]
pub struct Overlay {
    pub view: ViewId,
    pub bounds: Rect,
}

/// Monotonic per-session counters, reset only by `start`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RainStats {
    pub primary_spawned: u32,
    pub primary_clicked: u32,
    pub hazard_spawned: u32,
    pub hazard_clicked: u32,
}

/// Complete engine state for one rain instance
#[derive(Debug)]
pub struct RainState {
    pub config: RainConfig,
    pub phase: SessionPhase,
    pub stats: RainStats,
    /// Seed the RNG is rewound to on every `start`
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) ticker: Ticker,
    /// Run time booked by completed spawn intervals, in whole granules
    pub(crate) elapsed_granules: u64,
    /// Sub-interval granule counter reconciling the fixed clock granularity
    /// against the configured spawn interval
    pub(crate) interval_accum: u64,
    pub(crate) items: Vec<Item>,
    pub(crate) overlays: Vec<Overlay>,
    pub(crate) blocking: HashSet<ViewId>,
    pub(crate) events: VecDeque<RainEvent>,
    next_item_id: u32,
}

impl RainState {
    /// Create an idle engine with a normalized config and a seeded RNG
    pub fn new(config: RainConfig, seed: u64) -> Self {
        let config = config.normalized();
        let blocking = config.blocking_views.iter().copied().collect();
        Self {
            phase: SessionPhase::Idle,
            stats: RainStats::default(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ticker: Ticker::new(),
            elapsed_granules: 0,
            interval_accum: 0,
            items: Vec::new(),
            overlays: Vec::new(),
            blocking,
            events: VecDeque::new(),
            next_item_id: 0,
            config,
        }
    }

    /// Session run time booked so far (seconds, never exceeds the budget)
    pub fn elapsed_run_time(&self) -> f64 {
        self.elapsed_granules as f64 * TICK_GRANULARITY
    }

    /// Live items in spawn order (last = topmost)
    pub fn live_items(&self) -> &[Item] {
        &self.items
    }

    /// Hand queued events to the host
    pub fn drain_events(&mut self) -> impl Iterator<Item = RainEvent> + '_ {
        self.events.drain(..)
    }

    /// Register (or move) a foreign view sitting above the rain layer
    pub fn insert_overlay(&mut self, view: ViewId, bounds: Rect) {
        self.remove_overlay(view);
        self.overlays.push(Overlay { view, bounds });
    }

    pub fn remove_overlay(&mut self, view: ViewId) {
        self.overlays.retain(|o| o.view != view);
    }

    /// Flag a foreign view as input-blocking even when penetration is
    /// otherwise allowed
    pub fn mark_blocking(&mut self, view: ViewId) {
        self.blocking.insert(view);
    }

    pub fn unmark_blocking(&mut self, view: ViewId) {
        self.blocking.remove(&view);
    }

    /// Registry entry point: create one item, its visual, and its path
    pub(crate) fn spawn_item(
        &mut self,
        host: &mut dyn AnimationHost,
        category: ItemCategory,
        now: f64,
    ) {
        let size = match category {
            ItemCategory::Primary => self.config.item_size,
            ItemCategory::Hazard => self.config.hazard_size(),
        };
        let path = FallPath::assign(
            &mut self.rng,
            category,
            self.config.viewport,
            size,
            self.config.drop_duration,
        );
        let visual = host.create_visual(category, size);
        host.set_path(visual, path.entry, path.exit, path.duration);

        let ordinal = match category {
            ItemCategory::Primary => {
                self.stats.primary_spawned += 1;
                self.stats.primary_spawned
            }
            ItemCategory::Hazard => {
                self.stats.hazard_spawned += 1;
                self.stats.hazard_spawned
            }
        };
        self.next_item_id += 1;
        log::debug!(
            "spawned {:?} #{} entering at x={:.1}",
            category,
            ordinal,
            path.entry.x
        );
        self.items.push(Item {
            id: self.next_item_id,
            category,
            ordinal,
            size,
            path,
            clock: MotionClock::start(now),
            visual,
            consumed: false,
        });
        self.events
            .push_back(RainEvent::ItemAppeared { category, ordinal });
    }

    /// Registry entry point: retire items whose rendered bounds left the
    /// extended viewport region (viewport padded by the item's own height on
    /// both edges, so entry above and exit below are not culled early)
    pub(crate) fn retire_exited(&mut self, host: &mut dyn AnimationHost, now: f64) {
        let viewport_h = self.config.viewport.y;
        let before = self.items.len();
        self.items.retain(|item| {
            let pad = item.size.y;
            let keep = item.bounds(now).intersects_band(-pad, viewport_h + pad);
            if !keep {
                host.remove_visual(item.visual);
            }
            keep
        });
        let swept = before - self.items.len();
        if swept > 0 {
            log::trace!("swept {} exited items", swept);
        }
    }

    /// Registry entry point: drop every live item immediately
    pub(crate) fn clear_items(&mut self, host: &mut dyn AnimationHost) {
        for item in self.items.drain(..) {
            host.remove_visual(item.visual);
        }
    }

    /// Mark a struck Primary consumed and record the click
    pub(crate) fn consume_primary(&mut self, idx: usize) {
        self.items[idx].consumed = true;
        let (category, visual, ordinal) = {
            let item = &self.items[idx];
            (item.category, item.visual, item.ordinal)
        };
        self.stats.primary_clicked += 1;
        self.events
            .push_back(RainEvent::ItemClicked { category, visual });
        log::debug!("primary #{} clicked", ordinal);
    }

    /// Record a Hazard click (the item stays live and clickable)
    pub(crate) fn record_hazard_click(&mut self, idx: usize) {
        let (category, visual, ordinal) = {
            let item = &self.items[idx];
            (item.category, item.visual, item.ordinal)
        };
        self.stats.hazard_clicked += 1;
        self.events
            .push_back(RainEvent::ItemClicked { category, visual });
        log::debug!("hazard #{} clicked", ordinal);
    }
}
