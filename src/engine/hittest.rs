//! Tap dispatch against moving items
//!
//! Scans topmost-first: registered foreign overlays (host chrome sits above
//! the rain layer), then live items, most recently spawned first. A Primary
//! hit is terminal for the tap; Hazard hits keep the scan going so
//! overlapping items beneath still register.

use glam::Vec2;

use crate::engine::state::{ItemCategory, RainState};

/// What a tap resolved to, so an embedding host can decide whether to
/// forward the touch to whatever sits underneath the rain layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Nothing under the point
    Miss,
    /// A foreign view swallowed the tap before it reached any item
    Absorbed,
    /// At least one item registered the tap
    Struck,
}

/// Resolve a tap at `point` (engine coordinate space) at time `now`
pub fn on_tap(state: &mut RainState, point: Vec2, now: f64) -> TapOutcome {
    for overlay in state.overlays.iter().rev() {
        if overlay.bounds.contains(point)
            && (!state.config.penetration_enabled || state.blocking.contains(&overlay.view))
        {
            log::trace!("tap absorbed by foreign view {:?}", overlay.view);
            return TapOutcome::Absorbed;
        }
    }

    let mut struck = false;
    for idx in (0..state.items.len()).rev() {
        let item = &state.items[idx];
        if item.consumed || !item.bounds(now).contains(point) {
            continue;
        }
        match item.category {
            ItemCategory::Primary => {
                state.consume_primary(idx);
                return TapOutcome::Struck;
            }
            ItemCategory::Hazard => {
                state.record_hazard_click(idx);
                struck = true;
            }
        }
    }
    if struck {
        TapOutcome::Struck
    } else {
        TapOutcome::Miss
    }
}
