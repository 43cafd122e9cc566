//! Host-side capabilities injected into the engine
//!
//! The presentation layer owns the actual views/layers; the engine only
//! holds opaque handles. [`HeadlessHost`] is a no-render implementation
//! used by the demo binary and the test suite; it enforces the
//! handle-lifecycle invariants a real host must uphold.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::engine::rect::Rect;
use crate::engine::state::ItemCategory;

/// Opaque reference to a host-owned visual (one per live item)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualHandle(pub u64);

/// Opaque identity of a foreign (non-item) host view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewId(pub u64);

/// Opaque reference to a host-loaded sprite frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef(pub u32);

/// Presentation-layer contract the engine drives
pub trait AnimationHost {
    /// Create a visual for a newly spawned item
    fn create_visual(&mut self, category: ItemCategory, size: Vec2) -> VisualHandle;

    /// Assign the linear traversal the visual should render
    fn set_path(&mut self, handle: VisualHandle, entry: Vec2, exit: Vec2, duration: f64);

    /// Live interpolated bounds as rendered. A conforming host keeps this in
    /// agreement with the engine's own interpolation; the engine's motion
    /// record is the source of truth for hit-testing and sweeping.
    fn current_bounds(&self, handle: VisualHandle) -> Rect;

    /// Remove the visual immediately (no fade-out)
    fn remove_visual(&mut self, handle: VisualHandle);

    /// Freeze the visual at its current rendered position
    fn pause_visual(&mut self, handle: VisualHandle);

    /// Continue the visual from its frozen position
    fn resume_visual(&mut self, handle: VisualHandle);
}

/// Bookkeeping record for one live headless visual
#[derive(Debug, Clone)]
struct HeadlessVisual {
    handle: VisualHandle,
    category: ItemCategory,
    size: Vec2,
    path: Option<(Vec2, Vec2, f64)>,
}

/// No-render host: tracks handles and panics on lifecycle violations
/// (asking about a destroyed visual is a programming error, not a
/// recoverable condition)
#[derive(Debug, Default)]
pub struct HeadlessHost {
    next_handle: u64,
    visuals: Vec<HeadlessVisual>,
    pub created: u32,
    pub removed: u32,
    pub pauses: u32,
    pub resumes: u32,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of visuals currently alive
    pub fn live_count(&self) -> usize {
        self.visuals.len()
    }

    /// Live visuals of one category
    pub fn live_by_category(&self, category: ItemCategory) -> usize {
        self.visuals.iter().filter(|v| v.category == category).count()
    }

    fn index_of(&self, handle: VisualHandle) -> usize {
        self.visuals
            .iter()
            .position(|v| v.handle == handle)
            .unwrap_or_else(|| panic!("host asked about destroyed visual {handle:?}"))
    }
}

impl AnimationHost for HeadlessHost {
    fn create_visual(&mut self, category: ItemCategory, size: Vec2) -> VisualHandle {
        self.next_handle += 1;
        let handle = VisualHandle(self.next_handle);
        self.visuals.push(HeadlessVisual {
            handle,
            category,
            size,
            path: None,
        });
        self.created += 1;
        handle
    }

    fn set_path(&mut self, handle: VisualHandle, entry: Vec2, exit: Vec2, duration: f64) {
        let idx = self.index_of(handle);
        self.visuals[idx].path = Some((entry, exit, duration));
    }

    fn current_bounds(&self, handle: VisualHandle) -> Rect {
        // Headless visuals carry no animation clock; report the entry frame
        let visual = &self.visuals[self.index_of(handle)];
        let origin = visual.path.map(|(entry, _, _)| entry).unwrap_or(Vec2::ZERO);
        Rect::new(origin, visual.size)
    }

    fn remove_visual(&mut self, handle: VisualHandle) {
        let idx = self.index_of(handle);
        self.visuals.remove(idx);
        self.removed += 1;
    }

    fn pause_visual(&mut self, handle: VisualHandle) {
        let _ = self.index_of(handle);
        self.pauses += 1;
    }

    fn resume_visual(&mut self, handle: VisualHandle) {
        let _ = self.index_of(handle);
        self.resumes += 1;
    }
}
