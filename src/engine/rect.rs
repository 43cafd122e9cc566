//! Axis-aligned rectangle geometry for item bounds and hit-testing
//!
//! Items are positioned by their top-left origin in the host view's
//! coordinate space (y grows downward). Containment is half-open on both
//! axes, so a fully collapsed rectangle never matches any point.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (origin = top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    /// Half-open containment: `[origin, origin + size)` on both axes.
    /// A zero-area rect contains no point, including its own origin.
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.origin.x && point.x < max.x && point.y >= self.origin.y && point.y < max.y
    }

    /// Whether any part of the rect lies strictly inside the vertical band
    /// `(top, bottom)`
    pub fn intersects_band(&self, top: f32, bottom: f32) -> bool {
        self.max().y > top && self.origin.y < bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_interior_and_edges() {
        let rect = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(50.0, 50.0));
        assert!(rect.contains(Vec2::new(10.0, 20.0))); // top-left edge is inclusive
        assert!(rect.contains(Vec2::new(35.0, 45.0)));
        assert!(!rect.contains(Vec2::new(60.0, 45.0))); // right edge is exclusive
        assert!(!rect.contains(Vec2::new(35.0, 70.0))); // bottom edge is exclusive
        assert!(!rect.contains(Vec2::new(9.9, 45.0)));
    }

    #[test]
    fn test_zero_area_never_contains() {
        let collapsed = Rect::new(Vec2::new(10.0, 20.0), Vec2::ZERO);
        assert!(!collapsed.contains(Vec2::new(10.0, 20.0)));

        let flat = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(50.0, 0.0));
        assert!(!flat.contains(Vec2::new(30.0, 20.0)));
    }

    #[test]
    fn test_intersects_band() {
        let rect = Rect::new(Vec2::new(0.0, 100.0), Vec2::new(50.0, 50.0));
        assert!(rect.intersects_band(0.0, 200.0));
        assert!(rect.intersects_band(125.0, 130.0));
        // Fully above or below the band
        assert!(!rect.intersects_band(150.0, 300.0));
        assert!(!rect.intersects_band(-50.0, 100.0));
    }
}
