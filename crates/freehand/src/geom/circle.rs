use glam::Vec2;

use super::Bounds;

/// A circle used as the hit-test geometry for degenerate "dot" strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2d {
    pub center: Vec2,
    pub radius: f32,
    pub is_filled: bool,
}

impl Circle2d {
    pub fn new(center: Vec2, radius: f32, is_filled: bool) -> Self {
        Self {
            center,
            radius,
            is_filled,
        }
    }

    /// Axis-aligned box of side `2 * radius` around the center.
    pub fn bounds(&self) -> Bounds {
        let r = Vec2::splat(self.radius);
        Bounds::new(self.center - r, self.center + r)
    }

    /// Euclidean containment: distance to center at most the radius.
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }

    /// Signed distance to the circle boundary. Negative inside when the
    /// circle is filled, so hit tolerance checks read `d <= tolerance`.
    pub fn distance_to_point(&self, point: Vec2) -> f32 {
        let d = (point - self.center).length() - self.radius;
        if self.is_filled { d } else { d.abs() }
    }
}
