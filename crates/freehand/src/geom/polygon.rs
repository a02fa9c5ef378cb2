use glam::Vec2;

use super::{Bounds, point_segment_distance};
use crate::error::StrokeError;

/// A closed polygon over an ordered vertex loop, used as the hit-test
/// geometry for non-degenerate stroke outlines.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2d {
    points: Vec<Vec2>,
    pub is_filled: bool,
}

impl Polygon2d {
    /// Requires at least 3 points. Callers must route degenerate strokes
    /// through the dot path before constructing a polygon.
    pub fn new(points: Vec<Vec2>, is_filled: bool) -> Result<Self, StrokeError> {
        if points.len() < 3 {
            return Err(StrokeError::DegenerateGeometry {
                points: points.len(),
            });
        }
        Ok(Self { points, is_filled })
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Min/max over all vertices.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(&self.points)
    }

    /// Standard ray-casting point-in-polygon test over the vertex loop.
    pub fn contains(&self, point: Vec2) -> bool {
        let mut inside = false;
        let n = self.points.len();
        let mut j = n - 1;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[j];
            if (a.y > point.y) != (b.y > point.y) {
                let x = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if point.x < x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Signed distance to the polygon boundary: minimum over all edges,
    /// negative inside when the polygon is filled.
    pub fn distance_to_point(&self, point: Vec2) -> f32 {
        let n = self.points.len();
        let mut min_dist = f32::INFINITY;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            min_dist = min_dist.min(point_segment_distance(point, a, b));
        }
        if self.is_filled && self.contains(point) {
            -min_dist
        } else {
            min_dist
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon2d {
        Polygon2d::new(
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(4.0, 0.0),
                Vec2::new(4.0, 4.0),
                Vec2::new(0.0, 4.0),
            ],
            true,
        )
        .unwrap()
    }

    #[test]
    fn test_too_few_points_is_degenerate() {
        let err = Polygon2d::new(vec![Vec2::ZERO, Vec2::ONE], true).unwrap_err();
        assert!(matches!(err, StrokeError::DegenerateGeometry { points: 2 }));
    }

    #[test]
    fn test_bounds() {
        let bounds = unit_square().bounds();
        assert_eq!(bounds.min, Vec2::ZERO);
        assert_eq!(bounds.max, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_contains() {
        let square = unit_square();
        assert!(square.contains(Vec2::new(2.0, 2.0)));
        assert!(!square.contains(Vec2::new(5.0, 2.0)));
        assert!(!square.contains(Vec2::new(-0.1, 2.0)));
    }

    #[test]
    fn test_contains_concave() {
        // L-shape: the notch is outside
        let l_shape = Polygon2d::new(
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(4.0, 0.0),
                Vec2::new(4.0, 2.0),
                Vec2::new(2.0, 2.0),
                Vec2::new(2.0, 4.0),
                Vec2::new(0.0, 4.0),
            ],
            true,
        )
        .unwrap();
        assert!(l_shape.contains(Vec2::new(1.0, 3.0)));
        assert!(l_shape.contains(Vec2::new(3.0, 1.0)));
        assert!(!l_shape.contains(Vec2::new(3.0, 3.0)));
    }

    #[test]
    fn test_distance_to_point() {
        let square = unit_square();
        assert!((square.distance_to_point(Vec2::new(6.0, 2.0)) - 2.0).abs() < 1e-6);
        // Inside a filled polygon reports negative distance to the boundary
        assert!((square.distance_to_point(Vec2::new(2.0, 2.0)) + 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_vertices_within_own_bounds() {
        let square = unit_square();
        let bounds = square.bounds();
        for p in square.points() {
            assert!(bounds.contains(*p));
        }
    }
}
