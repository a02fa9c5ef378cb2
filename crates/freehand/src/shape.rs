//! The per-stroke shape adapter.
//!
//! This is the only surface the host framework talks to: default
//! properties, hit-test geometry, render paths for the two opacity layers,
//! the selection indicator, and the resize transform. Everything here is a
//! pure function of the current stroke state; outlines are recomputed on
//! demand and never cached.

use glam::Vec2;
use tracing::debug;

use crate::constants::{OVERLAY_OPACITY, RENDER_DOT_RADIUS, UNDERLAY_OPACITY, stroke_width};
use crate::error::StrokeError;
use crate::freehand::{
    StrokeOptions, StrokePoint, get_stroke_outline_points, get_stroke_points,
    set_stroke_point_radii, width_jitter,
};
use crate::geom::{Bounds, Circle2d, Polygon2d};
use crate::path::{DrawPath, Path};
use crate::sample::{points_from_segments, resize_segments};
use crate::types::{SegmentKind, SizeToken, Stroke, StrokeProps};

/// Hit-test geometry for one stroke: a circle for dots, a polygon over the
/// outline for everything else. Closed dispatch - these are the only two
/// shapes a stroke ever produces.
#[derive(Debug, Clone, PartialEq)]
pub enum StrokeGeometry {
    Circle(Circle2d),
    Polygon(Polygon2d),
}

impl StrokeGeometry {
    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Circle(c) => c.bounds(),
            Self::Polygon(p) => p.bounds(),
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        match self {
            Self::Circle(c) => c.contains(point),
            Self::Polygon(p) => p.contains(point),
        }
    }

    pub fn distance_to_point(&self, point: Vec2) -> f32 {
        match self {
            Self::Circle(c) => c.distance_to_point(point),
            Self::Polygon(p) => p.distance_to_point(point),
        }
    }
}

impl Stroke {
    /// Properties for a freshly created stroke shape.
    pub fn default_props() -> StrokeProps {
        StrokeProps {
            segments: Vec::new(),
            color: "black".to_string(),
            size: SizeToken::M,
            is_complete: false,
            is_pen: false,
        }
    }

    /// A degenerate radius-only stroke: at most one segment holding fewer
    /// than two points.
    pub fn is_dot(&self) -> bool {
        let segments = &self.props.segments;
        segments.is_empty() || (segments.len() == 1 && segments[0].points.len() < 2)
    }

    pub fn hide_resize_handles(&self) -> bool {
        self.is_dot()
    }

    pub fn hide_rotate_handle(&self) -> bool {
        self.is_dot()
    }

    pub fn hide_selection_bounds_fg(&self) -> bool {
        self.is_dot()
    }

    fn base_width(&self) -> f32 {
        stroke_width(self.props.size)
    }

    fn dot_center(&self) -> Vec2 {
        self.props
            .segments
            .first()
            .and_then(|s| s.points.first())
            .map(|p| p.position())
            .unwrap_or(Vec2::ZERO)
    }

    fn options(&self, size: f32) -> StrokeOptions {
        let last_straight = matches!(
            self.props.segments.last().map(|s| s.kind),
            Some(SegmentKind::Straight)
        );
        let mut options = StrokeOptions::new(size);
        options.simulate_pressure = !self.props.is_pen;
        // A straight trailing segment is final and always ends squared
        options.last = self.props.is_complete || last_straight;
        options.cap_end = !last_straight;
        options
    }

    /// Steps 1-2 of the outline engine: jittered width plus smoothed stroke
    /// points. Shared by geometry, render, and indicator so they stay
    /// visually consistent.
    fn stroke_points(&self, force_solid: bool) -> Result<(Vec<StrokePoint>, f32), StrokeError> {
        let samples = points_from_segments(&self.props.segments)?;

        let mut sw = self.base_width();
        if !force_solid && !self.props.is_pen && samples.len() == 1 {
            sw += width_jitter(self.id, self.base_width());
        }

        let options = self.options(sw);
        Ok((get_stroke_points(&samples, &options), sw))
    }

    /// Circle (dot) or outline polygon for hit-testing and bounds.
    pub fn geometry(&self, force_solid: bool) -> Result<StrokeGeometry, StrokeError> {
        let sw = self.base_width();
        if self.is_dot() {
            return Ok(StrokeGeometry::Circle(Circle2d::new(
                self.dot_center(),
                sw / 2.0,
                true,
            )));
        }

        let (mut points, sw) = self.stroke_points(force_solid)?;
        // Hit geometry always treats the trailing end as final; an open
        // taper would leave nothing to hit under the pointer.
        let mut options = self.options(sw);
        options.last = true;

        set_stroke_point_radii(&mut points, &options);
        let outline = get_stroke_outline_points(&points, &options);
        if outline.len() < 3 {
            // Duplicate samples collapsed the stroke to one point
            debug!(id = self.id, "stroke degraded to dot geometry");
            let center = points
                .first()
                .map(|p| p.point)
                .unwrap_or_else(|| self.dot_center());
            return Ok(StrokeGeometry::Circle(Circle2d::new(center, sw / 2.0, true)));
        }
        Ok(StrokeGeometry::Polygon(Polygon2d::new(outline, true)?))
    }

    /// Overlay draw path, rendered above other canvas content.
    pub fn render(&self, color: &str, force_solid: bool) -> Result<DrawPath, StrokeError> {
        self.draw_path(color, force_solid, OVERLAY_OPACITY)
    }

    /// Underlay draw path: same outline, different opacity.
    pub fn render_background(
        &self,
        color: &str,
        force_solid: bool,
    ) -> Result<DrawPath, StrokeError> {
        self.draw_path(color, force_solid, UNDERLAY_OPACITY)
    }

    fn draw_path(
        &self,
        color: &str,
        force_solid: bool,
        opacity: f32,
    ) -> Result<DrawPath, StrokeError> {
        let (mut points, sw) = self.stroke_points(force_solid)?;
        let options = self.options(sw);

        let path = if points.len() < 2 {
            // Ambient dot: tiny fixed radius, the stroked centerline width
            // supplies the visual size
            Path::dot(self.dot_center(), RENDER_DOT_RADIUS)
        } else {
            set_stroke_point_radii(&mut points, &options);
            let outline = get_stroke_outline_points(&points, &options);
            if outline.len() < 3 {
                Path::dot(self.dot_center(), RENDER_DOT_RADIUS)
            } else {
                Path::from_outline(&outline)
            }
        };

        Ok(DrawPath {
            path,
            color: color.to_string(),
            stroke_width: sw,
            opacity,
        })
    }

    /// Thin selection-outline path through the stroke-point centers,
    /// recomputed with the same jitter and smoothing as the render path.
    pub fn indicator(&self, force_solid: bool) -> Result<Path, StrokeError> {
        let (points, sw) = self.stroke_points(force_solid)?;
        if points.len() < 2 {
            return Ok(Path::dot(self.dot_center(), sw / 2.0));
        }
        let centers: Vec<Vec2> = points.iter().map(|p| p.point).collect();
        Ok(Path::from_centerline(&centers, false))
    }

    /// A copy with every segment point scaled by independent x/y factors.
    /// Pressure and all other fields are untouched.
    pub fn resized(&self, scale_x: f32, scale_y: f32) -> Stroke {
        Stroke {
            id: self.id,
            props: StrokeProps {
                segments: resize_segments(&self.props.segments, scale_x, scale_y),
                ..self.props.clone()
            },
        }
    }
}
