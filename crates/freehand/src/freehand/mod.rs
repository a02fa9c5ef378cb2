//! The stroke outline engine.
//!
//! Converts a flat sample sequence plus a width/style configuration into an
//! ordered polygon outline with width varying along the path:
//! 1. [`get_stroke_points`] - smoothing, duplicate collapse, pressure
//! 2. [`set_stroke_point_radii`] - per-point radius with start/end tapers
//! 3. [`get_stroke_outline_points`] - the closed boundary loop
//!
//! The deterministic width jitter for single-point strokes lives in
//! [`width_jitter`].

mod outline;
mod radii;
mod stroke_points;

pub use outline::get_stroke_outline_points;
pub use radii::set_stroke_point_radii;
pub use stroke_points::get_stroke_points;

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::constants::JITTER_FRACTION;

/// Width and style configuration consumed by the outline engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeOptions {
    /// Full stroke width in pixels at neutral pressure.
    pub size: f32,
    /// How much pressure narrows the stroke, 0..1. Zero gives uniform width.
    pub thinning: f32,
    /// Minimum spacing between emitted outline points, as a fraction of size.
    pub smoothing: f32,
    /// Input smoothing strength, 0..1. Higher values track the pointer more
    /// loosely and produce calmer paths.
    pub streamline: f32,
    /// Derive pressure from drawing speed instead of the sampled `z`.
    pub simulate_pressure: bool,
    /// Rounded cap at the leading end.
    pub cap_start: bool,
    /// Rounded cap at the trailing end; false gives a squared end.
    pub cap_end: bool,
    /// Distance over which the leading end tapers in. Zero disables.
    pub taper_start: f32,
    /// Distance over which the trailing end tapers out while the stroke is
    /// still being drawn. Ignored when `last` is set.
    pub taper_end: f32,
    /// The trailing end is final: draw a cap there instead of a taper.
    pub last: bool,
}

impl StrokeOptions {
    /// The configuration used for whiteboard strokes of the given width.
    pub fn new(size: f32) -> Self {
        Self {
            size,
            thinning: 0.5,
            smoothing: 0.5,
            streamline: 0.5,
            simulate_pressure: true,
            cap_start: true,
            cap_end: true,
            taper_start: size,
            taper_end: size,
            last: false,
        }
    }
}

/// A sample annotated with running distance and an assigned radius. Used
/// only inside outline computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePoint {
    pub point: Vec2,
    /// Pressure in [0, 1], sampled or simulated.
    pub pressure: f32,
    /// Distance from the previous stroke point.
    pub distance: f32,
    /// Total distance along the path up to this point.
    pub running_length: f32,
    /// Unit direction from the previous stroke point.
    pub vector: Vec2,
    /// Half-width at this point, assigned by [`set_stroke_point_radii`].
    pub radius: f32,
}

/// Deterministic width perturbation for single-point strokes.
///
/// Seeded from the stroke's stable identity only, so repeated renders of the
/// same stroke produce an identical outline. Returns an offset in
/// `[0, width / 6)`.
pub fn width_jitter(id: u64, width: f32) -> f32 {
    let mut rng = SmallRng::seed_from_u64(id);
    rng.random::<f32>() * (width * JITTER_FRACTION)
}
