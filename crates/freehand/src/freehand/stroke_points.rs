use crate::constants::NEUTRAL_PRESSURE;
use crate::types::SamplePoint;

use super::{StrokeOptions, StrokePoint};

/// Points closer than this after streamlining collapse into one.
const DUPLICATE_EPSILON: f32 = 1e-4;

/// Convert raw samples into stroke points with smoothing, running distance,
/// direction, and pressure.
///
/// Streamlining pulls each point toward its predecessor, which both calms
/// noisy input and collapses consecutive duplicate samples (a pause during
/// drawing). A single-sample input yields a single stroke point; callers
/// route that through the dot path.
pub fn get_stroke_points(samples: &[SamplePoint], options: &StrokeOptions) -> Vec<StrokePoint> {
    if samples.is_empty() {
        return Vec::new();
    }

    // How closely the smoothed path tracks the raw input.
    let t = 0.15 + (1.0 - options.streamline) * 0.85;

    let first = samples[0];
    let mut points = vec![StrokePoint {
        point: first.position(),
        pressure: if options.simulate_pressure {
            NEUTRAL_PRESSURE
        } else {
            first.z.clamp(0.0, 1.0)
        },
        distance: 0.0,
        running_length: 0.0,
        vector: glam::Vec2::X,
        radius: 0.0,
    }];

    let mut running_length = 0.0;
    for sample in &samples[1..] {
        let prev = *points.last().expect("points is never empty");
        let point = prev.point.lerp(sample.position(), t);

        let distance = point.distance(prev.point);
        if distance < DUPLICATE_EPSILON {
            continue;
        }
        running_length += distance;

        let pressure = if options.simulate_pressure {
            // Rate-limited speed-to-pressure: fast segments thin the stroke,
            // but pressure may only drift a fraction of the gap per sample.
            let speed = (distance / options.size).min(1.0);
            let target = 1.0 - speed;
            (prev.pressure + (target - prev.pressure) * (speed * 0.5)).clamp(0.0, 1.0)
        } else {
            sample.z.clamp(0.0, 1.0)
        };

        points.push(StrokePoint {
            point,
            pressure,
            distance,
            running_length,
            vector: (point - prev.point) / distance,
            radius: 0.0,
        });
    }

    // The first point has no predecessor; borrow its successor's direction.
    if points.len() > 1 {
        points[0].vector = points[1].vector;
    }

    points
}
