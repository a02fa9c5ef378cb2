use std::f32::consts::PI;

use glam::Vec2;
use tracing::debug;

use super::{StrokeOptions, StrokePoint};

/// Number of points emitted per cap or sharp-corner arc.
const CAP_STEPS: usize = 13;

/// Left-hand normal of a unit direction vector.
fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

fn rotate_around(point: Vec2, center: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    let d = point - center;
    center + Vec2::new(d.x * c - d.y * s, d.x * s + d.y * c)
}

/// Walk the radius-annotated stroke points and produce the closed boundary
/// loop: left side out, end cap, right side back, start cap.
///
/// Tapered ends converge to the path point itself instead of getting a cap;
/// squared ends get a flat edge between the two side corners. Fewer than 2
/// stroke points cannot form an outline - the caller degrades those strokes
/// to the dot path.
pub fn get_stroke_outline_points(points: &[StrokePoint], options: &StrokeOptions) -> Vec<Vec2> {
    if points.len() < 2 {
        debug!(count = points.len(), "too few stroke points for an outline");
        return Vec::new();
    }

    let n = points.len();
    let first = points[0];
    let last = points[n - 1];
    let total_length = last.running_length;

    let taper_start = options.taper_start > 0.0;
    let taper_end = options.taper_end > 0.0 && !options.last;

    // A stroke shorter than its own width and without tapers is just a blob;
    // emit a circle around its midpoint.
    if total_length <= options.size && !taper_start && !taper_end {
        let center = (first.point + last.point) * 0.5;
        let radius = points.iter().map(|p| p.radius).fold(0.0, f32::max);
        let steps = CAP_STEPS * 2;
        return (0..steps)
            .map(|i| {
                let angle = 2.0 * PI * i as f32 / steps as f32;
                center + Vec2::new(angle.cos(), angle.sin()) * radius
            })
            .collect();
    }

    // Skip side points closer together than this; keeps the outline from
    // stair-stepping on dense input.
    let min_distance_sq = (options.size * options.smoothing).powi(2);

    let mut left: Vec<Vec2> = Vec::with_capacity(n + CAP_STEPS);
    let mut right: Vec<Vec2> = Vec::with_capacity(n + CAP_STEPS);
    let mut prev_left = first.point;
    let mut prev_right = first.point;

    for (i, p) in points.iter().enumerate() {
        let next_vector = if i < n - 1 {
            points[i + 1].vector
        } else {
            p.vector
        };
        let dpr = p.vector.dot(next_vector);

        // A reversal sharper than 90 degrees: wrap the corner with arcs on
        // both sides so the outline does not fold through itself.
        if i > 0 && i < n - 1 && dpr < 0.0 {
            let offset = perp(p.vector) * p.radius;
            let corner_left = p.point + offset;
            let corner_right = p.point - offset;
            for step in 0..CAP_STEPS {
                let t = step as f32 / (CAP_STEPS - 1) as f32;
                left.push(rotate_around(corner_left, p.point, PI * t));
                right.push(rotate_around(corner_right, p.point, -PI * t));
            }
            prev_left = *left.last().expect("corner arc emitted points");
            prev_right = *right.last().expect("corner arc emitted points");
            continue;
        }

        // Blend this direction with the next so joins stay smooth; the
        // un-normalized blend narrows the offset slightly at corners.
        let offset = perp(next_vector.lerp(p.vector, dpr.clamp(0.0, 1.0))) * p.radius;
        let pl = p.point + offset;
        let pr = p.point - offset;

        let force = i == 0 || i == n - 1;
        if force || (pl - prev_left).length_squared() > min_distance_sq {
            left.push(pl);
            prev_left = pl;
        }
        if force || (pr - prev_right).length_squared() > min_distance_sq {
            right.push(pr);
            prev_right = pr;
        }
    }

    let mut outline = left;

    // Trailing end: taper converges on the path point, a round cap sweeps
    // from the left edge to the right edge, a squared end closes flat.
    if taper_end {
        outline.push(last.point);
    } else if options.cap_end {
        let edge = last.point + perp(last.vector) * last.radius;
        for step in 1..CAP_STEPS {
            let angle = -PI * step as f32 / CAP_STEPS as f32;
            outline.push(rotate_around(edge, last.point, angle));
        }
    }

    outline.extend(right.iter().rev());

    // Leading end, same three cases.
    if taper_start {
        outline.push(first.point);
    } else if options.cap_start {
        let edge = first.point - perp(first.vector) * first.radius;
        for step in 1..CAP_STEPS {
            let angle = -PI * step as f32 / CAP_STEPS as f32;
            outline.push(rotate_around(edge, first.point, angle));
        }
    }

    outline
}
