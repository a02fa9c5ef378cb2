use super::{StrokeOptions, StrokePoint};

/// Radii never taper fully to zero; the outline offsets need a direction.
const MIN_RADIUS: f32 = 0.01;

/// Assign each stroke point a radius from its pressure and its running
/// distance along the path.
///
/// The base radius narrows with low pressure according to `thinning`. The
/// leading `taper_start` of the path eases the radius in from near zero,
/// and unless the stroke is `last`, the trailing `taper_end` eases it back
/// out - the open end of a stroke still being drawn tapers instead of
/// getting a cap.
pub fn set_stroke_point_radii(points: &mut [StrokePoint], options: &StrokeOptions) {
    let Some(last_point) = points.last() else {
        return;
    };
    let total_length = last_point.running_length;

    for p in points.iter_mut() {
        p.radius = stroke_radius(options.size, options.thinning, p.pressure);
    }

    if total_length <= 0.0 {
        return;
    }

    let taper_start = options.taper_start.clamp(0.0, total_length);
    let taper_end = if options.last {
        0.0
    } else {
        options.taper_end.clamp(0.0, total_length)
    };
    if taper_start <= 0.0 && taper_end <= 0.0 {
        return;
    }

    for p in points.iter_mut() {
        let ts = if taper_start > 0.0 && p.running_length < taper_start {
            ease_out(p.running_length / taper_start)
        } else {
            1.0
        };
        let remaining = total_length - p.running_length;
        let te = if taper_end > 0.0 && remaining < taper_end {
            ease_out(remaining / taper_end)
        } else {
            1.0
        };
        p.radius = (p.radius * ts.min(te)).max(MIN_RADIUS);
    }
}

/// Half-width for a given pressure. At neutral pressure the full stroke
/// width equals `size` regardless of thinning.
fn stroke_radius(size: f32, thinning: f32, pressure: f32) -> f32 {
    size * (0.5 - thinning * (0.5 - pressure))
}

fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freehand::get_stroke_points;
    use crate::types::SamplePoint;

    fn line_points(n: usize, spacing: f32, options: &StrokeOptions) -> Vec<StrokePoint> {
        let samples: Vec<_> = (0..n)
            .map(|i| SamplePoint::new(i as f32 * spacing, 0.0, 0.5))
            .collect();
        get_stroke_points(&samples, options)
    }

    #[test]
    fn test_neutral_pressure_radius_is_half_size() {
        assert_eq!(stroke_radius(24.0, 0.5, 0.5), 12.0);
        assert_eq!(stroke_radius(24.0, 0.0, 0.1), 12.0);
    }

    #[test]
    fn test_thinning_narrows_low_pressure() {
        assert!(stroke_radius(24.0, 0.5, 0.1) < stroke_radius(24.0, 0.5, 0.9));
    }

    #[test]
    fn test_start_tapers_in() {
        let mut options = StrokeOptions::new(10.0);
        options.last = true;
        let mut points = line_points(20, 4.0, &options);
        set_stroke_point_radii(&mut points, &options);

        // First point near zero, interior points at full radius
        assert!(points[0].radius <= MIN_RADIUS + 1e-6);
        let mid = points[points.len() / 2].radius;
        assert!(mid > points[0].radius);
        assert!(points.last().unwrap().radius > points[0].radius);
    }

    #[test]
    fn test_open_end_tapers_unless_last() {
        let options = StrokeOptions::new(10.0);
        let mut open = line_points(20, 4.0, &options);
        set_stroke_point_radii(&mut open, &options);
        assert!(open.last().unwrap().radius <= MIN_RADIUS + 1e-6);

        let mut final_options = options;
        final_options.last = true;
        let mut done = line_points(20, 4.0, &final_options);
        set_stroke_point_radii(&mut done, &final_options);
        assert!(done.last().unwrap().radius > open.last().unwrap().radius);
    }
}
