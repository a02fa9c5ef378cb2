//! Flattening heterogeneous segment input into one ordered sample sequence.

use crate::error::StrokeError;
use crate::types::{SamplePoint, Segment};

/// Concatenate every segment's points in segment order into a single flat
/// sequence. No sorting and no deduplication: consecutive duplicate points
/// are valid input (a pause during drawing).
///
/// Returns [`StrokeError::EmptyInput`] for a stroke with zero segments;
/// callers must check the dot case first.
pub fn points_from_segments(segments: &[Segment]) -> Result<Vec<SamplePoint>, StrokeError> {
    if segments.is_empty() {
        return Err(StrokeError::EmptyInput);
    }

    let total: usize = segments.iter().map(|s| s.points.len()).sum();
    let mut points = Vec::with_capacity(total);
    for segment in segments {
        points.extend_from_slice(&segment.points);
    }
    Ok(points)
}

/// Scale every point's x and y by independent factors. Pressure (`z`) is
/// untouched. Pure: returns new segments, input is not mutated.
pub fn resize_segments(segments: &[Segment], scale_x: f32, scale_y: f32) -> Vec<Segment> {
    segments
        .iter()
        .map(|segment| Segment {
            kind: segment.kind,
            points: segment
                .points
                .iter()
                .map(|p| SamplePoint::new(p.x * scale_x, p.y * scale_y, p.z))
                .collect(),
        })
        .collect()
}
