use thiserror::Error;

/// Errors from stroke sampling and geometry construction.
///
/// Both variants indicate a caller-contract violation: degenerate strokes
/// must be routed through the dot path before building a polygon, and a
/// stroke owned by the host always has at least one segment.
#[derive(Debug, Error)]
pub enum StrokeError {
    #[error("cannot build a boundary polygon from {points} points (need at least 3)")]
    DegenerateGeometry { points: usize },
    #[error("stroke has no segments")]
    EmptyInput,
}
