use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::NEUTRAL_PRESSURE;

/// One raw input sample. `z` is the pressure in [0, 1]; samples captured
/// without pressure get the neutral value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f32,
    pub y: f32,
    #[serde(default = "neutral_pressure")]
    pub z: f32,
}

fn neutral_pressure() -> f32 {
    NEUTRAL_PRESSURE
}

impl SamplePoint {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The 2D position, dropping pressure.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// How a segment was produced by the input gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Free,
    Straight,
}

/// One continuous sub-path of a stroke, appended in temporal order.
/// Order is significant and defines the path direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(rename = "type")]
    pub kind: SegmentKind,
    pub points: Vec<SamplePoint>,
}

impl Segment {
    pub fn free(points: Vec<SamplePoint>) -> Self {
        Self {
            kind: SegmentKind::Free,
            points,
        }
    }

    pub fn straight(points: Vec<SamplePoint>) -> Self {
        Self {
            kind: SegmentKind::Straight,
            points,
        }
    }
}

/// Stroke width token. Maps to a base pixel width via [`crate::stroke_width`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum SizeToken {
    S = 0,
    #[default]
    M = 1,
    L = 2,
    Xl = 3,
}

/// Mutable per-stroke properties owned by the host framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeProps {
    pub segments: Vec<Segment>,
    /// Theme color token; resolution to a concrete color happens in the host.
    pub color: String,
    pub size: SizeToken,
    /// The input gesture has ended. Affects end-cap rendering.
    pub is_complete: bool,
    /// Stylus input carries accurate widths, so jitter is disabled.
    pub is_pen: bool,
}

/// A freehand stroke shape. `id` is the stable identity that seeds the
/// deterministic width jitter; the host assigns it at creation and never
/// changes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub id: u64,
    pub props: StrokeProps,
}

impl Stroke {
    pub fn new(id: u64, props: StrokeProps) -> Self {
        Self { id, props }
    }
}
