//! Scrawl freehand stroke system - outline and hit-test geometry
//!
//! This crate turns raw pointer samples into renderable stroke geometry:
//! - [`types::Stroke`] - A stroke with segments, size, and input flags
//! - [`sample`] - Flattening segments into one ordered sample sequence
//! - [`freehand`] - The variable-width outline engine
//! - [`geom`] - Circle/polygon primitives for hit-testing and bounds
//! - [`path`] - Drawable path emission (filled outline, indicator, dot)
//! - [`shape`] - The per-stroke adapter consumed by the host framework

pub mod constants;
pub mod error;
pub mod freehand;
pub mod geom;
pub mod path;
pub mod sample;
pub mod shape;
pub mod types;

pub use constants::*;
pub use error::*;
pub use freehand::*;
pub use geom::*;
pub use path::*;
pub use sample::*;
pub use shape::*;
pub use types::*;
