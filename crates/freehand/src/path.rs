//! Drawable path descriptions emitted for the host's filled-path draw calls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One drawing command. `ArcTo` follows SVG arc semantics with equal radii
/// (only circular arcs are ever emitted).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { control: Vec2, to: Vec2 },
    ArcTo { radius: f32, sweep: bool, to: Vec2 },
    Close,
}

/// An ordered command sequence describing one drawable path.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Smoothed closed path through an outline loop: quadratic curves through
    /// each vertex, joining at successive edge midpoints.
    pub fn from_outline(points: &[Vec2]) -> Self {
        if points.len() < 3 {
            return Self::default();
        }
        let n = points.len();
        let mut commands = Vec::with_capacity(n + 2);
        commands.push(PathCommand::MoveTo((points[0] + points[1]) * 0.5));
        for i in 1..=n {
            let control = points[i % n];
            let to = (points[i % n] + points[(i + 1) % n]) * 0.5;
            commands.push(PathCommand::QuadTo { control, to });
        }
        commands.push(PathCommand::Close);
        Self { commands }
    }

    /// Thin open (or closed) path through stroke-point centers, used for the
    /// selection indicator.
    pub fn from_centerline(points: &[Vec2], closed: bool) -> Self {
        if points.is_empty() {
            return Self::default();
        }
        if points.len() < 3 {
            let mut commands = vec![PathCommand::MoveTo(points[0])];
            if points.len() == 2 {
                commands.push(PathCommand::LineTo(points[1]));
            }
            return Self { commands };
        }

        let mut commands = Vec::with_capacity(points.len() + 2);
        commands.push(PathCommand::MoveTo(points[0]));
        for i in 1..points.len() - 1 {
            commands.push(PathCommand::QuadTo {
                control: points[i],
                to: (points[i] + points[i + 1]) * 0.5,
            });
        }
        commands.push(PathCommand::LineTo(points[points.len() - 1]));
        if closed {
            commands.push(PathCommand::Close);
        }
        Self { commands }
    }

    /// A full circle as two half-circle arcs, not a polygon approximation.
    pub fn dot(center: Vec2, radius: f32) -> Self {
        let west = center - Vec2::new(radius, 0.0);
        let east = center + Vec2::new(radius, 0.0);
        Self {
            commands: vec![
                PathCommand::MoveTo(west),
                PathCommand::ArcTo {
                    radius,
                    sweep: true,
                    to: east,
                },
                PathCommand::ArcTo {
                    radius,
                    sweep: true,
                    to: west,
                },
                PathCommand::Close,
            ],
        }
    }

    /// SVG path data for the host's draw call.
    pub fn to_svg(&self) -> String {
        use std::fmt::Write;

        let mut d = String::new();
        for command in &self.commands {
            if !d.is_empty() {
                d.push(' ');
            }
            match command {
                PathCommand::MoveTo(p) => write!(d, "M {} {}", p.x, p.y),
                PathCommand::LineTo(p) => write!(d, "L {} {}", p.x, p.y),
                PathCommand::QuadTo { control, to } => {
                    write!(d, "Q {} {} {} {}", control.x, control.y, to.x, to.y)
                }
                PathCommand::ArcTo { radius, sweep, to } => {
                    write!(
                        d,
                        "A {} {} 0 1 {} {} {}",
                        radius,
                        radius,
                        u8::from(*sweep),
                        to.x,
                        to.y
                    )
                }
                PathCommand::Close => write!(d, "Z"),
            }
            .expect("writing to a String cannot fail");
        }
        d
    }
}

/// A path annotated with the values the host attaches at draw time. The
/// same outline feeds both the overlay and underlay layers; only the
/// opacity differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawPath {
    pub path: Path,
    /// Theme-resolved color string; not consumed by any geometry code.
    pub color: String,
    /// Centerline width, for hosts that draw the path stroked as well.
    pub stroke_width: f32,
    pub opacity: f32,
}
