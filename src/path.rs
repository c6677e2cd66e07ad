//! Closed vector paths built from move/line/cubic commands.
//!
//! The checkbox emits exactly one closed region per segment, so the command
//! set is deliberately small: no quadratics, no sub-path moves. Paths that
//! share a command structure can be interpolated pointwise, which is what a
//! host animation driver does between the two keyframes of a morph.

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PathCommand {
    /// Move to a point without drawing.
    MoveTo(Vec2),
    /// Draw a line to a point.
    LineTo(Vec2),
    /// Cubic bezier curve to a point with two control points.
    CubicTo {
        control1: Vec2,
        control2: Vec2,
        to: Vec2,
    },
    /// Close the current region by drawing a line to the start.
    Close,
}

/// An ordered command sequence describing one closed planar region.
///
/// Equality is exact: two paths compare equal only when every coordinate is
/// bit-identical, which is the contract the seam-free ring tiling relies on.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the path commands.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns the number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Computes the exact axis-aligned bounding box, or `None` for an empty
    /// path.
    ///
    /// Cubic spans contribute their true extrema rather than their control
    /// hull, so an arc's box does not overshoot the circle it approximates.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        let mut current = Vec2::ZERO;
        let mut any = false;

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    min = min.min(p);
                    max = max.max(p);
                    current = p;
                    any = true;
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    let (lo, hi) = cubic_bounds(current, control1, control2, to);
                    min = min.min(lo);
                    max = max.max(hi);
                    current = to;
                    any = true;
                }
                PathCommand::Close => {}
            }
        }

        any.then_some((min, max))
    }

    /// Interpolates pointwise toward `other` by factor `t`.
    ///
    /// Returns `None` when the command structures differ; a ring wedge and a
    /// checkmark sliver have different topologies, and interpolating those is
    /// the host renderer's job, not ours.
    pub fn lerp(&self, other: &Path, t: f32) -> Option<Path> {
        if self.commands.len() != other.commands.len() {
            return None;
        }

        let mut commands = Vec::with_capacity(self.commands.len());
        for (a, b) in self.commands.iter().zip(&other.commands) {
            let cmd = match (*a, *b) {
                (PathCommand::MoveTo(p), PathCommand::MoveTo(q)) => {
                    PathCommand::MoveTo(p.lerp(q, t))
                }
                (PathCommand::LineTo(p), PathCommand::LineTo(q)) => {
                    PathCommand::LineTo(p.lerp(q, t))
                }
                (
                    PathCommand::CubicTo {
                        control1: a1,
                        control2: a2,
                        to: ae,
                    },
                    PathCommand::CubicTo {
                        control1: b1,
                        control2: b2,
                        to: be,
                    },
                ) => PathCommand::CubicTo {
                    control1: a1.lerp(b1, t),
                    control2: a2.lerp(b2, t),
                    to: ae.lerp(be, t),
                },
                (PathCommand::Close, PathCommand::Close) => PathCommand::Close,
                _ => return None,
            };
            commands.push(cmd);
        }

        Some(Path { commands })
    }
}

/// Builder for constructing paths.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    /// Creates a new path builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves to a point without drawing.
    pub fn move_to(mut self, to: Vec2) -> Self {
        self.path.commands.push(PathCommand::MoveTo(to));
        self
    }

    /// Draws a line to a point.
    pub fn line_to(mut self, to: Vec2) -> Self {
        self.path.commands.push(PathCommand::LineTo(to));
        self
    }

    /// Draws a cubic bezier curve.
    pub fn cubic_to(mut self, control1: Vec2, control2: Vec2, to: Vec2) -> Self {
        self.path.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
        self
    }

    /// Closes the region.
    pub fn close(mut self) -> Self {
        self.path.commands.push(PathCommand::Close);
        self
    }

    /// Builds the final path.
    pub fn build(self) -> Path {
        self.path
    }
}

/// Computes the bounding box of one cubic span by solving the derivative's
/// roots per axis.
fn cubic_bounds(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> (Vec2, Vec2) {
    let mut min = p0.min(p3);
    let mut max = p0.max(p3);

    for axis in 0..2 {
        // Derivative of the cubic is a quadratic in t per axis.
        let a = -p0[axis] + 3.0 * p1[axis] - 3.0 * p2[axis] + p3[axis];
        let b = 2.0 * p0[axis] - 4.0 * p1[axis] + 2.0 * p2[axis];
        let c = -p0[axis] + p1[axis];

        if a.abs() < 1e-10 {
            if b.abs() > 1e-10 {
                let t = -c / b;
                if t > 0.0 && t < 1.0 {
                    let v = cubic_point(p0, p1, p2, p3, t)[axis];
                    min[axis] = min[axis].min(v);
                    max[axis] = max[axis].max(v);
                }
            }
        } else {
            let discriminant = b * b - 4.0 * a * c;
            if discriminant >= 0.0 {
                let sqrt_d = discriminant.sqrt();
                for t in [(-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a)] {
                    if t > 0.0 && t < 1.0 {
                        let v = cubic_point(p0, p1, p2, p3, t)[axis];
                        min[axis] = min[axis].min(v);
                        max[axis] = max[axis].max(v);
                    }
                }
            }
        }
    }

    (min, max)
}

/// Evaluates a cubic bezier at parameter `t`.
#[inline]
pub fn cubic_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let mt3 = mt2 * mt;
    let t2 = t * t;
    let t3 = t2 * t;
    p0 * mt3 + p1 * (3.0 * mt2 * t) + p2 * (3.0 * mt * t2) + p3 * t3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wedge_like(scale: f32) -> Path {
        PathBuilder::new()
            .move_to(Vec2::new(scale, 0.0))
            .cubic_to(
                Vec2::new(scale, scale * 0.5),
                Vec2::new(scale * 0.5, scale),
                Vec2::new(0.0, scale),
            )
            .line_to(Vec2::new(0.0, scale * 0.5))
            .close()
            .build()
    }

    #[test]
    fn test_builder_command_order() {
        let path = wedge_like(1.0);
        assert_eq!(path.len(), 4);
        assert!(matches!(path.commands()[0], PathCommand::MoveTo(_)));
        assert!(matches!(path.commands()[3], PathCommand::Close));
    }

    #[test]
    fn test_bounds_catches_cubic_bulge() {
        // Curve bulging above both endpoints.
        let path = PathBuilder::new()
            .move_to(Vec2::ZERO)
            .cubic_to(Vec2::new(0.0, 2.0), Vec2::new(1.0, 2.0), Vec2::X)
            .build();

        let (min, max) = path.bounds().unwrap();
        assert!(min.y <= 0.0);
        assert!(max.y >= 1.0);
        // Exact extrema, not the control hull: the curve peaks at 1.5.
        assert!((max.y - 1.5).abs() < 0.001);
    }

    #[test]
    fn test_bounds_empty() {
        assert!(Path::new().bounds().is_none());
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = wedge_like(1.0);
        let b = wedge_like(3.0);

        assert_eq!(a.lerp(&b, 0.0).unwrap(), a);
        assert_eq!(a.lerp(&b, 1.0).unwrap(), b);

        let mid = a.lerp(&b, 0.5).unwrap();
        if let PathCommand::MoveTo(p) = mid.commands()[0] {
            assert!((p.x - 2.0).abs() < 0.001);
        } else {
            panic!("expected MoveTo");
        }
    }

    #[test]
    fn test_lerp_rejects_mismatched_structure() {
        let a = wedge_like(1.0);
        let b = PathBuilder::new()
            .move_to(Vec2::ZERO)
            .line_to(Vec2::X)
            .close()
            .build();

        assert!(a.lerp(&b, 0.5).is_none());
    }

    #[test]
    fn test_cubic_point_endpoints() {
        let p0 = Vec2::ZERO;
        let p1 = Vec2::new(0.25, 1.0);
        let p2 = Vec2::new(0.75, 1.0);
        let p3 = Vec2::X;

        assert!((cubic_point(p0, p1, p2, p3, 0.0) - p0).length() < 0.001);
        assert!((cubic_point(p0, p1, p2, p3, 1.0) - p3).length() < 0.001);
    }
}
