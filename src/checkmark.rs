//! The six-vertex checkmark chevron.
//!
//! The checked state replaces the ring with a checkmark traced by six anchor
//! points. Their proportions are fixed ratios of the checkbox radius, so the
//! mark scales with the control while keeping its shape.

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunable proportions of the checkmark shape.
///
/// All lengths are ratios of the checkbox radius. The defaults reproduce the
/// original hand-tuned mark; changing them reshapes the chevron without
/// touching the path assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CheckmarkProfile {
    /// Slope of the long arm (screen coordinates, y down).
    pub rise: f32,
    /// Stroke thickness as a fraction of the radius.
    pub thickness_ratio: f32,
    /// Long-arm length as a fraction of the radius.
    pub length_ratio: f32,
    /// Starting anchor (tip of the long arm) as fractions of the radius.
    pub anchor: Vec2,
    /// Divisor applied to the short arm's angle, controlling how steeply the
    /// mark descends to its pivot.
    pub descent_scale: f32,
}

impl Default for CheckmarkProfile {
    fn default() -> Self {
        Self {
            rise: 2.0 / 3.0,
            thickness_ratio: 0.4,
            length_ratio: 1.2,
            anchor: Vec2::new(1.5, 0.65),
            descent_scale: 2.5,
        }
    }
}

impl CheckmarkProfile {
    /// Slope of the short arm, perpendicular to the long arm.
    pub fn fall(&self) -> f32 {
        -1.0 / self.rise
    }

    /// Computes the six chevron vertices for a checkbox of the given radius.
    ///
    /// The vertices chain: walking `p1 → p2 → ... → p6 → p1` traces the
    /// closed checkmark outline, and segment `i` of the checked state spans
    /// `vertices[i]` to `vertices[(i + 1) % 6]`.
    pub fn vertices(&self, radius: f32) -> [Vec2; 6] {
        let rise = self.rise;
        let fall = self.fall();

        let alpha = rise.atan();
        let gamma = fall.atan() / self.descent_scale;

        let thickness = self.thickness_ratio * radius;
        let length = self.length_ratio * radius;

        let p1 = self.anchor * radius;
        let p2 = p1 - Vec2::new(thickness * alpha, thickness * alpha * rise);
        let p3 = p2 + Vec2::new(length * gamma, length * gamma * fall);
        let p4 = p3 - Vec2::new(thickness * alpha, thickness * alpha * rise);
        let p5 = p4 + Vec2::new(thickness * gamma, thickness * gamma * fall);
        let p6 = p5 + Vec2::new(2.0 * thickness * alpha, 2.0 * thickness * alpha * rise);

        [p1, p2, p3, p4, p5, p6]
    }
}
