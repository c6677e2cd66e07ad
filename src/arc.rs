//! Circle point and tangent math for arc segments.
//!
//! Everything here works in the checkbox's local frame: the circle of radius
//! `r` is centered at `(r, r)`, so its bounding box is `[0, 2r]²` and the
//! origin sits at the box's top-left (y grows downward, as in screen space).
//! Angles are measured clockwise from the circle's right-center, so
//! `theta = 0` lands at `(2r, r)` and `theta = π/2` at top-center.

use glam::Vec2;

/// Sub-pixel inset applied to every circle point so adjacent segment layers
/// overlap by a hair instead of leaving a seam.
pub const FRAME_EPSILON: f32 = 0.001;

/// Returns the point at angular position `theta` on the circle of the given
/// radius, in the local `[0, 2r]²` frame.
///
/// `nudge` shifts the result diagonally and is how inner-arc points are
/// pulled toward the center: a point on the inner circle of radius
/// `r - border_width` nudged by `border_width` lands on the correct inner
/// rim of the full-size frame.
///
/// Periodic in `2π`: `point_on_circle(r, t + TAU, n)` matches
/// `point_on_circle(r, t, n)` up to float rounding.
pub fn point_on_circle(radius: f32, theta: f32, nudge: f32) -> Vec2 {
    // Clockwise rotation of the reference point (radius, 0).
    let u = radius * theta.cos();
    let v = -radius * theta.sin();
    Vec2::new(
        u + radius - FRAME_EPSILON + nudge,
        v + radius - FRAME_EPSILON + nudge,
    )
}

/// Returns the scalar factor `(4/3)·tan(π/(2n))` that places cubic bezier
/// control points so the curve best approximates a circular arc spanning
/// `2π/n` radians.
///
/// Multiply by the arc's radius to get the control-point distance. For the
/// classic four-arc circle this is ≈ 0.5523; the six 60° arcs here use
/// `optimal_distance(6)` ≈ 0.3573.
pub fn optimal_distance(n: u32) -> f32 {
    (4.0 / 3.0) * (std::f32::consts::PI / (2.0 * n as f32)).tan()
}

/// Returns the slope of the line tangent to a circle at `point`, the
/// negative reciprocal of the radius line's slope.
///
/// Degenerate positions are defined, not errors: a point level with the
/// center (3 or 9 o'clock) yields `±∞`, which [`point_along_tangent`] maps
/// through `atan` to a vertical step; a point directly above or below the
/// center yields `∓0`, a horizontal tangent. Only `point == center` is
/// outside the domain (NaN), and no circle point is its own center.
pub fn tangent_slope(point: Vec2, center: Vec2) -> f32 {
    -(point.x - center.x) / (point.y - center.y)
}

/// Walks `distance` from `origin` along the line of the given slope.
///
/// `reverse` picks the direction, but is itself flipped when the origin lies
/// in the lower half of the circle (`origin.y > center_y`). Tangent slopes
/// repeat between the upper and lower halves, so without this flip the
/// control points of lower-half arcs would bulge inward instead of outward.
/// The branch is load-bearing; see the per-half tests below.
pub fn point_along_tangent(
    slope: f32,
    origin: Vec2,
    distance: f32,
    reverse: bool,
    center_y: f32,
) -> Vec2 {
    let alpha = slope.atan();
    let reverse = if origin.y > center_y { !reverse } else { reverse };
    let step = if reverse { -distance } else { distance };
    Vec2::new(origin.x + step * alpha.cos(), origin.y + step * alpha.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    const CENTER: Vec2 = Vec2::new(50.0, 50.0);

    #[test]
    fn test_points_lie_on_circle() {
        for i in 0..24 {
            let theta = TAU * i as f32 / 24.0;
            let p = point_on_circle(50.0, theta, 0.0);
            // Undo the frame epsilon before measuring.
            let p = p + Vec2::splat(FRAME_EPSILON);
            assert!(
                ((p - CENTER).length() - 50.0).abs() < 1e-3,
                "theta = {theta}: {p}"
            );
        }
    }

    #[test]
    fn test_reference_positions() {
        // theta = 0 is right-center, theta = π/2 is top-center.
        let right = point_on_circle(50.0, 0.0, 0.0);
        assert!((right.x - 99.999).abs() < 1e-3);
        assert!((right.y - 49.999).abs() < 1e-3);

        let top = point_on_circle(50.0, FRAC_PI_2, 0.0);
        assert!((top.x - 49.999).abs() < 1e-3);
        assert!(top.y.abs() < 1e-2);
    }

    #[test]
    fn test_periodicity() {
        for i in 0..6 {
            let theta = TAU * i as f32 / 6.0;
            let a = point_on_circle(50.0, theta, 0.0);
            let b = point_on_circle(50.0, theta + TAU, 0.0);
            assert!((a - b).length() < 1e-3);
        }
    }

    #[test]
    fn test_nudge_recenters_inner_point() {
        // An inner-circle point nudged by the border width sits border_width
        // inside the outer rim along the same radial direction.
        let outer = point_on_circle(50.0, FRAC_PI_2, 0.0);
        let inner = point_on_circle(40.0, FRAC_PI_2, 10.0);
        assert!((inner.x - outer.x).abs() < 1e-3);
        assert!((inner.y - (outer.y + 10.0)).abs() < 1e-3);
    }

    #[test]
    fn test_optimal_distance_closed_form() {
        assert!((optimal_distance(4) - 0.5523).abs() < 1e-3);
        assert!((optimal_distance(6) - 0.35726).abs() < 1e-3);
    }

    #[test]
    fn test_tangent_slope_quadrants() {
        // 45° up-right of center: radius slope 1 (screen y down), tangent -1.
        let p = CENTER + Vec2::new(10.0, 10.0);
        assert!((tangent_slope(p, CENTER) + 1.0).abs() < 1e-5);

        let q = CENTER + Vec2::new(10.0, -10.0);
        assert!((tangent_slope(q, CENTER) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_tangent_slope_degenerate_vertical() {
        // Level with the center: infinite slope, and the walk along it is a
        // vertical step.
        let p = Vec2::new(100.0, 50.0);
        let slope = tangent_slope(p, CENTER);
        assert!(slope.is_infinite());

        let walked = point_along_tangent(slope, p, 5.0, false, CENTER.y);
        assert!((walked.x - p.x).abs() < 1e-3);
        assert!(((walked.y - p.y).abs() - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_tangent_slope_degenerate_horizontal() {
        // Directly above the center: zero slope, horizontal walk.
        let p = Vec2::new(50.0, 0.0);
        let slope = tangent_slope(p, CENTER);
        assert_eq!(slope, 0.0);

        let walked = point_along_tangent(slope, p, 5.0, false, CENTER.y);
        assert!((walked.y - p.y).abs() < 1e-6);
        assert!((walked.x - (p.x + 5.0)).abs() < 1e-3);
    }

    #[test]
    fn test_orientation_flip_upper_half() {
        // Upper half: reverse = false walks in +x for a shallow slope.
        let origin = Vec2::new(50.0, 10.0);
        let walked = point_along_tangent(0.5, origin, 10.0, false, CENTER.y);
        assert!(walked.x > origin.x);
    }

    #[test]
    fn test_orientation_flip_lower_half() {
        // Lower half: the same call walks in -x because the flip engages.
        let origin = Vec2::new(50.0, 90.0);
        let walked = point_along_tangent(0.5, origin, 10.0, false, CENTER.y);
        assert!(walked.x < origin.x);
    }

    #[test]
    fn test_mirrored_points_share_slope() {
        // A point and its reflection through the center sit on parallel
        // tangents; the orientation flip is what keeps their control points
        // bulging outward on both sides.
        let p = point_on_circle(50.0, PI / 6.0, 0.0);
        let q = point_on_circle(50.0, PI / 6.0 + PI, 0.0);
        assert!((tangent_slope(p, CENTER) - tangent_slope(q, CENTER)).abs() < 1e-3);
    }
}
