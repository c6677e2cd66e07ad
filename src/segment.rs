//! Per-segment path assembly.
//!
//! A segment is one of six 60° wedges of the ring. In the unchecked state it
//! is an annulus sliver bounded by an outer arc, an inner arc, and two radial
//! connecting lines; in the checked state the inner boundary collapses onto
//! two adjacent checkmark vertices, so the six segments jointly trace the
//! mark.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::arc::{optimal_distance, point_along_tangent, point_on_circle, tangent_slope};
use crate::checkmark::CheckmarkProfile;
use crate::color::Rgba;
use crate::path::{Path, PathBuilder};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of wedges in the ring. The checkmark has exactly six vertices, so
/// the segment count is fixed.
pub const SEGMENTS: usize = 6;

/// Hairline stroke width applied with the fill color to hide the sub-pixel
/// seams between adjacent segment layers.
pub const SEAM_STROKE_WIDTH: f32 = 0.2;

/// Everything a host needs to draw one segment: its closed path, fill color,
/// and the seam-hiding stroke width (stroked in the fill color).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentVisual {
    /// Closed path in the checkbox's local `[0, 2r]²` frame.
    pub path: Path,
    /// Fill (and stroke) color.
    pub fill: Rgba,
    /// Stroke width; see [`SEAM_STROKE_WIDTH`].
    pub stroke_width: f32,
}

/// Angular span of a segment.
///
/// The "start" angle belongs to the numerically later index: segments are
/// swept from `(i + 1) · 60°` back to `i · 60°`. Flipping this would mirror
/// every control-point direction, so it is part of the wedge's contract.
fn segment_span(segment: usize) -> (f32, f32) {
    let step = TAU / SEGMENTS as f32;
    let start = ((segment + 1) % SEGMENTS) as f32 * step;
    let end = segment as f32 * step;
    (start, end)
}

/// Appends the segment's outer arc (move + cubic) shared by both states.
fn outer_arc(radius: f32, start_theta: f32, end_theta: f32) -> (PathBuilder, Vec2, Vec2) {
    let center = Vec2::splat(radius);
    let distance = optimal_distance(SEGMENTS as u32) * radius;

    let start = point_on_circle(radius, start_theta, 0.0);
    let end = point_on_circle(radius, end_theta, 0.0);

    let control1 = point_along_tangent(tangent_slope(start, center), start, distance, false, radius);
    let control2 = point_along_tangent(tangent_slope(end, center), end, distance, true, radius);

    let builder = PathBuilder::new()
        .move_to(start)
        .cubic_to(control1, control2, end);
    (builder, start, end)
}

/// Builds the unchecked-state annulus wedge for one segment.
///
/// The inner arc runs end → start so the wedge closes as a single loop:
/// outer curve, line inward, inner curve back, line out, close.
pub fn ring_segment(radius: f32, border_width: f32, segment: usize) -> Path {
    assert!(segment < SEGMENTS, "segment index {segment} out of range");

    let center = Vec2::splat(radius);
    let inner_radius = radius - border_width;
    let inner_distance = optimal_distance(SEGMENTS as u32) * inner_radius;
    let (start_theta, end_theta) = segment_span(segment);

    let (builder, outer_start, _) = outer_arc(radius, start_theta, end_theta);

    let inner_end = point_on_circle(inner_radius, end_theta, border_width);
    let inner_start = point_on_circle(inner_radius, start_theta, border_width);

    let control3 = point_along_tangent(
        tangent_slope(inner_end, center),
        inner_end,
        inner_distance,
        true,
        radius,
    );
    let control4 = point_along_tangent(
        tangent_slope(inner_start, center),
        inner_start,
        inner_distance,
        false,
        radius,
    );

    builder
        .line_to(inner_end)
        .cubic_to(control3, control4, inner_start)
        .line_to(outer_start)
        .close()
        .build()
}

/// Builds the checked-state sliver for one segment.
///
/// Keeps the outer arc, then collapses onto the pair of adjacent checkmark
/// vertices `vertices[i]`, `vertices[(i + 1) % 6]`. Laid over the ring the
/// six slivers morph into the mark's outline.
pub fn check_segment(radius: f32, profile: &CheckmarkProfile, segment: usize) -> Path {
    assert!(segment < SEGMENTS, "segment index {segment} out of range");

    let (start_theta, end_theta) = segment_span(segment);
    let (builder, _, _) = outer_arc(radius, start_theta, end_theta);

    let vertices = profile.vertices(radius);
    builder
        .line_to(vertices[segment % SEGMENTS])
        .line_to(vertices[(segment + 1) % SEGMENTS])
        .close()
        .build()
}
