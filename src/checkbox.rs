//! Checkbox configuration, per-segment visuals, and the toggle state machine.

use crate::checkmark::CheckmarkProfile;
use crate::color::{Palette, Rgba};
use crate::error::ConfigError;
use crate::segment::{check_segment, ring_segment, SegmentVisual, SEAM_STROKE_WIDTH, SEGMENTS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Validated geometry parameters for one checkbox.
///
/// Construction is the only place configuration errors can surface; every
/// method on a built value is pure and total. Repeated calls with the same
/// arguments return bit-identical output. Deserialization revalidates
/// through [`CheckboxGeometry::new`], so decoded values hold the same
/// invariants as constructed ones.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawCheckboxGeometry")
)]
pub struct CheckboxGeometry {
    radius: f32,
    border_width: f32,
    palette: Palette,
    profile: CheckmarkProfile,
    accent: Rgba,
}

/// Unvalidated wire form of [`CheckboxGeometry`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawCheckboxGeometry {
    radius: f32,
    border_width: f32,
    palette: Palette,
    profile: CheckmarkProfile,
    accent: Rgba,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCheckboxGeometry> for CheckboxGeometry {
    type Error = ConfigError;

    fn try_from(raw: RawCheckboxGeometry) -> Result<Self, ConfigError> {
        CheckboxGeometry::new(raw.radius, raw.border_width, raw.palette)
            .map(|g| g.with_profile(raw.profile).with_accent(raw.accent))
    }
}

impl CheckboxGeometry {
    /// Creates a geometry, rejecting invalid radii and border widths.
    ///
    /// The palette carries its own validation; see [`Palette::new`].
    pub fn new(radius: f32, border_width: f32, palette: Palette) -> Result<Self, ConfigError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(radius));
        }
        if !border_width.is_finite() || border_width < 0.0 || border_width >= radius {
            return Err(ConfigError::InvalidBorderWidth {
                radius,
                border_width,
            });
        }
        Ok(Self {
            radius,
            border_width,
            palette,
            profile: CheckmarkProfile::default(),
            accent: Rgba::ACCENT_GREEN,
        })
    }

    /// Replaces the checkmark profile.
    pub fn with_profile(mut self, profile: CheckmarkProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Replaces the checked-state accent color.
    pub fn with_accent(mut self, accent: Rgba) -> Self {
        self.accent = accent;
        self
    }

    /// Checkbox radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Ring border width.
    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    /// Side length of the local bounding box, `2 · radius`.
    pub fn side(&self) -> f32 {
        2.0 * self.radius
    }

    /// Computes one segment's drawable path and color for a state.
    ///
    /// An index outside `0..6` is a contract violation and panics.
    pub fn segment_visual(&self, segment: usize, checked: bool) -> SegmentVisual {
        assert!(segment < SEGMENTS, "segment index {segment} out of range");

        let (path, fill) = if checked {
            (
                check_segment(self.radius, &self.profile, segment),
                self.accent,
            )
        } else {
            (
                ring_segment(self.radius, self.border_width, segment),
                self.palette.color_for(segment),
            )
        };

        SegmentVisual {
            path,
            fill,
            stroke_width: SEAM_STROKE_WIDTH,
        }
    }

    /// Computes all six segment visuals for a state.
    pub fn visuals(&self, checked: bool) -> [SegmentVisual; SEGMENTS] {
        std::array::from_fn(|i| self.segment_visual(i, checked))
    }
}

/// Start and end keyframes for one segment's shape morph.
///
/// The crate computes both endpoints; interpolating between them over time is
/// the host renderer's job.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentMorph {
    /// Visual in the outgoing state.
    pub from: SegmentVisual,
    /// Visual in the incoming state.
    pub to: SegmentVisual,
}

/// Suggested playback parameters for the morph, matching the original
/// animation: a quarter second with an ease-out-heavy cubic timing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MorphTiming {
    /// Duration in seconds.
    pub duration: f32,
    /// First cubic timing control point `(x1, y1)`.
    pub control1: (f32, f32),
    /// Second cubic timing control point `(x2, y2)`.
    pub control2: (f32, f32),
}

impl Default for MorphTiming {
    fn default() -> Self {
        Self {
            duration: 0.25,
            control1: (0.04, 0.17),
            control2: (0.29, 0.95),
        }
    }
}

/// A checkbox instance: geometry plus the one piece of mutable state, the
/// checked flag.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Checkbox {
    geometry: CheckboxGeometry,
    checked: bool,
}

impl Checkbox {
    /// Creates an unchecked checkbox.
    pub fn new(geometry: CheckboxGeometry) -> Self {
        Self {
            geometry,
            checked: false,
        }
    }

    /// The geometry this checkbox renders with.
    pub fn geometry(&self) -> &CheckboxGeometry {
        &self.geometry
    }

    /// Current checked state.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Segment visuals for the current state.
    pub fn visuals(&self) -> [SegmentVisual; SEGMENTS] {
        self.geometry.visuals(self.checked)
    }

    /// Flips the checked state and returns, per segment, the keyframe pair
    /// from the old state to the new one for the host's animation driver.
    pub fn toggle(&mut self) -> [SegmentMorph; SEGMENTS] {
        let from = self.geometry.visuals(self.checked);
        self.checked = !self.checked;
        let to = self.geometry.visuals(self.checked);

        let mut from = from.into_iter();
        let mut to = to.into_iter();
        std::array::from_fn(|_| SegmentMorph {
            from: from.next().unwrap(),
            to: to.next().unwrap(),
        })
    }
}
