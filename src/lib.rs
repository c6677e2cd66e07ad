//! Geometry engine for a segmented morphing checkbox.
//!
//! A checkbox is drawn as six curved pie-slice segments arranged in a ring.
//! Tapping it morphs each segment between an annulus wedge (unchecked) and
//! one sliver of a six-vertex checkmark (checked). This crate computes the
//! exact closed path and fill color for every segment in either state; the
//! host owns the drawable layers, the tap recognition, and the animation
//! playback between the two keyframes a toggle produces.
//!
//! All geometry lives in the checkbox's local frame: a circle of radius `r`
//! centered at `(r, r)`, bounding box `[0, 2r]²`, y growing downward.
//!
//! # Example
//!
//! ```
//! use checkmorph::{Checkbox, CheckboxGeometry, Palette};
//!
//! let geometry = CheckboxGeometry::new(50.0, 10.0, Palette::default())?;
//! let mut checkbox = Checkbox::new(geometry);
//!
//! // Draw the initial ring.
//! for visual in checkbox.visuals() {
//!     // hand visual.path / visual.fill to the renderer
//!     assert!(!visual.path.is_empty());
//! }
//!
//! // A tap: each segment gets a (from, to) keyframe pair to animate.
//! let morphs = checkbox.toggle();
//! assert_eq!(morphs.len(), 6);
//! # Ok::<(), checkmorph::ConfigError>(())
//! ```

pub mod arc;
mod checkbox;
mod checkmark;
mod color;
mod error;
mod path;
mod segment;
pub mod svg;

pub use checkbox::{Checkbox, CheckboxGeometry, MorphTiming, SegmentMorph};
pub use checkmark::CheckmarkProfile;
pub use color::{Palette, Rgba};
pub use error::ConfigError;
pub use path::{cubic_point, Path, PathBuilder, PathCommand};
pub use segment::{check_segment, ring_segment, SegmentVisual, SEAM_STROKE_WIDTH, SEGMENTS};
