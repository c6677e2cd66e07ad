//! Error types for checkbox configuration.

use thiserror::Error;

/// Errors raised when constructing checkbox geometry from invalid inputs.
///
/// All variants are configuration mistakes and are rejected at construction
/// time. The geometry functions themselves are total over valid inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Palette is empty.
    #[error("palette must contain at least one color")]
    EmptyPalette,

    /// Palette length does not evenly divide the segment count, so colors
    /// cannot be assigned round-robin without splitting a segment.
    #[error("palette of {len} colors cannot split {segments} segments evenly")]
    PaletteSize {
        /// Number of colors supplied.
        len: usize,
        /// Number of ring segments.
        segments: usize,
    },

    /// Radius is not a finite positive number.
    #[error("radius must be finite and positive, got {0}")]
    InvalidRadius(f32),

    /// Border width is negative, non-finite, or at least as large as the
    /// radius (the inner circle would vanish or invert).
    #[error("border width {border_width} must be in [0, radius = {radius})")]
    InvalidBorderWidth {
        /// Checkbox radius.
        radius: f32,
        /// Offending border width.
        border_width: f32,
    },
}
