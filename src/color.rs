//! Fill colors and the segment palette.

use crate::error::ConfigError;
use crate::segment::SEGMENTS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An sRGB color with alpha (0-1 range per channel).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba {
    /// Red channel (0-1).
    pub r: f32,
    /// Green channel (0-1).
    pub g: f32,
    /// Blue channel (0-1).
    pub b: f32,
    /// Alpha channel (0-1).
    pub a: f32,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// The default checked-state accent (iOS system green, `#34C759`).
    pub const ACCENT_GREEN: Self = Self::new(52.0 / 255.0, 199.0 / 255.0, 89.0 / 255.0, 1.0);
    /// The default unchecked border gray (iOS system gray 2, `#AEAEB2`).
    pub const BORDER_GRAY: Self = Self::new(174.0 / 255.0, 174.0 / 255.0, 178.0 / 255.0, 1.0);

    /// Creates a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Creates an opaque color from a hex code (e.g. `0x34C759`).
    pub fn from_hex(hex: u32) -> Self {
        Self::from_u8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Linearly interpolates toward `other` by factor `t`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }
}

/// An ordered set of border colors assigned round-robin across segments.
///
/// Six segments split evenly only under 1, 2, 3, or 6 colors, so any other
/// length is rejected up front. Deserialization runs the same validation, so
/// a decoded palette is as trustworthy as a constructed one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawPalette")
)]
pub struct Palette {
    colors: Vec<Rgba>,
}

/// Unvalidated wire form of [`Palette`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPalette {
    colors: Vec<Rgba>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPalette> for Palette {
    type Error = ConfigError;

    fn try_from(raw: RawPalette) -> Result<Self, ConfigError> {
        Palette::new(raw.colors)
    }
}

impl Palette {
    /// Creates a palette, validating that its length divides the segment
    /// count.
    pub fn new(colors: Vec<Rgba>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if SEGMENTS % colors.len() != 0 {
            return Err(ConfigError::PaletteSize {
                len: colors.len(),
                segments: SEGMENTS,
            });
        }
        Ok(Self { colors })
    }

    /// Creates a single-color palette.
    pub fn solid(color: Rgba) -> Self {
        Self {
            colors: vec![color],
        }
    }

    /// Returns the colors in order.
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Returns the border color for a segment index.
    ///
    /// Consecutive runs of `SEGMENTS / len` segments share each color.
    pub fn color_for(&self, segment: usize) -> Rgba {
        assert!(segment < SEGMENTS, "segment index {segment} out of range");
        self.colors[segment / (SEGMENTS / self.colors.len())]
    }
}

impl Default for Palette {
    /// A single system-gray border, the original checkbox's default.
    fn default() -> Self {
        Self::solid(Rgba::BORDER_GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_matches_from_u8() {
        assert_eq!(Rgba::from_hex(0x34C759), Rgba::from_u8(0x34, 0xC7, 0x59));
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = Rgba::BLACK.lerp(Rgba::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.a - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_palette_round_robin_three_colors() {
        let a = Rgba::from_hex(0xFF0000);
        let b = Rgba::from_hex(0x00FF00);
        let c = Rgba::from_hex(0x0000FF);
        let palette = Palette::new(vec![a, b, c]).unwrap();

        assert_eq!(palette.color_for(0), a);
        assert_eq!(palette.color_for(1), a);
        assert_eq!(palette.color_for(2), b);
        assert_eq!(palette.color_for(3), b);
        assert_eq!(palette.color_for(4), c);
        assert_eq!(palette.color_for(5), c);
    }

    #[test]
    fn test_palette_valid_lengths() {
        for len in [1, 2, 3, 6] {
            assert!(Palette::new(vec![Rgba::BLACK; len]).is_ok(), "len {len}");
        }
    }

    #[test]
    fn test_palette_invalid_lengths_rejected() {
        for len in [4, 5, 7] {
            assert_eq!(
                Palette::new(vec![Rgba::BLACK; len]),
                Err(ConfigError::PaletteSize { len, segments: 6 }),
                "len {len}"
            );
        }
        assert_eq!(Palette::new(vec![]), Err(ConfigError::EmptyPalette));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_color_for_out_of_range_panics() {
        Palette::default().color_for(6);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        fn palette_json(len: usize) -> String {
            let color = r#"{"r":0.5,"g":0.5,"b":0.5,"a":1.0}"#;
            format!(r#"{{"colors":[{}]}}"#, vec![color; len].join(","))
        }

        #[test]
        fn test_deserialize_round_trip() {
            let palette = Palette::new(vec![Rgba::BLACK, Rgba::WHITE]).unwrap();
            let json = serde_json::to_string(&palette).unwrap();
            let back: Palette = serde_json::from_str(&json).unwrap();
            assert_eq!(back, palette);
        }

        #[test]
        fn test_deserialize_rejects_invalid_length() {
            // Decoding runs the constructor's divisibility check, so a
            // 4-color palette fails here instead of panicking later in
            // color_for.
            let err = serde_json::from_str::<Palette>(&palette_json(4)).unwrap_err();
            assert!(err.to_string().contains("cannot split"), "{err}");

            let decoded: Palette = serde_json::from_str(&palette_json(3)).unwrap();
            assert_eq!(decoded.colors().len(), 3);
            let _ = decoded.color_for(5);
        }
    }
}
