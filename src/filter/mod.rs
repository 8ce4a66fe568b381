//! Pixel transformer - in-place color filters over strided 32-bit buffers
//!
//! Each filter is a pure per-pixel map: no state is carried between pixels or
//! between calls. The raw-slice entry points here take the same arguments the
//! host bitmap exposes (bytes, width, height, stride).

pub mod invert;
pub mod saturate;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use invert::{invert_buffer, invert_pixel};
pub use saturate::{saturate_buffer, saturate_pixel, saturate_rgb};

use crate::config::FilterDefaults;
use crate::pixel::{PixelBufferMut, PixelLayout};

/// Invert the color channels of every pixel, preserving alpha
///
/// Inconsistent geometry (zero dimension, `stride < width * 4`, or a buffer
/// shorter than `stride * height`) leaves the buffer untouched.
pub fn invert_colors(buffer: &mut [u8], width: u32, height: u32, stride: u32) {
    invert_colors_with_layout(buffer, width, height, stride, PixelLayout::default());
}

/// Same as [`invert_colors`]; the layout is accepted for symmetry with saturate
pub fn invert_colors_with_layout(
    buffer: &mut [u8],
    width: u32,
    height: u32,
    stride: u32,
    layout: PixelLayout,
) {
    let mut view = PixelBufferMut::new(buffer, width, height, stride);
    Filter::Invert.apply(&mut view, layout);
}

/// Boost the dominant color channel of every pixel and make it opaque
///
/// `saturation_value` is reserved and currently has no effect.
pub fn saturate_colors(
    buffer: &mut [u8],
    width: u32,
    height: u32,
    stride: u32,
    saturation_value: f32,
) {
    saturate_colors_with_layout(
        buffer,
        width,
        height,
        stride,
        saturation_value,
        PixelLayout::default(),
    );
}

pub fn saturate_colors_with_layout(
    buffer: &mut [u8],
    width: u32,
    height: u32,
    stride: u32,
    saturation_value: f32,
    layout: PixelLayout,
) {
    let mut view = PixelBufferMut::new(buffer, width, height, stride);
    Filter::Saturate {
        value: saturation_value,
    }
    .apply(&mut view, layout);
}

/// A color filter the canvas can request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Filter {
    /// Complement color channels, keep alpha
    Invert,
    /// Dominant-channel boost, alpha forced opaque
    Saturate { value: f32 },
}

impl Filter {
    /// Name used in logs and for parsing
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Invert => INVERT,
            Filter::Saturate { .. } => SATURATE,
        }
    }

    /// Transform a single packed pixel
    #[inline]
    pub fn apply_pixel(&self, pixel: u32, layout: PixelLayout) -> u32 {
        match self {
            Filter::Invert => invert_pixel(pixel),
            Filter::Saturate { value } => saturate_pixel(pixel, *value, layout),
        }
    }

    /// Transform a whole buffer in place, returning the number of pixels visited
    pub fn apply(&self, buffer: &mut PixelBufferMut<'_>, layout: PixelLayout) -> usize {
        let visited = match self {
            Filter::Invert => invert_buffer(buffer),
            Filter::Saturate { value } => saturate_buffer(buffer, *value, layout),
        };
        tracing::debug!(
            "[Filter] {} applied to {} pixels ({}x{}, stride {})",
            self,
            visited,
            buffer.width(),
            buffer.height(),
            buffer.stride()
        );
        visited
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Invert => write!(f, "{}", INVERT),
            Filter::Saturate { value } => write!(f, "{}({})", SATURATE, value),
        }
    }
}

impl FromStr for Filter {
    type Err = String;

    /// Parse `"invert"`, `"saturate"` or `"saturate:<value>"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (s, None),
        };
        match (name.to_ascii_lowercase().as_str(), arg) {
            (INVERT, None) => Ok(Filter::Invert),
            (SATURATE, None) => Ok(Filter::Saturate {
                value: FilterDefaults::SATURATION,
            }),
            (SATURATE, Some(arg)) => arg
                .parse::<f32>()
                .map(|value| Filter::Saturate { value })
                .map_err(|e| format!("Invalid saturation value '{}': {}", arg, e)),
            _ => Err(format!("Unsupported/Unknown filter: {}", s)),
        }
    }
}

const INVERT: &str = "invert";
const SATURATE: &str = "saturate";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::PackedPixel;

    fn fill(width: u32, height: u32, stride: u32, pixel: u32) -> Vec<u8> {
        let mut data = vec![0xEEu8; (stride * height) as usize];
        for row in data.chunks_mut(stride as usize) {
            for px in row[..(width * 4) as usize].chunks_exact_mut(4) {
                px.copy_from_slice(&pixel.to_le_bytes());
            }
        }
        data
    }

    #[test]
    fn test_invert_colors_white_canvas() {
        let mut data = fill(4, 3, 16, 0xFFFF_FFFF);
        invert_colors(&mut data, 4, 3, 16);
        assert!(data.chunks_exact(4).all(|px| px == [0, 0, 0, 0xFF]));
    }

    #[test]
    fn test_invert_colors_zero_dimensions() {
        let original = fill(4, 3, 16, 0x8012_3456);
        for (w, h) in [(0, 3), (4, 0), (0, 0)] {
            let mut data = original.clone();
            invert_colors(&mut data, w, h, 16);
            assert_eq!(data, original);
        }
    }

    #[test]
    fn test_saturate_colors_skips_row_padding() {
        let pixel = PackedPixel::from_rgba(200, 50, 10, 0x10, PixelLayout::Rgba).0;
        let mut data = fill(3, 2, 20, pixel);
        saturate_colors(&mut data, 3, 2, 20, 0.5);

        let expected = PackedPixel::from_rgba(255, 25, 5, 0xFF, PixelLayout::Rgba);
        for row in data.chunks(20) {
            for px in row[..12].chunks_exact(4) {
                assert_eq!(px, expected.to_bytes());
            }
            assert_eq!(&row[12..], &[0xEEu8; 8]);
        }
    }

    #[test]
    fn test_saturate_colors_short_buffer_untouched() {
        let mut data = fill(2, 2, 8, 0x0000_00FF);
        let original = data.clone();
        // Claims three rows but only two are present
        saturate_colors(&mut data, 2, 3, 8, 0.5);
        assert_eq!(data, original);
    }

    #[test]
    fn test_filter_apply_pixel_matches_free_functions() {
        let p = 0x7F10_E020;
        assert_eq!(Filter::Invert.apply_pixel(p, PixelLayout::Rgba), invert_pixel(p));
        assert_eq!(
            Filter::Saturate { value: 0.5 }.apply_pixel(p, PixelLayout::Rgba),
            saturate_pixel(p, 0.5, PixelLayout::Rgba)
        );
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("invert".parse::<Filter>(), Ok(Filter::Invert));
        assert_eq!(" Invert ".parse::<Filter>(), Ok(Filter::Invert));
        assert_eq!(
            "saturate".parse::<Filter>(),
            Ok(Filter::Saturate {
                value: FilterDefaults::SATURATION
            })
        );
        assert_eq!(
            "saturate:0.25".parse::<Filter>(),
            Ok(Filter::Saturate { value: 0.25 })
        );
        assert!("saturate:lots".parse::<Filter>().is_err());
        assert!("invert:1".parse::<Filter>().is_err());
        assert!("blur".parse::<Filter>().is_err());
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(Filter::Invert.to_string(), "invert");
        assert_eq!(Filter::Saturate { value: 0.5 }.to_string(), "saturate(0.5)");
    }

    #[test]
    fn test_filter_serde() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&Filter::Saturate { value: 0.5 })?;
        assert_eq!(json, r#"{"kind":"saturate","value":0.5}"#);
        let filter: Filter = serde_json::from_str(r#"{"kind":"invert"}"#)?;
        assert_eq!(filter, Filter::Invert);
        Ok(())
    }
}
