//! Dominant-channel saturation boost
//!
//! The strongest color channel is doubled (clamped at 255) and the other two
//! are halved. Ties go to the channel listed first (red, then green, then
//! blue). Output alpha is always fully opaque.

use crate::pixel::{PackedPixel, PixelBufferMut, PixelLayout};

#[inline]
fn boost(c: u8) -> u8 {
    c.saturating_mul(2)
}

#[inline]
fn damp(c: u8) -> u8 {
    c / 2
}

/// Apply the dominant-channel rule to `[r, g, b]`
///
/// When all three channels are equal none of the rules match and the color
/// is returned unchanged, so greys stay grey.
#[inline]
pub fn saturate_rgb([r, g, b]: [u8; 3]) -> [u8; 3] {
    if r >= g && r > b {
        [boost(r), damp(g), damp(b)]
    } else if g > r && g >= b {
        [damp(r), boost(g), damp(b)]
    } else if b >= r && b > g {
        [damp(r), damp(g), boost(b)]
    } else {
        [r, g, b]
    }
}

/// Saturate one packed pixel and force its alpha to 0xFF
///
/// `saturation` is accepted for interface compatibility; it does not change
/// the result.
#[inline]
pub fn saturate_pixel(pixel: u32, _saturation: f32, layout: PixelLayout) -> u32 {
    let [r, g, b] = saturate_rgb(PackedPixel(pixel).rgb(layout));
    PackedPixel::from_rgba(r, g, b, PackedPixel::OPAQUE, layout).0
}

/// Saturate every pixel of a strided buffer in place
///
/// Returns the number of pixels visited (zero for inconsistent geometry).
pub fn saturate_buffer(
    buffer: &mut PixelBufferMut<'_>,
    saturation: f32,
    layout: PixelLayout,
) -> usize {
    buffer.for_each_pixel(|p| saturate_pixel(p, saturation, layout))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        PackedPixel::from_rgba(r, g, b, a, PixelLayout::Rgba).0
    }

    #[test]
    fn test_red_dominant() {
        let out = saturate_pixel(rgba(200, 50, 10, 0xFF), 0.5, PixelLayout::Rgba);
        assert_eq!(out, rgba(255, 25, 5, 0xFF));
    }

    #[test]
    fn test_red_wins_tie_with_green() {
        let out = saturate_pixel(rgba(100, 100, 50, 0xFF), 0.5, PixelLayout::Rgba);
        assert_eq!(out, rgba(200, 50, 25, 0xFF));
    }

    #[test]
    fn test_green_dominant_and_tie_with_blue() {
        assert_eq!(saturate_rgb([10, 90, 40]), [5, 180, 20]);
        // g == b > r: green takes it
        assert_eq!(saturate_rgb([10, 90, 90]), [5, 180, 45]);
    }

    #[test]
    fn test_blue_dominant_and_tie_with_red() {
        assert_eq!(saturate_rgb([3, 7, 130]), [1, 3, 255]);
        // r == b > g: blue takes it
        assert_eq!(saturate_rgb([80, 20, 80]), [40, 10, 160]);
    }

    #[test]
    fn test_grey_passes_through() {
        assert_eq!(saturate_rgb([0, 0, 0]), [0, 0, 0]);
        assert_eq!(saturate_rgb([128, 128, 128]), [128, 128, 128]);
        assert_eq!(saturate_rgb([255, 255, 255]), [255, 255, 255]);
    }

    #[test]
    fn test_alpha_forced_opaque() {
        for a in [0u8, 1, 64, 200, 255] {
            let out = saturate_pixel(rgba(30, 60, 90, a), 0.5, PixelLayout::Rgba);
            assert_eq!(out >> 24, 0xFF);
        }
    }

    #[test]
    fn test_saturation_value_is_inert() {
        let p = rgba(12, 200, 77, 0x40);
        let base = saturate_pixel(p, 0.5, PixelLayout::Rgba);
        for s in [0.0, 1.0, -3.0, 100.0, f32::NAN] {
            assert_eq!(saturate_pixel(p, s, PixelLayout::Rgba), base);
        }
    }

    #[test]
    fn test_bgra_layout_reads_red_from_high_byte() {
        let p = PackedPixel::from_rgba(200, 50, 10, 0, PixelLayout::Bgra).0;
        let out = saturate_pixel(p, 0.5, PixelLayout::Bgra);
        assert_eq!(out, PackedPixel::from_rgba(255, 25, 5, 0xFF, PixelLayout::Bgra).0);
    }

    #[test]
    fn test_primary_red_canvas() {
        // A canvas filled with (150, 1, 1) comes out pure red
        let out = saturate_pixel(rgba(150, 1, 1, 0xFF), 0.5, PixelLayout::Rgba);
        assert_eq!(out, rgba(255, 0, 0, 0xFF));
    }
}
