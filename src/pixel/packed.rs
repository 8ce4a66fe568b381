//! Packed 32-bit pixel layout
//!
//! A pixel is four bytes read as a little-endian `u32`. Alpha always lives in
//! bits 24-31; the three color channels fill bits 0-23 in the order given by
//! [`PixelLayout`].

use serde::{Deserialize, Serialize};

/// Bits holding the alpha channel
pub const ALPHA_MASK: u32 = 0xFF00_0000;

/// Bits holding the three color channels
pub const COLOR_MASK: u32 = 0x00FF_FFFF;

/// Byte order of the color channels in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelLayout {
    /// R, G, B, A in memory: red at bits 0-7, blue at bits 16-23.
    /// This is how 32-bit canvas bitmaps are stored on the host.
    #[default]
    Rgba,
    /// B, G, R, A in memory: blue at bits 0-7, red at bits 16-23
    Bgra,
}

/// A single packed pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedPixel(pub u32);

impl PackedPixel {
    /// Fully opaque alpha
    pub const OPAQUE: u8 = 0xFF;

    /// Pack channels according to `layout`
    #[inline]
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8, layout: PixelLayout) -> Self {
        let (c0, c2) = match layout {
            PixelLayout::Rgba => (r, b),
            PixelLayout::Bgra => (b, r),
        };
        Self(c0 as u32 | (g as u32) << 8 | (c2 as u32) << 16 | (a as u32) << 24)
    }

    /// Read a pixel from 4 bytes in memory order
    #[inline]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(bytes))
    }

    /// The 4 bytes of this pixel in memory order
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    #[inline]
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Color channels as `[r, g, b]`
    #[inline]
    pub fn rgb(self, layout: PixelLayout) -> [u8; 3] {
        let c0 = self.0 as u8;
        let c1 = (self.0 >> 8) as u8;
        let c2 = (self.0 >> 16) as u8;
        match layout {
            PixelLayout::Rgba => [c0, c1, c2],
            PixelLayout::Bgra => [c2, c1, c0],
        }
    }

    /// Replace the alpha channel, keeping the color bits
    #[inline]
    pub fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & COLOR_MASK) | (alpha as u32) << 24)
    }
}

impl From<u32> for PackedPixel {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<PackedPixel> for u32 {
    fn from(pixel: PackedPixel) -> Self {
        pixel.0
    }
}
