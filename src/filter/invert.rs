//! Color inversion
//!
//! Formula: color bits = !color bits, alpha unchanged. Channel order does not
//! matter since all three color channels are complemented.

use crate::pixel::{PixelBufferMut, ALPHA_MASK, COLOR_MASK};

/// Complement the color channels of one packed pixel, keeping its alpha
#[inline]
pub fn invert_pixel(pixel: u32) -> u32 {
    let inverted = pixel ^ 0xFFFF_FFFF;
    (inverted & COLOR_MASK) | (pixel & ALPHA_MASK)
}

/// Invert every pixel of a strided buffer in place
///
/// Returns the number of pixels visited (zero for inconsistent geometry).
pub fn invert_buffer(buffer: &mut PixelBufferMut<'_>) -> usize {
    buffer.for_each_pixel(invert_pixel)
}
