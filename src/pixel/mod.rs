//! Pixel storage: packed pixel layout and strided buffer views

pub mod buffer;
pub mod packed;

pub use buffer::{PixelBufferMut, BYTES_PER_PIXEL};
pub use packed::{PackedPixel, PixelLayout, ALPHA_MASK, COLOR_MASK};
