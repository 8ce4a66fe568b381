//! BitmapHost trait - the platform bitmap handle filters operate on
//!
//! The canvas owns the bitmap. It exposes geometry, a pixel lock, and the
//! locked bytes through this trait; filters never see a raw pointer.

use serde::{Deserialize, Serialize};

/// Pixel format reported by the host bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BitmapFormat {
    /// 4 bytes per pixel, 8 bits per channel
    Rgba8888,
    /// 2 bytes per pixel
    Rgb565,
    /// 1 byte per pixel, alpha only
    Alpha8,
    /// Anything else the platform reports
    Unknown,
}

impl BitmapFormat {
    /// Whether filters can run on this format
    pub fn is_packed_32(&self) -> bool {
        matches!(self, BitmapFormat::Rgba8888)
    }
}

/// Bitmap geometry, as reported by the host before locking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitmapInfo {
    /// Pixels per row
    pub width: u32,
    /// Number of rows
    pub height: u32,
    /// Bytes between the start of consecutive rows
    pub stride: u32,
    pub format: BitmapFormat,
}

/// Trait that every host bitmap handle must implement
///
/// `lock_pixels` and `unlock_pixels` are always paired by
/// [`super::PixelLock`]; `pixels_mut` is only called between them.
pub trait BitmapHost {
    /// Read geometry and format
    fn info(&self) -> Result<BitmapInfo, String>;

    /// Lock the pixel memory for exclusive writing
    fn lock_pixels(&mut self) -> Result<(), String>;

    /// The locked pixel bytes, `stride * height` long
    fn pixels_mut(&mut self) -> &mut [u8];

    /// Release the lock taken by `lock_pixels`
    fn unlock_pixels(&mut self) -> Result<(), String>;
}
