//! In-memory bitmap host
//!
//! Owns an RGBA8888 buffer with optional row padding and tracks lock state
//! the way a platform bitmap does. Converts to and from `image::RgbaImage`.

use image::RgbaImage;

use super::host::{BitmapFormat, BitmapHost, BitmapInfo};
use crate::pixel::BYTES_PER_PIXEL;

/// Heap-backed RGBA8888 bitmap
#[derive(Debug, Clone)]
pub struct MemoryBitmap {
    width: u32,
    height: u32,
    stride: u32,
    data: Vec<u8>,
    locked: bool,
}

impl MemoryBitmap {
    /// Create a transparent bitmap with tightly packed rows
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_stride(width, height, width.saturating_mul(BYTES_PER_PIXEL as u32))
    }

    /// Create a transparent bitmap whose rows are `stride` bytes apart
    ///
    /// A stride shorter than `width * 4` is raised to `width * 4`.
    pub fn with_stride(width: u32, height: u32, stride: u32) -> Self {
        let stride = stride.max(width.saturating_mul(BYTES_PER_PIXEL as u32));
        let size = stride as usize * height as usize;
        Self {
            width,
            height,
            stride,
            data: vec![0; size],
            locked: false,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Raw bytes including row padding
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw bytes including row padding
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.stride as usize + x as usize * BYTES_PER_PIXEL)
    }

    /// Get the RGBA bytes of a pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let idx = self.offset(x, y)?;
        let px = self.data.get(idx..idx + BYTES_PER_PIXEL)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Set the RGBA bytes of a pixel; out-of-bounds writes are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let Some(idx) = self.offset(x, y) else {
            return;
        };
        if let Some(px) = self.data.get_mut(idx..idx + BYTES_PER_PIXEL) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Fill every pixel with one color, leaving row padding alone
    pub fn erase_color(&mut self, rgba: [u8; 4]) {
        let row_bytes = self.width as usize * BYTES_PER_PIXEL;
        if self.stride == 0 {
            return;
        }
        for row in self.data.chunks_mut(self.stride as usize) {
            for px in row[..row_bytes].chunks_exact_mut(BYTES_PER_PIXEL) {
                px.copy_from_slice(&rgba);
            }
        }
    }

    /// Copy the pixels out into a tightly packed `RgbaImage`
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        let row_bytes = self.width as usize * BYTES_PER_PIXEL;
        let mut raw = Vec::with_capacity(row_bytes * self.height as usize);
        if self.stride > 0 {
            for row in self.data.chunks(self.stride as usize) {
                raw.extend_from_slice(&row[..row_bytes]);
            }
        }
        RgbaImage::from_raw(self.width, self.height, raw)
    }
}

impl From<RgbaImage> for MemoryBitmap {
    fn from(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            stride: width * BYTES_PER_PIXEL as u32,
            data: image.into_raw(),
            locked: false,
        }
    }
}

impl BitmapHost for MemoryBitmap {
    fn info(&self) -> Result<BitmapInfo, String> {
        Ok(BitmapInfo {
            width: self.width,
            height: self.height,
            stride: self.stride,
            format: BitmapFormat::Rgba8888,
        })
    }

    fn lock_pixels(&mut self) -> Result<(), String> {
        if self.locked {
            return Err("pixels already locked".to_string());
        }
        self.locked = true;
        Ok(())
    }

    fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn unlock_pixels(&mut self) -> Result<(), String> {
        if !self.locked {
            return Err("pixels not locked".to_string());
        }
        self.locked = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_memory_bitmap_creation() {
        let bmp = MemoryBitmap::with_stride(3, 2, 16);
        assert_eq!(bmp.dimensions(), (3, 2));
        assert_eq!(bmp.stride(), 16);
        assert_eq!(bmp.data().len(), 32);
        assert!(!bmp.is_locked());

        // Short stride is raised to the row size
        assert_eq!(MemoryBitmap::with_stride(3, 2, 4).stride(), 12);
    }

    #[test]
    fn test_erase_color_skips_padding() {
        let mut bmp = MemoryBitmap::with_stride(2, 2, 12);
        bmp.erase_color([1, 2, 3, 4]);
        assert_eq!(bmp.pixel(1, 1), Some([1, 2, 3, 4]));
        assert_eq!(&bmp.data()[8..12], &[0u8; 4]);
        assert_eq!(bmp.pixel(2, 0), None);
    }

    #[test]
    fn test_lock_state() {
        let mut bmp = MemoryBitmap::new(1, 1);
        assert!(bmp.lock_pixels().is_ok());
        assert!(bmp.is_locked());
        assert!(bmp.lock_pixels().is_err());
        assert!(bmp.unlock_pixels().is_ok());
        assert!(bmp.unlock_pixels().is_err());
    }

    #[test]
    fn test_rgba_image_conversion() {
        let image = RgbaImage::from_fn(3, 2, |x, y| Rgba([x as u8, y as u8, 7, 255]));
        let mut bmp = MemoryBitmap::from(image.clone());
        assert_eq!(bmp.pixel(2, 1), Some([2, 1, 7, 255]));

        bmp.set_pixel(0, 0, [9, 9, 9, 9]);
        let out = bmp.to_rgba_image();
        assert_eq!(out.as_ref().map(|img| *img.get_pixel(0, 0)), Some(Rgba([9, 9, 9, 9])));
        assert_eq!(out.as_ref().map(|img| *img.get_pixel(2, 1)), Some(*image.get_pixel(2, 1)));
    }

    #[test]
    fn test_padded_to_rgba_image() {
        let mut bmp = MemoryBitmap::with_stride(2, 2, 16);
        bmp.erase_color([10, 20, 30, 40]);
        let image = bmp.to_rgba_image();
        assert_eq!(image.map(|img| img.into_raw()), Some(vec![10, 20, 30, 40].repeat(4)));
    }
}
