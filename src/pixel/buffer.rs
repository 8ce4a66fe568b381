//! Borrowed view over a strided 32-bit pixel buffer
//!
//! The bytes belong to the caller (the canvas bitmap). A `PixelBufferMut` only
//! borrows them for the duration of one filter call.

use byteorder::{ByteOrder, LittleEndian};

/// Bytes per packed pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// Exclusive, temporary view of a rectangular grid of packed pixels
///
/// Rows start every `stride` bytes; only the first `width * 4` bytes of each
/// row are pixels, the rest is padding and is never touched.
#[derive(Debug)]
pub struct PixelBufferMut<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
    stride: u32,
}

/// Row geometry that passed validation, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Extent {
    row_bytes: usize,
    stride: usize,
    rows: usize,
}

impl<'a> PixelBufferMut<'a> {
    /// Wrap `data` without validating it
    ///
    /// Inconsistent geometry is not rejected here; it makes every pixel loop
    /// run zero times instead.
    pub fn new(data: &'a mut [u8], width: u32, height: u32, stride: u32) -> Self {
        Self {
            data,
            width,
            height,
            stride,
        }
    }

    /// View a tightly packed buffer (`stride == width * 4`)
    pub fn packed(data: &'a mut [u8], width: u32, height: u32) -> Self {
        let stride = width.saturating_mul(BYTES_PER_PIXEL as u32);
        Self::new(data, width, height, stride)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Whether the pixel loops will visit any pixel at all
    pub fn is_empty(&self) -> bool {
        self.extent().is_err()
    }

    /// Number of pixels a transform will visit
    pub fn pixel_count(&self) -> usize {
        match self.extent() {
            Ok(extent) => extent.rows * (extent.row_bytes / BYTES_PER_PIXEL),
            Err(_) => 0,
        }
    }

    fn extent(&self) -> Result<Extent, &'static str> {
        if self.width == 0 || self.height == 0 {
            return Err("zero dimension");
        }
        let row_bytes = (self.width as usize)
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or("row size overflow")?;
        let stride = self.stride as usize;
        if stride < row_bytes {
            return Err("stride shorter than row");
        }
        let rows = self.height as usize;
        let required = stride.checked_mul(rows).ok_or("buffer size overflow")?;
        if self.data.len() < required {
            return Err("buffer shorter than stride * height");
        }
        Ok(Extent {
            row_bytes,
            stride,
            rows,
        })
    }

    /// Replace every pixel with `f(pixel)`, rows first then columns
    ///
    /// Pixels are read and written as little-endian words. Returns the number
    /// of pixels visited, which is zero when the geometry is inconsistent.
    pub fn for_each_pixel<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(u32) -> u32,
    {
        let extent = match self.extent() {
            Ok(extent) => extent,
            Err(reason) => {
                tracing::debug!(
                    "[PixelBuffer] Skipping {}x{} (stride {}, {} bytes): {}",
                    self.width,
                    self.height,
                    self.stride,
                    self.data.len(),
                    reason
                );
                return 0;
            }
        };

        let mut visited = 0;
        for row in self.data.chunks_mut(extent.stride).take(extent.rows) {
            let Some(pixels) = row.get_mut(..extent.row_bytes) else {
                break;
            };
            for px in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
                let word = LittleEndian::read_u32(px);
                LittleEndian::write_u32(px, f(word));
                visited += 1;
            }
        }
        visited
    }

    /// Read the pixel at `(x, y)`, or `None` if out of bounds
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        let offset = self.offset(x, y)?;
        self.data
            .get(offset..offset + BYTES_PER_PIXEL)
            .map(LittleEndian::read_u32)
    }

    /// Write the pixel at `(x, y)`; out-of-bounds writes are ignored
    pub fn set(&mut self, x: u32, y: u32, value: u32) {
        let Some(offset) = self.offset(x, y) else {
            return;
        };
        if let Some(px) = self.data.get_mut(offset..offset + BYTES_PER_PIXEL) {
            LittleEndian::write_u32(px, value);
        }
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        let extent = self.extent().ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * extent.stride + x as usize * BYTES_PER_PIXEL)
    }
}
