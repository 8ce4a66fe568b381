//! Scoped pixel lock
//!
//! `PixelLock` turns the host's lock/unlock pair into a guard: unlock runs on
//! drop, and a bitmap that failed to lock is never unlocked.

use super::host::{BitmapHost, BitmapInfo};
use crate::error::{AccessStage, FilterError, FilterResult};
use crate::pixel::PixelBufferMut;

/// Exclusive access to a host bitmap's pixels for the guard's lifetime
pub struct PixelLock<'h, H: BitmapHost + ?Sized> {
    host: &'h mut H,
    info: BitmapInfo,
}

impl<'h, H: BitmapHost + ?Sized> PixelLock<'h, H> {
    /// Read the bitmap info, check the format, and lock the pixels
    pub fn acquire(host: &'h mut H) -> FilterResult<Self> {
        let info = host
            .info()
            .map_err(|e| FilterError::access(AccessStage::Info, e))?;

        if !info.format.is_packed_32() {
            return Err(FilterError::access(
                AccessStage::Format,
                format!("unsupported bitmap format {:?}", info.format),
            ));
        }

        host.lock_pixels()
            .map_err(|e| FilterError::access(AccessStage::Lock, e))?;

        tracing::debug!(
            "[PixelLock] Locked {}x{} bitmap (stride {})",
            info.width,
            info.height,
            info.stride
        );
        Ok(Self { host, info })
    }

    pub fn info(&self) -> BitmapInfo {
        self.info
    }

    /// Borrow the locked pixels as a strided buffer view
    pub fn view(&mut self) -> PixelBufferMut<'_> {
        let info = self.info;
        PixelBufferMut::new(self.host.pixels_mut(), info.width, info.height, info.stride)
    }
}

impl<H: BitmapHost + ?Sized> Drop for PixelLock<'_, H> {
    fn drop(&mut self) {
        match self.host.unlock_pixels() {
            Ok(()) => tracing::debug!("[PixelLock] Unlocked"),
            Err(e) => tracing::warn!("[PixelLock] Failed to unlock pixels: {}", e),
        }
    }
}
