//! Canvas entry points
//!
//! These are what the canvas model calls. The plain `invert`/`saturate` forms
//! return nothing and only log when the bitmap can't be accessed; the `try_`
//! forms hand the error back instead.

use crate::bitmap::{BitmapHost, PixelLock};
use crate::config::FilterConfig;
use crate::error::FilterResult;
use crate::filter::Filter;

/// Filter entry points bound to one configuration
#[derive(Debug, Clone, Default)]
pub struct CanvasFilters {
    config: FilterConfig,
}

impl CanvasFilters {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Lock the bitmap, run `filter` over it, unlock
    ///
    /// Returns the number of pixels visited. On access failure the bitmap is
    /// not modified.
    pub fn try_apply<H: BitmapHost + ?Sized>(
        &self,
        handle: &mut H,
        filter: Filter,
    ) -> FilterResult<usize> {
        let mut lock = PixelLock::acquire(handle)?;
        let mut view = lock.view();
        Ok(filter.apply(&mut view, self.config.layout))
    }

    /// Like [`Self::try_apply`], logging the failure instead of returning it
    pub fn apply<H: BitmapHost + ?Sized>(&self, handle: &mut H, filter: Filter) {
        if let Err(e) = self.try_apply(handle, filter) {
            tracing::error!("[Canvas] {} aborted: {}", filter, e);
        }
    }

    pub fn try_invert<H: BitmapHost + ?Sized>(&self, handle: &mut H) -> FilterResult<usize> {
        self.try_apply(handle, Filter::Invert)
    }

    pub fn try_saturate<H: BitmapHost + ?Sized>(
        &self,
        handle: &mut H,
        saturation_value: f32,
    ) -> FilterResult<usize> {
        self.try_apply(
            handle,
            Filter::Saturate {
                value: saturation_value,
            },
        )
    }

    pub fn invert<H: BitmapHost + ?Sized>(&self, handle: &mut H) {
        self.apply(handle, Filter::Invert);
    }

    pub fn saturate<H: BitmapHost + ?Sized>(&self, handle: &mut H, saturation_value: f32) {
        self.apply(
            handle,
            Filter::Saturate {
                value: saturation_value,
            },
        );
    }

    /// Saturate using the configured default value
    pub fn saturate_default<H: BitmapHost + ?Sized>(&self, handle: &mut H) {
        self.saturate(handle, self.config.default_saturation);
    }
}

/// Invert the bitmap's colors with the default configuration
pub fn invert<H: BitmapHost + ?Sized>(handle: &mut H) {
    CanvasFilters::default().invert(handle);
}

/// Saturate the bitmap with the default configuration
pub fn saturate<H: BitmapHost + ?Sized>(handle: &mut H, saturation_value: f32) {
    CanvasFilters::default().saturate(handle, saturation_value);
}

/// Fallible form of [`invert`]
pub fn try_invert<H: BitmapHost + ?Sized>(handle: &mut H) -> FilterResult<usize> {
    CanvasFilters::default().try_invert(handle)
}

/// Fallible form of [`saturate`]
pub fn try_saturate<H: BitmapHost + ?Sized>(
    handle: &mut H,
    saturation_value: f32,
) -> FilterResult<usize> {
    CanvasFilters::default().try_saturate(handle, saturation_value)
}

/// Run any [`Filter`] with the default configuration
pub fn apply_filter<H: BitmapHost + ?Sized>(handle: &mut H, filter: Filter) {
    CanvasFilters::default().apply(handle, filter);
}
