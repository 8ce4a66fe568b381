//! Canvas Filters - in-place color transforms for drawing canvas bitmaps
//!
//! The canvas model owns its bitmap and calls [`canvas::invert`] or
//! [`canvas::saturate`] on it. Each call locks the bitmap, walks every pixel
//! row by row, writes the transformed value back, and unlocks.

pub mod bitmap;
pub mod canvas;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod pixel;

pub use bitmap::{BitmapFormat, BitmapHost, BitmapInfo, MemoryBitmap, PixelLock};
pub use canvas::{apply_filter, invert, saturate, try_invert, try_saturate, CanvasFilters};
pub use config::{FilterConfig, FilterDefaults};
pub use error::{AccessStage, ConfigError, FilterError, FilterResult};
pub use filter::{invert_colors, saturate_colors, Filter};
pub use logging::{init_default_logging, init_logging};
pub use pixel::{PackedPixel, PixelBufferMut, PixelLayout};
