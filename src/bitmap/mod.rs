//! Host bitmap access: the handle trait, the scoped pixel lock, and an
//! in-memory host

pub mod host;
pub mod lock;
pub mod memory;

pub use host::{BitmapFormat, BitmapHost, BitmapInfo};
pub use lock::PixelLock;
pub use memory::MemoryBitmap;
