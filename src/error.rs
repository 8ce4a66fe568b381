//! Error types for canvas filters
//!
//! A filter call can only fail one way: the host bitmap could not be accessed.
//! Bad geometry is not an error, it just results in zero iterations.

use std::fmt;
use thiserror::Error;

/// Which step of acquiring the host bitmap failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStage {
    /// Reading width/height/stride/format
    Info,
    /// The bitmap is not 32-bit RGBA
    Format,
    /// Locking the pixel memory
    Lock,
}

impl fmt::Display for AccessStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AccessStage::Info => "info",
            AccessStage::Format => "format",
            AccessStage::Lock => "lock",
        };
        write!(f, "{}", s)
    }
}

/// Error type for filter invocations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The pixel buffer's info, format, or write lock could not be obtained.
    #[error("bitmap access failed at {stage}: {reason}")]
    BufferAccess { stage: AccessStage, reason: String },
}

impl FilterError {
    pub fn access(stage: AccessStage, reason: impl Into<String>) -> Self {
        FilterError::BufferAccess {
            stage,
            reason: reason.into(),
        }
    }

    /// Stage at which access failed
    pub fn stage(&self) -> AccessStage {
        match self {
            FilterError::BufferAccess { stage, .. } => *stage,
        }
    }
}

/// Result type for filter invocations
pub type FilterResult<T> = Result<T, FilterError>;

/// Error type for loading a [`crate::config::FilterConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid filter config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("saturation value must be finite, got {0}")]
    NonFiniteSaturation(f32),
}
