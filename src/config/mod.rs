//! Filter configuration
//!
//! The host canvas passes this once at startup (or not at all, in which case
//! [`FilterConfig::default`] applies).

mod defaults;

pub use defaults::FilterDefaults;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pixel::PixelLayout;

/// Configuration for the canvas filter entry points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Channel order of the host bitmap's pixels
    pub layout: PixelLayout,
    /// Saturation value used when the caller does not pass one
    pub default_saturation: f32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            layout: PixelLayout::Rgba,
            default_saturation: FilterDefaults::SATURATION,
        }
    }
}

impl FilterConfig {
    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: FilterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_saturation.is_finite() {
            return Err(ConfigError::NonFiniteSaturation(self.default_saturation));
        }
        Ok(())
    }
}
