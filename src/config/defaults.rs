//! Default values used when the canvas does not specify them

/// Default filter parameters
pub struct FilterDefaults;

impl FilterDefaults {
    /// Saturation value the canvas model passes with every saturate request
    pub const SATURATION: f32 = 0.5;

    /// Default tracing directive when `RUST_LOG` is unset
    pub const LOG_DIRECTIVE: &'static str = "canvas_filters_lib=info";
}
