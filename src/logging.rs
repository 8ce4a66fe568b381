//! Tracing setup for embedding hosts

use tracing_subscriber::EnvFilter;

use crate::config::FilterDefaults;

/// Install a fmt subscriber filtered by `RUST_LOG`, or `default_directive`
/// when `RUST_LOG` is unset or invalid.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("[Logging] Initialized");
    }
    installed
}

/// [`init_logging`] with the crate's default directive
pub fn init_default_logging() -> bool {
    init_logging(FilterDefaults::LOG_DIRECTIVE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_noop() {
        init_default_logging();
        assert!(!init_logging("debug"));
    }
}
