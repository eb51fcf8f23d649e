//! Runtime configuration for the height matcher.

use core::time::Duration;
use std::env;

/// Construction-time options, applied once.
#[derive(Clone, Copy, Debug)]
pub struct MatchHeightConfig {
    /// Run the init sequence immediately at construction.
    pub auto_init: bool,
    /// Re-equalize on host resize events (debounced).
    pub on_resize: bool,
    /// Quiet period for the resize debounce, in milliseconds.
    pub debounce_delay_ms: u64,
}

impl Default for MatchHeightConfig {
    fn default() -> Self {
        Self {
            auto_init: true,
            on_resize: true,
            debounce_delay_ms: 100,
        }
    }
}

impl MatchHeightConfig {
    /// Construct a config with explicit values.
    #[must_use]
    pub const fn new(auto_init: bool, on_resize: bool, debounce_delay_ms: u64) -> Self {
        Self {
            auto_init,
            on_resize,
            debounce_delay_ms,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// - `MATCHHEIGHT_AUTO_INIT`: set to "0" to skip the eager init
    /// - `MATCHHEIGHT_ON_RESIZE`: set to "0" to ignore resize events
    /// - `MATCHHEIGHT_DEBOUNCE_MS`: quiet period in milliseconds (default: 100)
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let auto_init = env::var("MATCHHEIGHT_AUTO_INIT").ok().as_deref() != Some("0");
        let on_resize = env::var("MATCHHEIGHT_ON_RESIZE").ok().as_deref() != Some("0");
        let debounce_delay_ms = env::var("MATCHHEIGHT_DEBOUNCE_MS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(defaults.debounce_delay_ms);
        Self {
            auto_init,
            on_resize,
            debounce_delay_ms,
        }
    }

    /// The debounce quiet period as a [`Duration`].
    #[must_use]
    pub const fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }
}
