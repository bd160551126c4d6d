//! Site configuration read from the host page.
//!
//! Every field has a default, so a page without a `site-config` script
//! behaves like a stacked site with the standard breakpoint and timings.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use canvas::consts::{DEFAULT_SLIDE_INTERVAL_MS, RESIZE_DEBOUNCE_MS, RESPONSIVE_BREAKPOINT_PX};
use canvas::responsive::ResponsiveMode;
use serde::Deserialize;

/// Why the embedded configuration was rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site config field `{field}` {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Per-site rendering settings.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Small-screen layout. Unknown strings read as `stack`.
    #[serde(deserialize_with = "deserialize_mode")]
    pub responsive: ResponsiveMode,
    /// Viewport width at or below which the responsive layout applies.
    pub breakpoint_px: f64,
    /// Quiet period after the last window resize before re-layout.
    pub resize_debounce_ms: u32,
    /// Slide period for sliders that do not set one.
    pub default_slide_interval_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            responsive: ResponsiveMode::Stack,
            breakpoint_px: RESPONSIVE_BREAKPOINT_PX,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            default_slide_interval_ms: DEFAULT_SLIDE_INTERVAL_MS,
        }
    }
}

fn deserialize_mode<'de, D>(deserializer: D) -> Result<ResponsiveMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(ResponsiveMode::parse(&raw))
}

impl SiteConfig {
    /// Parse and validate a config document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON or out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.breakpoint_px.is_finite() || self.breakpoint_px <= 0.0 {
            return Err(ConfigError::Invalid { field: "breakpoint_px", reason: "must be a positive number" });
        }
        if self.default_slide_interval_ms == 0 {
            return Err(ConfigError::Invalid { field: "default_slide_interval_ms", reason: "must be positive" });
        }
        Ok(())
    }

    /// The embedded config, or defaults when it is missing or invalid.
    pub fn load() -> Self {
        #[cfg(feature = "csr")]
        {
            let Some(text) = crate::util::bootstrap::script_text(crate::util::bootstrap::CONFIG_SCRIPT_ID) else {
                return Self::default();
            };
            match Self::from_json(&text) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("{e}; using defaults");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}
