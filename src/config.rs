//! Page-level configuration.
//!
//! A page may embed `<script type="application/json" id="likenet-config">`
//! to override the storage key, the mobile breakpoint, or the console log
//! level. Every field is optional; absent fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{MOBILE_BREAKPOINT_PX, STORAGE_KEY};

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown log level: {0:?}")]
    InvalidLogLevel(String),
    #[error("mobile breakpoint must be a positive number, got {0}")]
    InvalidBreakpoint(f64),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `localStorage` key holding the likes map.
    pub storage_key: String,
    /// Widths at or below this (CSS pixels) get the mobile nav behavior.
    pub mobile_breakpoint_px: f64,
    /// One of `error`, `warn`, `info`, `debug`, `trace` (any case).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    ///
    /// Malformed JSON, an unknown log level, or a non-positive breakpoint.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.mobile_breakpoint_px.is_finite() || self.mobile_breakpoint_px <= 0.0 {
            return Err(ConfigError::InvalidBreakpoint(self.mobile_breakpoint_px));
        }
        if self.log_level.parse::<log::Level>().is_err() {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }
        Ok(())
    }

    /// The configured log level, falling back to `info` when it does not parse.
    #[must_use]
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
