//! Configuration management for correlation measurements.
//!
//! This module provides:
//! - TOML-based configuration with `[window]`, `[measurement]` and
//!   `[logging]` sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Conversion of the flat file records into typed parameters
//!
//! # Example
//!
//! ```no_run
//! use ncm_core::config::{ConfigManager, ConfigSection};
//!
//! let mut config = ConfigManager::new("config/measure.toml");
//! config.load_or_create().unwrap();
//!
//! let params = config.settings().window.to_params().unwrap();
//! let kind = config.settings().measurement.functional().unwrap();
//!
//! config.settings_mut().measurement.g_speed = 3200.0;
//! config.update_section(ConfigSection::Measurement).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{
    ConfigSection, LoggingSettings, MeasurementSettings, Settings, WindowSettings,
};
