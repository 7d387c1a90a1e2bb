//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! The flat, file-friendly records here are converted into the typed
//! `WindowParams` and `FunctionalKind` before any measurement runs, so a
//! bad taper or functional name fails once at load time.

use serde::{Deserialize, Serialize};

use crate::error::{MeasureError, MeasureResult};
use crate::logging::LogLevel;
use crate::models::{FunctionalKind, GeometryMode, TaperType, WindowParams, WindowStrategy};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Window placement.
    #[serde(default)]
    pub window: WindowSettings,

    /// Measurement selection.
    #[serde(default)]
    pub measurement: MeasurementSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Window placement settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSettings {
    /// Half-width of the signal window in seconds.
    #[serde(default = "default_hw")]
    pub hw: f64,

    /// Group velocity spread; enables variable-width windows when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hw_variable: Option<f64>,

    /// Noise window separation (half-widths, or 20 s units when variable).
    #[serde(default = "default_sep_noise")]
    pub sep_noise: f64,

    /// Taper name: none, boxcar or hann.
    #[serde(default = "default_wtype")]
    pub wtype: String,

    /// Keep windows that reach into the acausal side.
    #[serde(default)]
    pub win_overlap: bool,

    /// Treat the causal branch as signal in the SNR.
    #[serde(default = "default_true")]
    pub causal_side: bool,

    /// Energy ratio waterlevel, relative to the causal energy.
    #[serde(default)]
    pub waterlevel_perc: f64,

    /// Call the window plotter.
    #[serde(default)]
    pub plot: bool,
}

fn default_hw() -> f64 {
    20.0
}

fn default_sep_noise() -> f64 {
    1.0
}

fn default_wtype() -> String {
    "hann".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            hw: default_hw(),
            hw_variable: None,
            sep_noise: default_sep_noise(),
            wtype: default_wtype(),
            win_overlap: false,
            causal_side: true,
            waterlevel_perc: 0.0,
            plot: false,
        }
    }
}

impl WindowSettings {
    /// Convert into typed window parameters.
    ///
    /// Fails on an unknown taper name or a negative half-width.
    pub fn to_params(&self) -> MeasureResult<WindowParams> {
        if !self.hw.is_finite() || self.hw < 0.0 {
            return Err(MeasureError::InvalidParameter(format!(
                "hw must be a non-negative number of seconds, got {}",
                self.hw
            )));
        }

        let geometry = match self.hw_variable {
            Some(spread) => GeometryMode::Variable {
                hw: self.hw,
                spread,
            },
            None => GeometryMode::Fixed { hw: self.hw },
        };
        let wtype: TaperType = self.wtype.parse()?;

        Ok(WindowParams {
            geometry,
            sep_noise: self.sep_noise,
            wtype,
            win_overlap: self.win_overlap,
            causal_side: self.causal_side,
            waterlevel_perc: self.waterlevel_perc,
            plot: self.plot,
        })
    }
}

/// Measurement selection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementSettings {
    /// Functional name.
    #[serde(default = "default_mtype")]
    pub mtype: String,

    /// Group velocity used to place windows.
    #[serde(default = "default_g_speed")]
    pub g_speed: f64,

    /// How the signal window is located.
    #[serde(default)]
    pub window_strategy: WindowStrategy,

    /// Shortest period of the passband in seconds (peak-envelope windows).
    #[serde(default = "default_min_period")]
    pub min_period: f64,

    /// Longest period of the passband in seconds (peak-envelope windows).
    #[serde(default = "default_max_period")]
    pub max_period: f64,
}

fn default_mtype() -> String {
    FunctionalKind::default().as_str().to_string()
}

fn default_g_speed() -> f64 {
    3700.0
}

fn default_min_period() -> f64 {
    10.0
}

fn default_max_period() -> f64 {
    20.0
}

impl Default for MeasurementSettings {
    fn default() -> Self {
        Self {
            mtype: default_mtype(),
            g_speed: default_g_speed(),
            window_strategy: WindowStrategy::default(),
            min_period: default_min_period(),
            max_period: default_max_period(),
        }
    }
}

impl MeasurementSettings {
    /// Parse the configured functional name.
    pub fn functional(&self) -> MeasureResult<FunctionalKind> {
        self.mtype.parse()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when `RUST_LOG` is not set.
    #[serde(default)]
    pub level: LogLevel,
}

/// Config sections for atomic updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Window,
    Measurement,
    Logging,
}

impl ConfigSection {
    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Window => "window",
            ConfigSection::Measurement => "measurement",
            ConfigSection::Logging => "logging",
        }
    }

    /// All sections, in file order.
    pub fn all() -> &'static [ConfigSection] {
        &[
            ConfigSection::Window,
            ConfigSection::Measurement,
            ConfigSection::Logging,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_serializes() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        assert!(toml.contains("[window]"));
        assert!(toml.contains("[measurement]"));
        assert!(toml.contains("wtype"));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let minimal = "[window]\nhw = 35.0";
        let parsed: Settings = toml::from_str(minimal).unwrap();
        assert_eq!(parsed.window.hw, 35.0);
        assert_eq!(parsed.window.wtype, "hann");
        assert!(parsed.window.causal_side);
        assert_eq!(parsed.measurement.mtype, "ln_energy_ratio");
        assert_eq!(parsed.logging.level, LogLevel::Info);
    }

    #[test]
    fn hw_variable_selects_variable_geometry() {
        let fixed = WindowSettings::default().to_params().unwrap();
        assert_eq!(fixed.geometry, GeometryMode::Fixed { hw: 20.0 });

        let variable = WindowSettings {
            hw_variable: Some(400.0),
            ..WindowSettings::default()
        }
        .to_params()
        .unwrap();
        assert_eq!(
            variable.geometry,
            GeometryMode::Variable {
                hw: 20.0,
                spread: 400.0
            }
        );
    }

    #[test]
    fn unknown_taper_fails_conversion() {
        let settings = WindowSettings {
            wtype: "tukey".to_string(),
            ..WindowSettings::default()
        };
        assert!(matches!(
            settings.to_params(),
            Err(MeasureError::UnknownTaper(_))
        ));
    }

    #[test]
    fn unknown_functional_fails_parse() {
        let settings = MeasurementSettings {
            mtype: "cc_time_shift".to_string(),
            ..MeasurementSettings::default()
        };
        assert!(matches!(
            settings.functional(),
            Err(MeasureError::UnknownFunctional(_))
        ));
    }

    #[test]
    fn strategy_parses_from_toml() {
        let parsed: Settings =
            toml::from_str("[measurement]\nwindow_strategy = \"peak_envelope\"").unwrap();
        assert_eq!(parsed.measurement.window_strategy, WindowStrategy::PeakEnvelope);
    }
}
