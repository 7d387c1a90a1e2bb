//! Core enums used throughout the crate.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MeasureError;

/// Taper applied inside a window's index range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaperType {
    /// No windowing: weights are one over the whole trace.
    None,
    /// Rectangular window.
    Boxcar,
    /// Hann taper, zero at both ends.
    #[default]
    Hann,
}

impl TaperType {
    /// Configuration name of this taper.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaperType::None => "none",
            TaperType::Boxcar => "boxcar",
            TaperType::Hann => "hann",
        }
    }
}

impl std::fmt::Display for TaperType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaperType {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "" => Ok(TaperType::None),
            "boxcar" => Ok(TaperType::Boxcar),
            "hann" | "hanning" => Ok(TaperType::Hann),
            _ => Err(MeasureError::UnknownTaper(s.to_string())),
        }
    }
}

/// How the signal window is located on the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowStrategy {
    /// Centered on `distance / group velocity`.
    #[default]
    GroupVelocity,
    /// Centered on the energy peak of the causal branch.
    PeakEnvelope,
}

impl std::fmt::Display for WindowStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowStrategy::GroupVelocity => write!(f, "group_velocity"),
            WindowStrategy::PeakEnvelope => write!(f, "peak_envelope"),
        }
    }
}

/// Measurement functional applied to a correlation trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionalKind {
    /// The trace itself.
    FullWaveform,
    /// Causal window plus mirrored acausal window applied to the trace.
    WindowedWaveform,
    /// Hilbert envelope of the whole trace.
    Envelope,
    /// Squared Hilbert envelope of the whole trace.
    SquareEnvelope,
    /// Windowed energy of each branch, `[causal, acausal]`.
    Energy,
    /// Log ratio of causal to acausal energy, waterlevel-regularized.
    #[default]
    LnEnergyRatio,
    /// Squared log energy ratio.
    LnEnergyRatioSqr,
    /// Cubed log energy ratio.
    LnEnergyRatioCube,
}

impl FunctionalKind {
    /// All functional kinds, in dispatcher order.
    pub fn all() -> &'static [FunctionalKind] {
        &[
            FunctionalKind::FullWaveform,
            FunctionalKind::WindowedWaveform,
            FunctionalKind::Envelope,
            FunctionalKind::SquareEnvelope,
            FunctionalKind::Energy,
            FunctionalKind::LnEnergyRatio,
            FunctionalKind::LnEnergyRatioSqr,
            FunctionalKind::LnEnergyRatioCube,
        ]
    }

    /// Dispatcher name of this functional.
    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionalKind::FullWaveform => "full_waveform",
            FunctionalKind::WindowedWaveform => "windowed_waveform",
            FunctionalKind::Envelope => "envelope",
            FunctionalKind::SquareEnvelope => "square_envelope",
            FunctionalKind::Energy => "energy",
            FunctionalKind::LnEnergyRatio => "ln_energy_ratio",
            FunctionalKind::LnEnergyRatioSqr => "ln_energy_ratio_sqr",
            FunctionalKind::LnEnergyRatioCube => "ln_energy_ratio_cube",
        }
    }
}

impl std::fmt::Display for FunctionalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FunctionalKind {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "full_waveform" => Ok(FunctionalKind::FullWaveform),
            "windowed_waveform" => Ok(FunctionalKind::WindowedWaveform),
            "envelope" => Ok(FunctionalKind::Envelope),
            "square_envelope" => Ok(FunctionalKind::SquareEnvelope),
            // Older configs name the energy functional by its misfit.
            "energy" | "energy_diff" => Ok(FunctionalKind::Energy),
            "ln_energy_ratio" => Ok(FunctionalKind::LnEnergyRatio),
            "ln_energy_ratio_sqr" => Ok(FunctionalKind::LnEnergyRatioSqr),
            "ln_energy_ratio_cube" => Ok(FunctionalKind::LnEnergyRatioCube),
            other => Err(MeasureError::UnknownFunctional(other.to_string())),
        }
    }
}
