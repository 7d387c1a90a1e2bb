//! Window strategy and functional bundled for repeated use.
//!
//! An orchestrator builds one plan from its settings and applies it to
//! every station pair. Each call is independent, so plans can be shared
//! across threads.

use crate::config::Settings;
use crate::error::{MeasureError, MeasureResult};
use crate::models::{CorrelationTrace, FunctionalKind, WindowParams, WindowStrategy};
use crate::windows::{get_window, get_window_peak_envelope, WindowResult};

use super::get_functional;
use super::plot::PlotSink;
use super::types::Measurement;

/// Everything needed to measure one trace.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementPlan {
    /// Functional to apply.
    pub kind: FunctionalKind,
    /// Window parameters.
    pub params: WindowParams,
    /// Group velocity for window placement.
    pub g_speed: f64,
    /// How the signal window is located.
    pub strategy: WindowStrategy,
    /// Passband periods (seconds) for peak-envelope windows.
    pub min_period: f64,
    pub max_period: f64,
}

impl MeasurementPlan {
    /// Plan with group-velocity windows.
    pub fn new(kind: FunctionalKind, params: WindowParams, g_speed: f64) -> Self {
        Self {
            kind,
            params,
            g_speed,
            strategy: WindowStrategy::GroupVelocity,
            min_period: 0.0,
            max_period: 0.0,
        }
    }

    /// Switch to peak-envelope windows for the given passband.
    pub fn with_peak_envelope(mut self, min_period: f64, max_period: f64) -> Self {
        self.strategy = WindowStrategy::PeakEnvelope;
        self.min_period = min_period;
        self.max_period = max_period;
        self
    }

    /// Build the windows for `trace`.
    pub fn window(&self, trace: &CorrelationTrace) -> WindowResult {
        match self.strategy {
            WindowStrategy::GroupVelocity => get_window(trace, self.g_speed, &self.params),
            WindowStrategy::PeakEnvelope => {
                get_window_peak_envelope(trace, self.min_period, self.max_period, &self.params)
            }
        }
    }

    /// Window and measure `trace`.
    ///
    /// Returns `None` when the functional needs a window and the geometry
    /// was rejected.
    pub fn measure(&self, trace: &CorrelationTrace, plot: &PlotSink<'_>) -> Option<Measurement> {
        let window = self.window(trace);
        get_functional(self.kind).measure(trace, &window, self.g_speed, &self.params, plot)
    }
}

impl TryFrom<&Settings> for MeasurementPlan {
    type Error = MeasureError;

    fn try_from(settings: &Settings) -> MeasureResult<Self> {
        let m = &settings.measurement;
        Ok(Self {
            kind: m.functional()?,
            params: settings.window.to_params()?,
            g_speed: m.g_speed,
            strategy: m.window_strategy,
            min_period: m.min_period,
            max_period: m.max_period,
        })
    }
}
