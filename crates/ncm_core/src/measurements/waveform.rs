//! Waveform functionals: the raw trace and its windowed version.

use crate::models::{CorrelationTrace, WindowParams};
use crate::windows::WindowResult;

use super::plot::PlotSink;
use super::types::Measurement;
use super::MeasurementFunctional;

/// Returns the trace samples unchanged.
pub struct FullWaveform;

impl MeasurementFunctional for FullWaveform {
    fn name(&self) -> &'static str {
        "full_waveform"
    }

    fn description(&self) -> &'static str {
        "Unmodified correlation samples"
    }

    fn requires_valid_window(&self) -> bool {
        false
    }

    fn measure(
        &self,
        trace: &CorrelationTrace,
        _window: &WindowResult,
        _g_speed: f64,
        _params: &WindowParams,
        _plot: &PlotSink<'_>,
    ) -> Option<Measurement> {
        Some(Measurement::Waveform(trace.data.clone()))
    }
}

/// Trace weighted by the signal window on both branches.
///
/// The causal signal window and its mirror image are applied to the trace
/// and summed, keeping only the expected arrivals on either side.
pub struct WindowedWaveform;

impl MeasurementFunctional for WindowedWaveform {
    fn name(&self) -> &'static str {
        "windowed_waveform"
    }

    fn description(&self) -> &'static str {
        "Causal and mirrored acausal signal windows applied to the trace"
    }

    fn requires_valid_window(&self) -> bool {
        true
    }

    fn measure(
        &self,
        trace: &CorrelationTrace,
        window: &WindowResult,
        _g_speed: f64,
        _params: &WindowParams,
        _plot: &PlotSink<'_>,
    ) -> Option<Measurement> {
        if !window.valid {
            return None;
        }

        let win = &window.signal;
        let samples = trace
            .data
            .iter()
            .zip(win.iter().zip(win.iter().rev()))
            .map(|(x, (w_caus, w_acaus))| x * w_caus + x * w_acaus)
            .collect();

        Some(Measurement::Waveform(samples))
    }
}
