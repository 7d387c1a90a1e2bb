//! Envelope functionals computed over the whole trace.

use crate::models::{CorrelationTrace, WindowParams};
use crate::windows::WindowResult;

use super::plot::PlotSink;
use super::signal::hilbert_imag;
use super::types::Measurement;
use super::MeasurementFunctional;

/// `data^2 + H(data)^2` for every sample.
fn squared_envelope(data: &[f64]) -> Vec<f64> {
    data.iter()
        .zip(hilbert_imag(data))
        .map(|(x, h)| x * x + h * h)
        .collect()
}

/// Instantaneous amplitude from the analytic signal.
pub struct Envelope;

impl MeasurementFunctional for Envelope {
    fn name(&self) -> &'static str {
        "envelope"
    }

    fn description(&self) -> &'static str {
        "Hilbert envelope of the full trace"
    }

    fn requires_valid_window(&self) -> bool {
        false
    }

    fn measure(
        &self,
        trace: &CorrelationTrace,
        _window: &WindowResult,
        _g_speed: f64,
        params: &WindowParams,
        plot: &PlotSink<'_>,
    ) -> Option<Measurement> {
        let envelope: Vec<f64> = squared_envelope(&trace.data)
            .into_iter()
            .map(f64::sqrt)
            .collect();
        plot.emit(params, trace, &envelope, f64::NAN);

        Some(Measurement::Waveform(envelope))
    }
}

/// Instantaneous power from the analytic signal.
pub struct SquareEnvelope;

impl MeasurementFunctional for SquareEnvelope {
    fn name(&self) -> &'static str {
        "square_envelope"
    }

    fn description(&self) -> &'static str {
        "Squared Hilbert envelope of the full trace"
    }

    fn requires_valid_window(&self) -> bool {
        false
    }

    fn measure(
        &self,
        trace: &CorrelationTrace,
        _window: &WindowResult,
        _g_speed: f64,
        params: &WindowParams,
        plot: &PlotSink<'_>,
    ) -> Option<Measurement> {
        let envelope = squared_envelope(&trace.data);
        plot.emit(params, trace, &envelope, f64::NAN);

        Some(Measurement::Waveform(envelope))
    }
}
