//! Signal-to-noise ratio of a correlation trace.

use crate::models::{CorrelationTrace, WindowParams};

use super::geometry::get_window;

/// Ratio of windowed signal energy to windowed noise energy.
///
/// The windows come from [`get_window`]. With `causal_side == false` both
/// windows are mirrored so the acausal branch is treated as signal.
/// Returns `None` if the window geometry is invalid.
pub fn snratio(trace: &CorrelationTrace, g_speed: f64, params: &WindowParams) -> Option<f64> {
    let mut window = get_window(trace, g_speed, params);
    if !window.valid {
        return None;
    }

    if !params.causal_side {
        window = window.reversed();
    }

    let signal = weighted_power(&window.signal, &trace.data);
    let noise = weighted_power(&window.noise, &trace.data);

    Some(signal / (noise + f64::MIN_POSITIVE))
}

/// Same as [`snratio`], with NaN for an invalid window.
pub fn snratio_or_nan(trace: &CorrelationTrace, g_speed: f64, params: &WindowParams) -> f64 {
    snratio(trace, g_speed, params).unwrap_or(f64::NAN)
}

fn weighted_power(weights: &[f64], data: &[f64]) -> f64 {
    weights
        .iter()
        .zip(data)
        .map(|(w, x)| (w * x).powi(2))
        .sum()
}
