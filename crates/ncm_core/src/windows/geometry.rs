//! Signal/noise window placement from a group velocity.
//!
//! The signal window is centered on the expected arrival lag
//! `distance / g_speed` on the causal branch; the noise window follows it
//! after a gap. Degenerate geometries come back as an invalid, all-zero
//! `WindowResult` instead of an error so that batches over many station
//! pairs keep going.

use crate::models::{CorrelationTrace, GeometryMode, TaperType, WindowParams};

use super::checks::window_checks;
use super::taper::window;
use super::types::{WindowBounds, WindowResult};

/// Noise gap unit in variable mode, seconds.
const VARIABLE_NOISE_UNIT_SECS: f64 = 20.0;

/// Convert a sample count to an index offset, truncating toward zero.
pub(crate) fn to_samples(x: f64) -> i64 {
    x.trunc() as i64
}

/// Compute signal and noise windows for a trace and group velocity.
pub fn get_window(trace: &CorrelationTrace, g_speed: f64, params: &WindowParams) -> WindowResult {
    let n = trace.npts();

    match window_bounds(trace, g_speed, params.geometry, params.sep_noise) {
        Some(bounds) => fill_windows(n, bounds, params.wtype, params.win_overlap),
        None => WindowResult::invalid(n, WindowBounds::default()),
    }
}

/// Index bounds for the given geometry.
///
/// Returns `None` when a group velocity is not a positive finite number.
pub fn window_bounds(
    trace: &CorrelationTrace,
    g_speed: f64,
    geometry: GeometryMode,
    sep_noise: f64,
) -> Option<WindowBounds> {
    let s0 = trace.zero_lag_index() as i64;
    let dist = trace.distance;
    let fs = trace.sampling_rate;

    let usable = |g: f64| g.is_finite() && g > 0.0;

    match geometry {
        GeometryMode::Fixed { hw } => {
            if !usable(g_speed) {
                tracing::debug!("Unusable group velocity {}, skipping", g_speed);
                return None;
            }

            let width = to_samples(2.0 * hw * fs).saturating_add(1);
            let lo = to_samples((dist / g_speed - hw) * fs).saturating_add(s0);
            let hi = lo.saturating_add(width);

            let lo_n = hi.saturating_add(to_samples(sep_noise * hw * fs));
            let hi_n = lo_n.saturating_add(width);

            Some(WindowBounds::new(lo, hi, lo_n, hi_n))
        }
        GeometryMode::Variable { hw, spread } => {
            let g_slow = g_speed - spread;
            let g_fast = g_speed + spread;
            if !usable(g_slow) || !usable(g_fast) {
                tracing::debug!(
                    "Unusable group velocity range {}..{}, skipping",
                    g_slow,
                    g_fast
                );
                return None;
            }

            // Fastest arrival bounds the start, slowest the end.
            let lo = to_samples((dist / g_fast - hw) * fs).saturating_add(s0);
            let hi = to_samples((dist / g_slow + hw) * fs).saturating_add(s0);

            let lo_n = hi.saturating_add(to_samples(sep_noise * VARIABLE_NOISE_UNIT_SECS * fs));
            let hi_n = lo_n.saturating_add(hi.saturating_sub(lo));

            Some(WindowBounds::new(lo, hi, lo_n, hi_n))
        }
    }
}

/// Check the bounds and build the weight arrays, or zeros if invalid.
pub(crate) fn fill_windows(
    n: usize,
    bounds: WindowBounds,
    wtype: TaperType,
    win_overlap: bool,
) -> WindowResult {
    if !window_checks(&bounds, n, win_overlap) {
        return WindowResult::invalid(n, bounds);
    }

    // Checks guarantee all lower bounds are non-negative.
    let idx = |i: i64| i.max(0) as usize;

    WindowResult {
        signal: window(wtype, n, idx(bounds.signal_lo), idx(bounds.signal_hi)),
        noise: window(wtype, n, idx(bounds.noise_lo), idx(bounds.noise_hi)),
        valid: true,
        bounds,
    }
}
