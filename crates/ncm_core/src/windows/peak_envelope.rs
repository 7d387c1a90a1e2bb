//! Window placement at the energy peak of the causal branch.
//!
//! Used when there is no reliable group-velocity prior: the signal window
//! is centered on the largest squared amplitude after zero lag, with a
//! width of five dominant periods.

use crate::models::{CorrelationTrace, WindowParams};

use super::geometry::{fill_windows, to_samples};
use super::types::{WindowBounds, WindowResult};

/// Half-width of the window in dominant periods.
const HALF_WIDTH_PERIODS: f64 = 2.5;

/// Compute signal and noise windows around the causal energy peak.
///
/// `min_period` and `max_period` (seconds) bound the passband of the
/// correlation; their mean is taken as the dominant period. The geometry
/// half-width in `params` is not used.
pub fn get_window_peak_envelope(
    trace: &CorrelationTrace,
    min_period: f64,
    max_period: f64,
    params: &WindowParams,
) -> WindowResult {
    let n = trace.npts();

    match peak_envelope_bounds(trace, min_period, max_period, params.sep_noise) {
        Some(bounds) => fill_windows(n, bounds, params.wtype, params.win_overlap),
        None => WindowResult::invalid(n, WindowBounds::default()),
    }
}

/// Index bounds for the peak-envelope geometry.
///
/// Returns `None` for an empty trace or a non-positive dominant period.
pub fn peak_envelope_bounds(
    trace: &CorrelationTrace,
    min_period: f64,
    max_period: f64,
    sep_noise: f64,
) -> Option<WindowBounds> {
    let period = (min_period + max_period) / 2.0;
    if !period.is_finite() || period <= 0.0 {
        tracing::debug!("Unusable dominant period {}, skipping", period);
        return None;
    }

    let branch_offset = trace.zero_lag_index() as i64;
    let peak = argmax_energy(trace.causal_branch())? as i64;

    let half_win = HALF_WIDTH_PERIODS * period;
    let period_n = (period / trace.delta()).floor();
    let half_win_n = to_samples(HALF_WIDTH_PERIODS * period_n);

    let lo = peak
        .saturating_sub(half_win_n)
        .saturating_add(branch_offset)
        .max(branch_offset + 1);
    let hi = peak.saturating_add(half_win_n).saturating_add(branch_offset);

    let fs = trace.sampling_rate;
    let lo_n = hi.saturating_add(to_samples(sep_noise * half_win * fs));
    let hi_n = lo_n
        .saturating_add(to_samples(2.0 * half_win * fs))
        .saturating_add(1);

    Some(WindowBounds::new(lo, hi, lo_n, hi_n))
}

/// Index of the first maximum of the squared samples.
fn argmax_energy(samples: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &x) in samples.iter().enumerate() {
        let e = x * x;
        if best.map_or(true, |(_, b)| e > b) {
            best = Some((i, e));
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaperType;

    fn spike_trace(npts: usize, spike_at: usize, fs: f64) -> CorrelationTrace {
        let mut data = vec![0.01; npts];
        data[spike_at] = -3.0;
        CorrelationTrace::new(data, fs, 0.0).unwrap()
    }

    #[test]
    fn argmax_takes_first_of_equal_peaks() {
        assert_eq!(argmax_energy(&[0.0, 2.0, -2.0, 1.0]), Some(1));
        assert_eq!(argmax_energy(&[]), None);
    }

    #[test]
    fn window_centered_on_causal_peak() {
        // s0 = 200, peak at causal index 60 -> trace index 260
        let tr = spike_trace(401, 260, 1.0);
        let params = WindowParams::default().with_taper(TaperType::Boxcar);
        // T = 4 s -> half_win_n = 10
        let result = get_window_peak_envelope(&tr, 2.0, 6.0, &params);

        assert!(result.valid);
        assert_eq!(result.bounds.signal_lo, 250);
        assert_eq!(result.bounds.signal_hi, 270);
        // noise: gap of sep_noise * 10 s, width 2 * 10 s + 1
        assert_eq!(result.bounds.noise_lo, 280);
        assert_eq!(result.bounds.noise_hi, 301);
        assert_eq!(result.signal.iter().sum::<f64>(), 20.0);
    }

    #[test]
    fn window_start_clamped_after_zero_lag() {
        // Peak right after zero lag: lower bound stops at s0 + 1.
        let tr = spike_trace(401, 202, 1.0);
        let result = get_window_peak_envelope(&tr, 2.0, 6.0, &WindowParams::default());
        assert!(result.valid);
        assert_eq!(result.bounds.signal_lo, 201);
    }

    #[test]
    fn acausal_peak_is_ignored() {
        let mut data = vec![0.0; 401];
        data[100] = 10.0;
        data[300] = 1.0;
        let tr = CorrelationTrace::new(data, 1.0, 0.0).unwrap();
        let bounds = peak_envelope_bounds(&tr, 2.0, 6.0, 1.0).unwrap();
        assert_eq!(bounds.signal_hi, 310);
    }

    #[test]
    fn noise_past_end_is_invalid() {
        let tr = spike_trace(401, 390, 1.0);
        let result = get_window_peak_envelope(&tr, 2.0, 6.0, &WindowParams::default());
        assert!(!result.valid);
        assert_eq!(result.signal.len(), 401);
    }

    #[test]
    fn bad_period_is_invalid() {
        let tr = spike_trace(401, 260, 1.0);
        assert!(!get_window_peak_envelope(&tr, 0.0, 0.0, &WindowParams::default()).valid);
    }

    #[test]
    fn huge_period_is_invalid() {
        let tr = spike_trace(401, 260, 1.0);
        let result = get_window_peak_envelope(&tr, 1e20, 1e20, &WindowParams::default());
        assert!(!result.valid);
        assert_eq!(result.noise.len(), 401);
    }
}
