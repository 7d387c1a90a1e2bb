//! Geometric sanity checks for signal/noise windows.

use super::types::WindowBounds;

/// Check that a window pair fits a correlation trace of length `n`.
///
/// Rules, in order:
/// 1. `n` must be odd (a `2n+1` trace with a zero-lag sample).
/// 2. A signal window starting before `n/2 - 1` reaches into the acausal
///    side. Tolerated with a warning if `win_overlap`, rejected otherwise.
/// 3. The signal window must lie inside the trace.
/// 4. The noise window must lie inside the trace.
///
/// Rejections are logged at debug level and never raised.
pub fn window_checks(bounds: &WindowBounds, n: usize, win_overlap: bool) -> bool {
    if n % 2 == 0 {
        tracing::debug!(
            "Correlation length must be 2*n+1, got even length {}; skipping",
            n
        );
        return false;
    }

    let n_i = n as i64;

    if (bounds.signal_lo as f64) < n as f64 / 2.0 - 1.0 {
        if win_overlap {
            tracing::warn!(
                "Windows of causal and acausal side overlap (signal starts at {}, trace length {}). \
                 Set win_overlap = false to skip these correlations.",
                bounds.signal_lo,
                n
            );
        } else {
            tracing::debug!("Windows overlap, skipping");
            return false;
        }
    }

    if bounds.signal_lo < 0 || bounds.signal_hi > n_i {
        tracing::debug!("No windows found: time series is too short");
        return false;
    }

    if bounds.noise_lo < 0 || bounds.noise_hi > n_i {
        tracing::debug!("No windows found: noise window not covered by data");
        return false;
    }

    true
}
