//! Taper construction.
//!
//! Builds a full-length weight array that is zero outside `[i0, i1)` and
//! carries the taper inside.

use std::f64::consts::PI;

use crate::error::MeasureResult;
use crate::models::TaperType;

/// Hann taper of length `m`, zero at both ends.
///
/// `m == 0` gives an empty taper and `m == 1` a single one.
pub fn hann(m: usize) -> Vec<f64> {
    match m {
        0 => Vec::new(),
        1 => vec![1.0],
        _ => {
            let denom = (m - 1) as f64;
            (0..m)
                .map(|k| 0.5 - 0.5 * (2.0 * PI * k as f64 / denom).cos())
                .collect()
        }
    }
}

/// Build a weight array of length `n` for the index range `[i0, i1)`.
///
/// `TaperType::None` ignores the range and returns all ones. The range is
/// clipped to the array; an empty range yields all zeros.
pub fn window(wtype: TaperType, n: usize, i0: usize, i1: usize) -> Vec<f64> {
    let mut win = vec![0.0; n];
    let hi = i1.min(n);
    let lo = i0.min(hi);

    match wtype {
        TaperType::None => win.fill(1.0),
        TaperType::Boxcar => win[lo..hi].fill(1.0),
        TaperType::Hann => {
            // Taper spans the requested range even if it was clipped.
            let taper = hann(i1.saturating_sub(i0));
            for (w, t) in win[lo..hi].iter_mut().zip(taper) {
                *w = t;
            }
        }
    }

    win
}

/// Build a weight array from a taper name.
///
/// Fails with `UnknownTaper` for names other than none, boxcar and hann.
pub fn window_by_name(wtype: &str, n: usize, i0: usize, i1: usize) -> MeasureResult<Vec<f64>> {
    let wtype: TaperType = wtype.parse()?;
    Ok(window(wtype, n, i0, i1))
}
