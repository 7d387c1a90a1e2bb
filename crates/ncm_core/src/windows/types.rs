//! Window geometry types.

use serde::{Deserialize, Serialize};

/// Sample index bounds of the signal and noise windows.
///
/// Bounds are half-open (`lo..hi`) and signed: degenerate geometries can
/// place them before the first sample or past the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowBounds {
    /// First sample of the signal window.
    pub signal_lo: i64,
    /// One past the last sample of the signal window.
    pub signal_hi: i64,
    /// First sample of the noise window.
    pub noise_lo: i64,
    /// One past the last sample of the noise window.
    pub noise_hi: i64,
}

impl WindowBounds {
    pub fn new(signal_lo: i64, signal_hi: i64, noise_lo: i64, noise_hi: i64) -> Self {
        Self {
            signal_lo,
            signal_hi,
            noise_lo,
            noise_hi,
        }
    }

    /// Width of the signal window in samples.
    pub fn signal_len(&self) -> i64 {
        self.signal_hi - self.signal_lo
    }

    /// Width of the noise window in samples.
    pub fn noise_len(&self) -> i64 {
        self.noise_hi - self.noise_lo
    }
}

/// Signal and noise weight arrays for one trace.
///
/// Both arrays always have the trace length. When `valid` is false they
/// are all zero and measurements that need a window report no value.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowResult {
    /// Weights of the signal window.
    pub signal: Vec<f64>,
    /// Weights of the noise window.
    pub noise: Vec<f64>,
    /// Whether the geometry passed the window checks.
    pub valid: bool,
    /// Index bounds the weights were built from.
    pub bounds: WindowBounds,
}

impl WindowResult {
    /// All-zero result for a rejected geometry.
    pub fn invalid(n: usize, bounds: WindowBounds) -> Self {
        Self {
            signal: vec![0.0; n],
            noise: vec![0.0; n],
            valid: false,
            bounds,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Length of the weight arrays.
    pub fn len(&self) -> usize {
        self.signal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signal.is_empty()
    }

    /// Copy with both weight arrays time-reversed (causal <-> acausal).
    pub fn reversed(&self) -> Self {
        Self {
            signal: self.signal.iter().rev().copied().collect(),
            noise: self.noise.iter().rev().copied().collect(),
            valid: self.valid,
            bounds: self.bounds,
        }
    }
}
