//! Correlation trace type.

use serde::{Deserialize, Serialize};

use crate::error::{MeasureError, MeasureResult};

/// A cross-correlation time series for one station pair.
///
/// A well-formed trace has `2n+1` samples: `n` acausal lags, the zero-lag
/// sample, and `n` causal lags. Even-length traces are accepted here and
/// rejected later by the window checks, so batches keep running.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationTrace {
    /// Correlation samples, acausal lags first.
    pub data: Vec<f64>,
    /// Sampling rate in Hz.
    pub sampling_rate: f64,
    /// Station separation, in the same length unit as the group velocity.
    pub distance: f64,
}

impl CorrelationTrace {
    /// Create a new trace.
    ///
    /// Fails if the sampling rate is not a positive finite number or the
    /// distance is not finite.
    pub fn new(data: Vec<f64>, sampling_rate: f64, distance: f64) -> MeasureResult<Self> {
        if !sampling_rate.is_finite() || sampling_rate <= 0.0 {
            return Err(MeasureError::InvalidParameter(format!(
                "sampling rate must be positive, got {}",
                sampling_rate
            )));
        }
        if !distance.is_finite() {
            return Err(MeasureError::InvalidParameter(format!(
                "distance must be finite, got {}",
                distance
            )));
        }

        Ok(Self {
            data,
            sampling_rate,
            distance,
        })
    }

    /// Number of samples.
    pub fn npts(&self) -> usize {
        self.data.len()
    }

    /// Sample spacing in seconds.
    pub fn delta(&self) -> f64 {
        1.0 / self.sampling_rate
    }

    /// Index of the zero-lag sample, `(npts - 1) / 2`.
    pub fn zero_lag_index(&self) -> usize {
        self.npts().saturating_sub(1) / 2
    }

    /// Whether the trace has the `2n+1` layout.
    pub fn is_odd_length(&self) -> bool {
        self.npts() % 2 == 1
    }

    /// Samples from the zero-lag sample to the end of the trace.
    pub fn causal_branch(&self) -> &[f64] {
        &self.data[self.zero_lag_index().min(self.npts())..]
    }
}
