//! Measurement result type.

use serde::{Deserialize, Serialize};

use crate::models::FunctionalKind;

/// Value produced by a measurement functional.
///
/// Serializes without a tag: a number, a two-element array, or a
/// full-length array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measurement {
    /// Single value (energy ratios).
    Scalar(f64),
    /// Causal and acausal values, in that order.
    Pair([f64; 2]),
    /// Full-length derived waveform.
    Waveform(Vec<f64>),
}

impl Measurement {
    /// NaN-filled value of the shape `kind` produces for a trace of `npts`.
    ///
    /// Lets consumers that store raw numbers keep the NaN convention for
    /// rejected windows.
    pub fn nan_like(kind: FunctionalKind, npts: usize) -> Self {
        match kind {
            FunctionalKind::FullWaveform
            | FunctionalKind::WindowedWaveform
            | FunctionalKind::Envelope
            | FunctionalKind::SquareEnvelope => Measurement::Waveform(vec![f64::NAN; npts]),
            FunctionalKind::Energy => Measurement::Pair([f64::NAN, f64::NAN]),
            FunctionalKind::LnEnergyRatio
            | FunctionalKind::LnEnergyRatioSqr
            | FunctionalKind::LnEnergyRatioCube => Measurement::Scalar(f64::NAN),
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Measurement::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_pair(&self) -> Option<[f64; 2]> {
        match self {
            Measurement::Pair(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_waveform(&self) -> Option<&[f64]> {
        match self {
            Measurement::Waveform(v) => Some(v),
            _ => None,
        }
    }

    /// Number of values carried.
    pub fn len(&self) -> usize {
        match self {
            Measurement::Scalar(_) => 1,
            Measurement::Pair(_) => 2,
            Measurement::Waveform(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_like_matches_functional_shape() {
        assert_eq!(Measurement::nan_like(FunctionalKind::Energy, 11).len(), 2);
        assert_eq!(Measurement::nan_like(FunctionalKind::LnEnergyRatio, 11).len(), 1);

        let waveform = Measurement::nan_like(FunctionalKind::WindowedWaveform, 11);
        let values = waveform.as_waveform().unwrap();
        assert_eq!(values.len(), 11);
        assert!(values.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn serializes_without_tag() {
        let scalar = serde_json::to_string(&Measurement::Scalar(1.5)).unwrap();
        assert_eq!(scalar, "1.5");

        let pair = serde_json::to_string(&Measurement::Pair([1.0, 2.0])).unwrap();
        assert_eq!(pair, "[1.0,2.0]");

        let waveform = serde_json::to_string(&Measurement::Waveform(vec![0.5, 0.25, 0.0])).unwrap();
        assert_eq!(waveform, "[0.5,0.25,0.0]");
    }

    #[test]
    fn accessors_match_variant() {
        let m = Measurement::Pair([3.0, 4.0]);
        assert_eq!(m.as_pair(), Some([3.0, 4.0]));
        assert!(m.as_scalar().is_none());
        assert!(m.as_waveform().is_none());
    }
}
