//! Error types for configuration-class failures.
//!
//! Only caller mistakes end up here. Degenerate window geometry is a data
//! condition and is reported through `WindowResult::valid` instead.

/// Error types for measurement setup.
#[derive(Debug, thiserror::Error)]
pub enum MeasureError {
    /// Taper name not recognized.
    #[error("Window type '{0}' is not implemented. Implemented types: none, boxcar, hann")]
    UnknownTaper(String),

    /// Measurement functional name not recognized.
    #[error("Measurement functional {0} not currently implemented.")]
    UnknownFunctional(String),

    /// Re-centering target length was even.
    #[error("New size must be odd, got {0}")]
    EvenTargetSize(usize),

    /// A physical parameter is outside its meaningful range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Type alias for measurement results.
pub type MeasureResult<T> = Result<T, MeasureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_functional_names_the_functional() {
        let err = MeasureError::UnknownFunctional("phase_misfit".to_string());
        assert!(err.to_string().contains("phase_misfit"));
    }

    #[test]
    fn unknown_taper_lists_implemented_types() {
        let msg = MeasureError::UnknownTaper("kaiser".to_string()).to_string();
        assert!(msg.contains("'kaiser'"));
        assert!(msg.contains("boxcar"));
        assert!(msg.contains("hann"));
    }
}
