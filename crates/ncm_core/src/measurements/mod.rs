//! Measurement functionals for correlation traces.
//!
//! This module defines the `MeasurementFunctional` trait and its
//! implementations. Each functional reduces a trace, with the windows from
//! `crate::windows`, to a scalar, a causal/acausal pair, or a waveform.
//! Functionals that need a window report `None` when the window is invalid.

mod energy;
mod envelope;
mod plan;
pub mod plot;
pub mod signal;
pub mod types;
mod waveform;

pub use energy::{Energy, LnEnergyRatio, LnEnergyRatioCube, LnEnergyRatioSqr};
pub use envelope::{Envelope, SquareEnvelope};
pub use plan::MeasurementPlan;
pub use plot::{PlotError, PlotSink, WindowPlotter};
pub use types::Measurement;
pub use waveform::{FullWaveform, WindowedWaveform};

use crate::error::MeasureResult;
use crate::models::{CorrelationTrace, FunctionalKind, WindowParams};
use crate::windows::WindowResult;

/// Trait for measurement functionals.
pub trait MeasurementFunctional: Send + Sync {
    /// Dispatcher name of this functional.
    fn name(&self) -> &'static str;

    /// Short description of the functional.
    fn description(&self) -> &'static str;

    /// Whether the functional reports `None` for an invalid window.
    fn requires_valid_window(&self) -> bool;

    /// Measure `trace` with the given window.
    ///
    /// Returns `None` when the functional needs a window and `window` is
    /// invalid. `g_speed` is the group velocity the window was built for.
    fn measure(
        &self,
        trace: &CorrelationTrace,
        window: &WindowResult,
        g_speed: f64,
        params: &WindowParams,
        plot: &PlotSink<'_>,
    ) -> Option<Measurement>;
}

/// Create the functional for the given kind.
pub fn get_functional(kind: FunctionalKind) -> Box<dyn MeasurementFunctional> {
    match kind {
        FunctionalKind::FullWaveform => Box::new(FullWaveform),
        FunctionalKind::WindowedWaveform => Box::new(WindowedWaveform),
        FunctionalKind::Envelope => Box::new(Envelope),
        FunctionalKind::SquareEnvelope => Box::new(SquareEnvelope),
        FunctionalKind::Energy => Box::new(Energy),
        FunctionalKind::LnEnergyRatio => Box::new(LnEnergyRatio),
        FunctionalKind::LnEnergyRatioSqr => Box::new(LnEnergyRatioSqr),
        FunctionalKind::LnEnergyRatioCube => Box::new(LnEnergyRatioCube),
    }
}

/// Create a functional by name.
///
/// Fails with `UnknownFunctional` for names outside `FunctionalKind`.
pub fn select(name: &str) -> MeasureResult<Box<dyn MeasurementFunctional>> {
    let kind: FunctionalKind = name.parse()?;
    Ok(get_functional(kind))
}

/// Measure with `kind`, rendering an invalid window as a NaN-filled value.
pub fn measure_or_nan(
    kind: FunctionalKind,
    trace: &CorrelationTrace,
    window: &WindowResult,
    g_speed: f64,
    params: &WindowParams,
    plot: &PlotSink<'_>,
) -> Measurement {
    get_functional(kind)
        .measure(trace, window, g_speed, params, plot)
        .unwrap_or_else(|| {
            tracing::trace!("{} skipped: invalid window", kind);
            Measurement::nan_like(kind, trace.npts())
        })
}
