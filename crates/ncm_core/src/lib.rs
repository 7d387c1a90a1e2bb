//! NCM Core - Measurements on ambient-noise cross-correlation traces.
//!
//! This crate turns a single correlation trace (one station pair) and a
//! hypothesized surface-wave group velocity into a misfit observable.
//! It has no I/O and no scheduling: a batch orchestrator supplies traces
//! and parameters, and consumes the measurement values.
//!
//! # Pipeline
//!
//! 1. **Window geometry** (`windows`): locate a signal window around the
//!    expected arrival and a paired noise window, check that both fit the
//!    trace, and build tapered weight arrays.
//! 2. **Measurement** (`measurements`): reduce the trace (optionally
//!    windowed) to a scalar, a causal/acausal pair, or a waveform.
//!
//! ```ignore
//! use ncm_core::models::{CorrelationTrace, WindowParams};
//! use ncm_core::windows::get_window;
//! use ncm_core::measurements::{select, PlotSink};
//!
//! let trace = CorrelationTrace::new(samples, 10.0, 150_000.0)?;
//! let params = WindowParams::default();
//! let window = get_window(&trace, 3700.0, &params);
//! let functional = select("ln_energy_ratio")?;
//! let value = functional.measure(&trace, &window, 3700.0, &params, &PlotSink::disabled());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod measurements;
pub mod models;
pub mod windows;

pub use error::{MeasureError, MeasureResult};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
