//! Window geometry for correlation measurements.
//!
//! Pure functions that place a signal window and a paired noise window on
//! a correlation trace and turn them into full-length weight arrays.
//!
//! # Architecture
//!
//! 1. **Bounds** (`geometry`, `peak_envelope`): index ranges from a group
//!    velocity prior, or from the causal energy peak.
//! 2. **Checks** (`checks`): reject geometries that do not fit the trace.
//!    Rejection is a data condition, reported as `WindowResult::valid`.
//! 3. **Tapers** (`taper`): weight arrays for none, boxcar, or hann.
//!
//! `snr` and `recenter` are standalone helpers built on the same pieces.

mod checks;
mod geometry;
mod peak_envelope;
mod recenter;
mod snr;
mod taper;
pub mod types;

pub use checks::window_checks;
pub use geometry::{get_window, window_bounds};
pub use peak_envelope::{get_window_peak_envelope, peak_envelope_bounds};
pub use recenter::centered;
pub use snr::{snratio, snratio_or_nan};
pub use taper::{hann, window, window_by_name};
pub use types::{WindowBounds, WindowResult};
