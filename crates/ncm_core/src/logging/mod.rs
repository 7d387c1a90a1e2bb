//! Logging setup for measurement runs.
//!
//! Library code only emits `tracing` events; the orchestrator decides
//! where they go. `init_tracing` is a convenience for binaries and
//! scripts that have no subscriber of their own.

mod types;

pub use types::LogLevel;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize global tracing subscriber.
///
/// This sets up a subscriber that:
/// - Respects RUST_LOG environment variable
/// - Falls back to the provided default level
/// - Outputs to stderr with timestamps
///
/// Should be called once at application startup.
pub fn init_tracing(default_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_filter_str()));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(filter)
        .init();
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CorrelationTrace, GeometryMode, WindowParams};
    use crate::windows::get_window;

    #[test]
    fn overlap_warning_does_not_change_result() {
        init_test_tracing();

        // Arrival inside the half-width of zero lag.
        let trace = CorrelationTrace::new(vec![0.0; 201], 1.0, 2_000.0).unwrap();
        let params = WindowParams::default()
            .with_geometry(GeometryMode::Fixed { hw: 10.0 })
            .with_overlap(true);
        assert!(get_window(&trace, 1000.0, &params).valid);
    }
}
