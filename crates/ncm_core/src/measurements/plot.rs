//! Hook for the external window plotter.
//!
//! Plotting is instrumentation only: a failing, panicking or missing
//! plotter never changes a measurement.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::models::{CorrelationTrace, WindowParams};

/// Error reported by a plotter.
#[derive(Debug, thiserror::Error)]
#[error("Plotting failed: {0}")]
pub struct PlotError(pub String);

/// External collaborator that draws a trace with a window or derived array.
pub trait WindowPlotter: Send + Sync {
    /// Plot `trace` together with `window` and the measured `value`
    /// (NaN when the functional has no scalar value).
    fn plot_window(
        &self,
        trace: &CorrelationTrace,
        window: &[f64],
        value: f64,
    ) -> Result<(), PlotError>;
}

/// Optional plotter handed to the functionals.
#[derive(Clone, Copy, Default)]
pub struct PlotSink<'a> {
    plotter: Option<&'a dyn WindowPlotter>,
}

impl<'a> PlotSink<'a> {
    /// Sink that never plots.
    pub fn disabled() -> Self {
        Self { plotter: None }
    }

    /// Sink forwarding to `plotter` when `params.plot` is set.
    pub fn new(plotter: &'a dyn WindowPlotter) -> Self {
        Self {
            plotter: Some(plotter),
        }
    }

    /// Forward one plot call if plotting is enabled.
    pub fn emit(
        &self,
        params: &WindowParams,
        trace: &CorrelationTrace,
        window: &[f64],
        value: f64,
    ) {
        if !params.plot {
            return;
        }

        match self.plotter {
            Some(plotter) => {
                let outcome =
                    catch_unwind(AssertUnwindSafe(|| plotter.plot_window(trace, window, value)));
                match outcome {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => tracing::warn!("{}", e),
                    Err(_) => tracing::warn!("Plotter panicked, measurement kept"),
                }
            }
            None => tracing::debug!("Plotting requested but no plotter is attached"),
        }
    }
}

impl std::fmt::Debug for PlotSink<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlotSink")
            .field("attached", &self.plotter.is_some())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingPlotter;
    use super::*;

    fn trace() -> CorrelationTrace {
        CorrelationTrace::new(vec![0.0; 5], 1.0, 0.0).unwrap()
    }

    #[test]
    fn emits_only_when_enabled() {
        let plotter = RecordingPlotter::default();
        let sink = PlotSink::new(&plotter);

        sink.emit(&WindowParams::default(), &trace(), &[1.0], 2.0);
        assert!(plotter.values().is_empty());

        let params = WindowParams {
            plot: true,
            ..WindowParams::default()
        };
        sink.emit(&params, &trace(), &[1.0], 2.0);
        assert_eq!(plotter.values(), vec![2.0]);
    }

    #[test]
    fn failures_and_missing_plotter_are_swallowed() {
        let params = WindowParams {
            plot: true,
            ..WindowParams::default()
        };
        let plotter = RecordingPlotter::failing();
        PlotSink::new(&plotter).emit(&params, &trace(), &[], f64::NAN);
        PlotSink::disabled().emit(&params, &trace(), &[], f64::NAN);
        assert_eq!(plotter.values().len(), 1);
    }

    struct PanickingPlotter;

    impl WindowPlotter for PanickingPlotter {
        fn plot_window(
            &self,
            _trace: &CorrelationTrace,
            _window: &[f64],
            _value: f64,
        ) -> Result<(), PlotError> {
            panic!("backend crashed");
        }
    }

    #[test]
    fn panicking_plotter_does_not_change_measurement() {
        use crate::measurements::get_functional;
        use crate::models::FunctionalKind;
        use crate::windows::get_window;

        let tr = CorrelationTrace::new(vec![0.0, 1.0, 0.5, -1.0, 0.25], 1.0, 0.0).unwrap();
        let params = WindowParams {
            plot: true,
            ..WindowParams::default()
        };
        let window = get_window(&tr, 1000.0, &params);
        let functional = get_functional(FunctionalKind::Envelope);

        let expected = functional.measure(&tr, &window, 1000.0, &params, &PlotSink::disabled());
        let plotter = PanickingPlotter;
        let got = functional.measure(&tr, &window, 1000.0, &params, &PlotSink::new(&plotter));
        assert_eq!(got, expected);
        assert!(got.is_some());
    }
}
