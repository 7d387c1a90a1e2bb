//! Windowed energy functionals.
//!
//! The causal ("plus") energy uses the signal window as built; the acausal
//! ("minus") energy uses the same window time-reversed. Energies are
//! trapezoidal integrals of the squared windowed trace.

use crate::models::{CorrelationTrace, WindowParams};
use crate::windows::WindowResult;

use super::plot::PlotSink;
use super::signal::windowed_energy;
use super::types::Measurement;
use super::MeasurementFunctional;

/// Causal and acausal energies scaled by the sample spacing.
fn branch_energies(trace: &CorrelationTrace, window: &WindowResult) -> (f64, f64) {
    let delta = trace.delta();
    let plus = windowed_energy(window.signal.iter(), &trace.data) * delta;
    let minus = windowed_energy(window.signal.iter().rev(), &trace.data) * delta;
    (plus, minus)
}

/// Log energy ratio with the floor used by the power variants.
fn raw_log_ratio(plus: f64, minus: f64) -> f64 {
    (plus / (minus + f64::MIN_POSITIVE)).ln()
}

/// Windowed energy on each branch, `[causal, acausal]`, in sample units.
pub struct Energy;

impl MeasurementFunctional for Energy {
    fn name(&self) -> &'static str {
        "energy"
    }

    fn description(&self) -> &'static str {
        "Windowed energy of the causal and acausal branch"
    }

    fn requires_valid_window(&self) -> bool {
        true
    }

    fn measure(
        &self,
        trace: &CorrelationTrace,
        window: &WindowResult,
        _g_speed: f64,
        params: &WindowParams,
        plot: &PlotSink<'_>,
    ) -> Option<Measurement> {
        if !window.valid {
            return None;
        }

        let causal = windowed_energy(window.signal.iter(), &trace.data);
        plot.emit(params, trace, &window.signal, causal);

        let mirrored: Vec<f64> = window.signal.iter().rev().copied().collect();
        let acausal = windowed_energy(mirrored.iter(), &trace.data);
        plot.emit(params, trace, &mirrored, acausal);

        Some(Measurement::Pair([causal, acausal]))
    }
}

/// `ln(E+ / (E- + waterlevel * E+))`.
///
/// The waterlevel is relative to the causal energy, so the ratio stays
/// bounded above by `1 / waterlevel` when the acausal branch is silent.
pub struct LnEnergyRatio;

impl MeasurementFunctional for LnEnergyRatio {
    fn name(&self) -> &'static str {
        "ln_energy_ratio"
    }

    fn description(&self) -> &'static str {
        "Waterlevel-regularized log ratio of causal to acausal energy"
    }

    fn requires_valid_window(&self) -> bool {
        true
    }

    fn measure(
        &self,
        trace: &CorrelationTrace,
        window: &WindowResult,
        _g_speed: f64,
        params: &WindowParams,
        plot: &PlotSink<'_>,
    ) -> Option<Measurement> {
        if !window.valid {
            return None;
        }

        let (plus, minus) = branch_energies(trace, window);
        let wl = params.waterlevel_perc;
        let msr = (plus / (minus + wl * plus)).ln();
        plot.emit(params, trace, &window.signal, msr);

        Some(Measurement::Scalar(msr))
    }
}

/// `ln(E+ / (E- + tiny))^2`.
///
/// Uses the smallest positive float as the only floor, not the waterlevel.
pub struct LnEnergyRatioSqr;

impl MeasurementFunctional for LnEnergyRatioSqr {
    fn name(&self) -> &'static str {
        "ln_energy_ratio_sqr"
    }

    fn description(&self) -> &'static str {
        "Squared log ratio of causal to acausal energy"
    }

    fn requires_valid_window(&self) -> bool {
        true
    }

    fn measure(
        &self,
        trace: &CorrelationTrace,
        window: &WindowResult,
        _g_speed: f64,
        params: &WindowParams,
        plot: &PlotSink<'_>,
    ) -> Option<Measurement> {
        if !window.valid {
            return None;
        }

        let (plus, minus) = branch_energies(trace, window);
        let msr = raw_log_ratio(plus, minus).powi(2);
        plot.emit(params, trace, &window.signal, msr);

        Some(Measurement::Scalar(msr))
    }
}

/// `ln(E+ / (E- + tiny))^3`, keeping the sign of the log ratio.
pub struct LnEnergyRatioCube;

impl MeasurementFunctional for LnEnergyRatioCube {
    fn name(&self) -> &'static str {
        "ln_energy_ratio_cube"
    }

    fn description(&self) -> &'static str {
        "Cubed log ratio of causal to acausal energy"
    }

    fn requires_valid_window(&self) -> bool {
        true
    }

    fn measure(
        &self,
        trace: &CorrelationTrace,
        window: &WindowResult,
        _g_speed: f64,
        params: &WindowParams,
        plot: &PlotSink<'_>,
    ) -> Option<Measurement> {
        if !window.valid {
            return None;
        }

        let (plus, minus) = branch_energies(trace, window);
        let msr = raw_log_ratio(plus, minus).powi(3);
        plot.emit(params, trace, &window.signal, msr);

        Some(Measurement::Scalar(msr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurements::plot::testing::RecordingPlotter;
    use crate::windows::WindowBounds;

    /// 11-sample trace, zero lag at 5, boxcar window on samples 7..10.
    fn setup(causal: f64, acausal: f64, fs: f64) -> (CorrelationTrace, WindowResult) {
        let mut data = vec![0.0; 11];
        for i in 7..10 {
            data[i] = causal;
            data[10 - i] = acausal;
        }
        let trace = CorrelationTrace::new(data, fs, 0.0).unwrap();

        let mut signal = vec![0.0; 11];
        signal[7..10].fill(1.0);
        let window = WindowResult {
            signal,
            noise: vec![0.0; 11],
            valid: true,
            bounds: WindowBounds::new(7, 10, 10, 11),
        };
        (trace, window)
    }

    fn measure(
        functional: &dyn MeasurementFunctional,
        trace: &CorrelationTrace,
        window: &WindowResult,
        params: &WindowParams,
    ) -> Option<Measurement> {
        functional.measure(trace, window, 3000.0, params, &PlotSink::disabled())
    }

    #[test]
    fn energy_integrates_each_branch() {
        let (tr, win) = setup(2.0, 1.0, 1.0);
        let out = measure(&Energy, &tr, &win, &WindowParams::default()).unwrap();
        // squared causal: [.., 0, 4, 4, 4, 0] -> trapz = 2 + 4 + 4 + 2 = 12
        assert_eq!(out, Measurement::Pair([12.0, 3.0]));
    }

    #[test]
    fn ln_ratio_of_equal_energies_is_waterlevel_term() {
        let params = WindowParams::default();
        for (amplitude, wl) in [(1.0, 0.0), (0.3, 0.05), (7.5, 0.5)] {
            let (tr, win) = setup(amplitude, amplitude, 4.0);
            let params = params.clone().with_waterlevel(wl);
            let msr = measure(&LnEnergyRatio, &tr, &win, &params)
                .and_then(|m| m.as_scalar())
                .unwrap();
            let expected = (1.0 / (1.0 + wl)).ln();
            assert!(
                (msr - expected).abs() < 1e-12,
                "amplitude {}, wl {}: {} vs {}",
                amplitude,
                wl,
                msr,
                expected
            );
        }
    }

    #[test]
    fn ln_ratio_sign_follows_dominant_branch() {
        let (tr, win) = setup(2.0, 1.0, 1.0);
        let msr = measure(&LnEnergyRatio, &tr, &win, &WindowParams::default())
            .and_then(|m| m.as_scalar())
            .unwrap();
        assert!((msr - 4.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn power_variants_use_raw_ratio() {
        // Waterlevel must not enter the power variants.
        let params = WindowParams::default().with_waterlevel(0.5);
        let (tr, win) = setup(1.0, 2.0, 1.0);
        let raw = (1.0f64 / 4.0).ln();

        let sqr = measure(&LnEnergyRatioSqr, &tr, &win, &params)
            .and_then(|m| m.as_scalar())
            .unwrap();
        let cube = measure(&LnEnergyRatioCube, &tr, &win, &params)
            .and_then(|m| m.as_scalar())
            .unwrap();

        assert!((sqr - raw.powi(2)).abs() < 1e-12);
        assert!((cube - raw.powi(3)).abs() < 1e-12);
        assert!(cube < 0.0);
    }

    #[test]
    fn silent_acausal_branch_stays_finite_for_powers() {
        let (tr, win) = setup(1.0, 0.0, 1.0);
        let sqr = measure(&LnEnergyRatioSqr, &tr, &win, &WindowParams::default())
            .and_then(|m| m.as_scalar())
            .unwrap();
        assert!(sqr.is_finite());
        assert!(sqr > 0.0);
    }

    #[test]
    fn invalid_window_gives_none() {
        let (tr, _) = setup(1.0, 1.0, 1.0);
        let invalid = WindowResult::invalid(11, WindowBounds::default());
        let params = WindowParams::default();
        assert!(measure(&Energy, &tr, &invalid, &params).is_none());
        assert!(measure(&LnEnergyRatio, &tr, &invalid, &params).is_none());
        assert!(measure(&LnEnergyRatioSqr, &tr, &invalid, &params).is_none());
        assert!(measure(&LnEnergyRatioCube, &tr, &invalid, &params).is_none());
    }

    #[test]
    fn energy_plots_each_branch() {
        let (tr, win) = setup(2.0, 1.0, 1.0);
        let plotter = RecordingPlotter::default();
        let params = WindowParams {
            plot: true,
            ..WindowParams::default()
        };
        Energy.measure(&tr, &win, 3000.0, &params, &PlotSink::new(&plotter));

        assert_eq!(plotter.values(), vec![12.0, 3.0]);
        let calls = plotter.calls.lock().unwrap();
        assert_eq!(calls[1].0[1], 1.0);
    }
}
