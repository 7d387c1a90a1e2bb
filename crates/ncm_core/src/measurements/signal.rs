//! Signal helpers shared by the measurement functionals.

use rustfft::{num_complex::Complex, FftPlanner};

/// Analytic signal of a real sequence, computed with the FFT.
///
/// Positive frequencies are doubled and negative ones removed, so the real
/// part reproduces the input and the imaginary part is its Hilbert
/// transform.
pub fn analytic_signal(samples: &[f64]) -> Vec<Complex<f64>> {
    let n = samples.len();
    if n == 0 {
        return Vec::new();
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);
    let ifft = planner.plan_fft_inverse(n);

    let mut spectrum: Vec<Complex<f64>> =
        samples.iter().map(|&x| Complex::new(x, 0.0)).collect();
    fft.process(&mut spectrum);

    // Weights: DC (and Nyquist for even n) kept once, positive bins doubled.
    let half = n / 2;
    for (k, bin) in spectrum.iter_mut().enumerate() {
        let h = if k == 0 || (n % 2 == 0 && k == half) {
            1.0
        } else if k < (n + 1) / 2 {
            2.0
        } else {
            0.0
        };
        *bin *= h;
    }

    ifft.process(&mut spectrum);

    let scale = 1.0 / n as f64;
    spectrum.iter().map(|&c| c * scale).collect()
}

/// Imaginary part of the analytic signal.
pub fn hilbert_imag(samples: &[f64]) -> Vec<f64> {
    analytic_signal(samples).iter().map(|c| c.im).collect()
}

/// Trapezoidal integral with unit sample spacing.
pub fn trapz(samples: &[f64]) -> f64 {
    samples.windows(2).map(|w| 0.5 * (w[0] + w[1])).sum()
}

/// Trapezoidal integral of `(weights * data)^2`.
pub fn windowed_energy<'a, I>(weights: I, data: &[f64]) -> f64
where
    I: IntoIterator<Item = &'a f64>,
{
    let squared: Vec<f64> = weights
        .into_iter()
        .zip(data)
        .map(|(w, x)| (w * x).powi(2))
        .collect();
    trapz(&squared)
}
