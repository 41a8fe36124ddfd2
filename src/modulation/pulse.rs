//! Shared waveform primitives for the carrier modulation schemes.

use std::f64::consts::PI;

pub fn sinusoid(freq_hz: f64, sample_rate: f64, n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| (2.0 * PI * freq_hz * i as f64 / sample_rate).sin())
        .collect()
}

pub fn cosinusoid(freq_hz: f64, sample_rate: f64, n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| (2.0 * PI * freq_hz * i as f64 / sample_rate).cos())
        .collect()
}

/// Inner product of two equal-length signals, used both as a matched-filter
/// correlator and (when correlated against itself) a template energy.
pub fn correlate(signal: &[f64], template: &[f64]) -> f64 {
    signal.iter().zip(template).map(|(a, b)| a * b).sum()
}

pub fn energy(signal: &[f64]) -> f64 {
    signal.iter().map(|s| s * s).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sinusoid_and_cosinusoid_are_quarter_cycle_apart() {
        let s = sinusoid(5000.0, 50_000.0, 10);
        let c = cosinusoid(5000.0, 50_000.0, 10);
        assert!((s[0] - 0.0).abs() < 1e-9);
        assert!((c[0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn correlate_of_orthogonal_signals_is_near_zero() {
        let sin_t = sinusoid(5000.0, 50_000.0, 50);
        let cos_t = cosinusoid(5000.0, 50_000.0, 50);
        assert!(correlate(&sin_t, &cos_t).abs() < 1e-6);
    }
}
