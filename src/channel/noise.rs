//! Seedable AWGN channel. A [`Channel`] owns its own RNG so a simulation
//! run can be made reproducible end to end by fixing the seed, or left to
//! draw fresh entropy per run.

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

pub struct Channel {
    rng: StdRng,
}

impl Channel {
    pub fn new(seed: u64) -> Self {
        Channel { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        Channel { rng: StdRng::seed_from_u64(seed) }
    }

    /// Add zero-mean Gaussian noise with standard deviation `sigma` to each
    /// sample. `sigma <= 0.0` is treated as a noiseless channel.
    pub fn add_noise(&mut self, samples: &[f64], sigma: f64) -> Vec<f64> {
        if sigma <= 0.0 {
            return samples.to_vec();
        }
        let normal = Normal::new(0.0, sigma).expect("sigma must be finite and non-negative");
        let noisy: Vec<f64> = samples.iter().map(|&s| s + normal.sample(&mut self.rng)).collect();
        tracing::debug!(sigma, samples = samples.len(), "applied channel noise");
        noisy
    }
}
