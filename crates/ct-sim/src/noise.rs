//! Injectable uniform-noise source for the physical model.
//!
//! The engine never calls a global RNG; noise comes in through this trait so
//! runs are deterministically reproducible from a seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform random draws in `[0, 1)`.
pub trait NoiseSource {
    fn unit(&mut self) -> f64;

    /// Symmetric draw in `[-half_range, +half_range]`.
    fn symmetric(&mut self, half_range: f64) -> f64 {
        (self.unit() - 0.5) * 2.0 * half_range
    }
}

/// Seedable production noise source (ChaCha8).
#[derive(Debug, Clone)]
pub struct SeededNoise {
    rng: ChaCha8Rng,
}

impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed from the OS entropy pool.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl NoiseSource for SeededNoise {
    fn unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Noise-free fixture: every draw is the midpoint, so symmetric noise is
/// exactly zero. Used by tests that need pinned temperatures.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn unit(&mut self) -> f64 {
        0.5
    }
}
