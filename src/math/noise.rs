//! Deterministic noise sources
//!
//! Two sources feed the modulation and erosion stages:
//! - a stateless sine hash keyed by a real-valued seed, used by the
//!   sample-and-hold waveforms
//! - a seeded 2D coherent noise field, used by erosion

use crate::io::configuration::{
    HASH_MULTIPLIER, NOISE_FREQUENCY, NOISE_LACUNARITY, NOISE_OCTAVES, NOISE_PERSISTENCE,
};
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

/// Fractional part of `x`, always in `[0, 1)`
pub fn fract(x: f64) -> f64 {
    x - x.floor()
}

/// Stateless hash of `seed` into `[0, 1)`
///
/// `fract(sin(seed) * 43758.5453)`. Pure, so identical seeds give
/// bit-identical results across render passes and process runs.
pub fn pseudo_random_hash(seed: f64) -> f64 {
    let value = fract(seed.sin() * HASH_MULTIPLIER);
    // Guard the float edge where fract rounds up to exactly 1.0
    if value >= 1.0 { 0.0 } else { value }
}

/// Seeded 2D coherent noise in `[0, 1]`
///
/// Wraps a fractal Brownian motion over Perlin gradients. Re-seeding with
/// the same value reproduces the same field exactly.
#[derive(Clone, Debug)]
pub struct CoherentNoise {
    seed: u32,
    field: Fbm<Perlin>,
}

impl CoherentNoise {
    /// Build a noise field for the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            field: Self::build_field(seed),
        }
    }

    /// Rebuild the field from `seed`
    pub fn reseed(&mut self, seed: u32) {
        self.seed = seed;
        self.field = Self::build_field(seed);
    }

    /// Seed the field was built from
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Sample the field at `(x, y)`
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let raw = self.field.get([x, y]);
        if raw.is_finite() {
            (raw.mul_add(0.5, 0.5)).clamp(0.0, 1.0)
        } else {
            0.5
        }
    }

    fn build_field(seed: u32) -> Fbm<Perlin> {
        Fbm::<Perlin>::new(seed)
            .set_octaves(NOISE_OCTAVES)
            .set_frequency(NOISE_FREQUENCY)
            .set_lacunarity(NOISE_LACUNARITY)
            .set_persistence(NOISE_PERSISTENCE)
    }
}
