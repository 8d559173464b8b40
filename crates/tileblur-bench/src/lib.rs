//! Shared fixtures for tileblur benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tileblur_core::{Result, Rgb, RgbImage};

/// Seed used for every benchmark image.
pub const BENCH_SEED: u64 = 0x7111_b1;

/// Random RGB image, identical across runs.
pub fn random_image(width: usize, height: usize) -> Result<RgbImage> {
    let mut rng = StdRng::seed_from_u64(BENCH_SEED);
    RgbImage::from_fn(width, height, |_, _| Rgb::new(rng.random(), rng.random(), rng.random()))
}
