//! CLI command implementations

pub mod compare;
pub mod kernel;
pub mod tiles;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};
use tileblur_core::{Rgb, RgbImage};

/// Fills a new image with uniformly random channels in `[0, 255]`.
pub fn random_image(width: usize, height: usize, seed: u64) -> Result<RgbImage> {
    let mut rng = StdRng::seed_from_u64(seed);
    RgbImage::from_fn(width, height, |_, _| {
        Rgb::new(rng.random(), rng.random(), rng.random())
    })
    .with_context(|| format!("Failed to allocate {width}x{height} source image"))
}

/// Runs `f` `runs` times and keeps the output of the fastest run.
pub fn time_best<T, F>(runs: usize, mut f: F) -> Result<(T, Duration)>
where
    F: FnMut() -> Result<T>,
{
    let mut best: Option<(T, Duration)> = None;
    for _ in 0..runs {
        let start = Instant::now();
        let out = f()?;
        let elapsed = start.elapsed();
        if best.as_ref().is_none_or(|(_, d)| elapsed < *d) {
            best = Some((out, elapsed));
        }
    }
    best.context("--runs must be at least 1")
}

/// Formats a duration as milliseconds.
pub fn format_ms(d: Duration) -> String {
    format!("{:.3} (ms)", d.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_image_is_seeded() {
        let a = random_image(16, 9, 42).unwrap();
        let b = random_image(16, 9, 42).unwrap();
        let c = random_image(16, 9, 43).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(random_image(0, 9, 1).is_err());
    }

    #[test]
    fn test_time_best() {
        let mut calls = 0;
        let (out, _) = time_best(3, || {
            calls += 1;
            Ok(calls)
        })
        .unwrap();
        assert_eq!(calls, 3);
        assert!((1..=3).contains(&out));
        assert!(time_best(0, || Ok(())).is_err());
    }

    #[test]
    fn test_format_ms() {
        assert_eq!(format_ms(Duration::from_micros(1500)), "1.500 (ms)");
    }
}
