//! Serial vs. tiled equivalence tests for tileblur-ops.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tileblur_core::{Region, Rgb, RgbImage};
use tileblur_ops::{
    blur_parallel, blur_serial, decompose, ensure_equal, first_mismatch, images_equal,
    run_parallel, GaussianKernel,
};

fn random_image(width: usize, height: usize, seed: u64) -> RgbImage {
    let mut rng = StdRng::seed_from_u64(seed);
    RgbImage::from_fn(width, height, |_, _| Rgb::new(rng.random(), rng.random(), rng.random()))
        .unwrap()
}

#[test]
fn test_decomposition_tiles_image() {
    for width in 1..=13 {
        for height in 1..=11 {
            for workers in 1..=16 {
                let d = decompose(width, height, workers).unwrap();
                assert_eq!(d.len(), workers);
                assert_eq!(d.row_lengths().iter().sum::<usize>(), height);
                assert_eq!(d.col_lengths().iter().sum::<usize>(), width);

                // every pixel owned by exactly one region
                for y in 0..height {
                    for x in 0..width {
                        let owners = d.iter().filter(|r| r.contains(x, y)).count();
                        assert_eq!(owners, 1, "{width}x{height}/{workers} at ({x}, {y})");
                    }
                }
                assert!(d.covers_exactly());
            }
        }
    }
}

#[test]
fn test_decomposition_is_deterministic() {
    let a = decompose(3123, 4967, 4).unwrap();
    let b = decompose(3123, 4967, 4).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.row_lengths(), &[2484, 2483]);
    assert_eq!(a.col_lengths(), &[1562, 1561]);
    assert_eq!(a.regions()[3], Region::new(1562, 2484, 1561, 2483));
}

#[test]
fn test_parallel_equals_serial_on_random_images() {
    let cases = [
        (1, 1, 0, 1.0, 1),
        (1, 1, 3, 2.0, 4),
        (17, 9, 1, 6.0, 4),
        (33, 20, 2, 1.5, 6),
        (50, 7, 3, 0.7, 5),
        (7, 50, 1, 3.0, 8),
        (64, 64, 4, 2.5, 9),
    ];
    for (i, &(width, height, radius, sigma, workers)) in cases.iter().enumerate() {
        let src = random_image(width, height, i as u64);
        let kernel = GaussianKernel::new(radius, sigma).unwrap();
        let serial = blur_serial(&src, &kernel);
        let parallel = blur_parallel(&src, &kernel, workers).unwrap();
        assert!(
            images_equal(&serial, &parallel),
            "case {i}: first mismatch {:?}",
            first_mismatch(&serial, &parallel)
        );
    }
}

#[test]
fn test_result_independent_of_worker_count() {
    let src = random_image(41, 29, 7);
    let kernel = GaussianKernel::new(2, 2.0).unwrap();
    let reference = blur_parallel(&src, &kernel, 1).unwrap();
    for workers in 2..=12 {
        let d = decompose(src.width(), src.height(), workers).unwrap();
        let out = run_parallel(&src, &d, &kernel).unwrap();
        ensure_equal(&reference, &out).unwrap();
    }
}

#[test]
fn test_zero_image_blur() {
    let src = RgbImage::new(4, 4).unwrap();
    let kernel = GaussianKernel::new(1, 1.0).unwrap();
    let serial = blur_serial(&src, &kernel);
    let parallel = blur_parallel(&src, &kernel, 4).unwrap();
    assert!(serial.data().iter().all(|&p| p == Rgb::BLACK));
    assert!(images_equal(&serial, &parallel));
}

#[test]
fn test_blur_smooths_noise() {
    let src = random_image(32, 32, 99);
    let kernel = GaussianKernel::new(2, 2.0).unwrap();
    let out = blur_parallel(&src, &kernel, 4).unwrap();

    let variance = |img: &RgbImage| {
        let n = img.pixel_count() as f64;
        let mean = img.data().iter().map(|p| p.r as f64).sum::<f64>() / n;
        img.data().iter().map(|p| (p.r as f64 - mean).powi(2)).sum::<f64>() / n
    };
    assert!(variance(&out) < variance(&src) / 2.0);
}
