//! Per-pixel Gaussian filtering.
//!
//! [`filter_pixel`] computes one output pixel from the `(2r+1)²`
//! neighborhood of the source image, using clamp-to-edge sampling.
//! It reads only the source image and kernel, so any number of workers may
//! call it concurrently on the same source.
//!
//! [`blur_serial`] is the single-threaded reference sweep over every pixel.
//!
//! # Example
//!
//! ```rust
//! use tileblur_core::{Rgb, RgbImage};
//! use tileblur_ops::filter::{blur_serial, filter_pixel};
//! use tileblur_ops::kernel::GaussianKernel;
//!
//! let src = RgbImage::filled(8, 8, Rgb::gray(100)).unwrap();
//! let kernel = GaussianKernel::new(1, 1.0).unwrap();
//! let px = filter_pixel(&src, &kernel, 0, 0);
//! let out = blur_serial(&src, &kernel);
//! assert_eq!(out.pixel(0, 0), px);
//! ```

use crate::kernel::GaussianKernel;
use tileblur_core::{Rgb, RgbImage};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Computes the filtered color of the pixel at column `x`, row `y`.
///
/// For every kernel offset `(di, dj)` the source is sampled at
/// `(clamp(x + dj), clamp(y + di))`; the weighted channel sums are
/// accumulated in `f32` in a fixed order (row offset outer, column offset
/// inner) and converted back with [`Rgb::from_f32_truncated`].
///
/// The result depends only on `(src, kernel, x, y)`, which is what makes
/// any tiling of the output produce bit-identical images.
#[inline]
pub fn filter_pixel(src: &RgbImage, kernel: &GaussianKernel, x: usize, y: usize) -> Rgb {
    let r = kernel.radius() as isize;
    let (cx, cy) = (x as isize, y as isize);
    let mut sums = [0.0f32; 3];

    for di in -r..=r {
        for dj in -r..=r {
            let px = src.pixel_clamped(cx + dj, cy + di).to_f32();
            let w = kernel.weight(di, dj);
            sums[0] += px[0] * w;
            sums[1] += px[1] * w;
            sums[2] += px[2] * w;
        }
    }

    Rgb::from_f32_truncated(sums)
}

/// Filters a horizontal run of pixels on row `y`, starting at column `x0`.
///
/// `out[i]` receives the filtered pixel at column `x0 + i`.
#[inline]
pub fn filter_span(src: &RgbImage, kernel: &GaussianKernel, y: usize, x0: usize, out: &mut [Rgb]) {
    for (i, px) in out.iter_mut().enumerate() {
        *px = filter_pixel(src, kernel, x0 + i, y);
    }
}

/// Blurs the whole image on the calling thread.
///
/// Returns a new buffer with the same dimensions; `src` is untouched.
pub fn blur_serial(src: &RgbImage, kernel: &GaussianKernel) -> RgbImage {
    trace!(width = src.width(), height = src.height(), radius = kernel.radius(), "blur_serial");

    let width = src.width();
    let mut dst = src.blank_like();
    for (y, row) in dst.data_mut().chunks_exact_mut(width).enumerate() {
        filter_span(src, kernel, y, 0, row);
    }
    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: usize, height: usize) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb::new((x * 17 % 256) as u8, (y * 29 % 256) as u8, ((x + y) * 7 % 256) as u8)
        })
        .unwrap()
    }

    #[test]
    fn test_zero_image_stays_zero() {
        let src = RgbImage::new(4, 4).unwrap();
        let kernel = GaussianKernel::new(1, 1.0).unwrap();
        let out = blur_serial(&src, &kernel);
        assert!(out.data().iter().all(|&p| p == Rgb::BLACK));
    }

    #[test]
    fn test_radius_zero_copies_source() {
        let src = gradient(7, 5);
        let kernel = GaussianKernel::new(0, 3.0).unwrap();
        assert_eq!(blur_serial(&src, &kernel), src);
    }

    #[test]
    fn test_single_pixel_image() {
        let src = RgbImage::filled(1, 1, Rgb::new(200, 100, 50)).unwrap();
        for radius in [0, 1, 4] {
            let kernel = GaussianKernel::new(radius, 2.0).unwrap();
            let px = filter_pixel(&src, &kernel, 0, 0);
            // truncation may drop at most one unit per channel
            assert!(px.r >= 199 && px.g >= 99 && px.b >= 49, "{px}");
        }
    }

    #[test]
    fn test_output_within_neighborhood_range() {
        let src = gradient(9, 6);
        let kernel = GaussianKernel::new(2, 1.5).unwrap();
        let out = blur_serial(&src, &kernel);
        for (x, y, px) in out.pixels() {
            let mut max = [0u8; 3];
            for di in -2isize..=2 {
                for dj in -2isize..=2 {
                    let s = src.pixel_clamped(x as isize + dj, y as isize + di).to_array();
                    for c in 0..3 {
                        max[c] = max[c].max(s[c]);
                    }
                }
            }
            let got = px.to_array();
            for c in 0..3 {
                assert!(got[c] <= max[c], "({x}, {y}) channel {c}: {} > {}", got[c], max[c]);
            }
        }
    }

    #[test]
    fn test_asymmetric_kernel_orientation() {
        // Bright column at x = 0 only: its influence must fall off along x, not y.
        let src = RgbImage::from_fn(5, 5, |x, _| if x == 0 { Rgb::WHITE } else { Rgb::BLACK }).unwrap();
        let kernel = GaussianKernel::new(1, 1.0).unwrap();
        let out = blur_serial(&src, &kernel);
        for y in 0..5 {
            assert_eq!(out.pixel(0, y), out.pixel(0, 2));
            assert!(out.pixel(1, y).r > 0);
            assert_eq!(out.pixel(2, y), Rgb::BLACK);
        }
    }

    #[test]
    fn test_span_matches_pixel() {
        let src = gradient(6, 4);
        let kernel = GaussianKernel::new(1, 0.8).unwrap();
        let mut span = vec![Rgb::BLACK; 3];
        filter_span(&src, &kernel, 2, 3, &mut span);
        for (i, px) in span.iter().enumerate() {
            assert_eq!(*px, filter_pixel(&src, &kernel, 3 + i, 2));
        }
    }
}
