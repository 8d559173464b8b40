//! Gaussian convolution kernel.
//!
//! A square kernel of side `2 * radius + 1` with weights
//! `exp(-(di² + dj²) / sigma²)`, normalized so that they sum to 1.
//!
//! # Example
//!
//! ```rust
//! use tileblur_ops::kernel::GaussianKernel;
//!
//! let k = GaussianKernel::new(1, 6.0).unwrap();
//! assert_eq!(k.side(), 3);
//! assert!((k.sum() - 1.0).abs() < 1e-5);
//! assert!(k.weight(0, 0) > k.weight(1, 1));
//! ```

use crate::{OpsError, OpsResult};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Normalized 2D Gaussian kernel.
///
/// Built once and read-only afterwards; shared by reference across workers.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel {
    radius: usize,
    sigma: f32,
    side: usize,
    /// Row-major `side × side`; offset `(di, dj)` at `(di + radius) * side + (dj + radius)`.
    weights: Vec<f32>,
}

impl GaussianKernel {
    /// Builds a normalized kernel.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidParameter`] if `sigma` is not a positive finite
    /// number, or if `radius` is too large to address.
    pub fn new(radius: usize, sigma: f32) -> OpsResult<Self> {
        trace!(radius, sigma, "GaussianKernel::new");

        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(OpsError::InvalidParameter(format!(
                "sigma must be a positive finite number, got {sigma}"
            )));
        }
        let too_large = || OpsError::InvalidParameter(format!("radius {radius} is too large"));
        let side = radius
            .checked_mul(2)
            .and_then(|v| v.checked_add(1))
            .ok_or_else(too_large)?;
        // weight buffer must stay within isize::MAX bytes
        let len = side
            .checked_mul(side)
            .filter(|&n| {
                n.checked_mul(std::mem::size_of::<f32>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or_else(too_large)?;

        let mut weights = Vec::new();
        weights.try_reserve_exact(len).map_err(|e| {
            OpsError::InvalidParameter(format!("radius {radius}: cannot allocate kernel ({e})"))
        })?;

        let r = radius as isize;
        let sigma2 = sigma * sigma;
        let mut sum = 0.0f32;

        for di in -r..=r {
            for dj in -r..=r {
                let d = (di * di + dj * dj) as f32;
                let w = (-d / sigma2).exp();
                weights.push(w);
                sum += w;
            }
        }

        // Normalize
        for w in &mut weights {
            *w /= sum;
        }

        debug!(radius, sigma, side, "built gaussian kernel");
        Ok(Self {
            radius,
            sigma,
            side,
            weights,
        })
    }

    /// Kernel radius (half-width excluding the center).
    #[inline]
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Standard deviation used to build the kernel.
    #[inline]
    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    /// Side length, `2 * radius + 1`.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// All weights, row-major.
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Weight for row offset `di` and column offset `dj`, both in `[-radius, radius]`.
    ///
    /// # Panics
    ///
    /// Panics if an offset lies outside the kernel.
    #[inline]
    pub fn weight(&self, di: isize, dj: isize) -> f32 {
        let r = self.radius as isize;
        debug_assert!(di.abs() <= r && dj.abs() <= r, "kernel offset out of range");
        self.weights[(di + r) as usize * self.side + (dj + r) as usize]
    }

    /// Sum of all weights, accumulated in `f64`.
    pub fn sum(&self) -> f64 {
        self.weights.iter().map(|&w| w as f64).sum()
    }
}

/// Builds a normalized Gaussian kernel; see [`GaussianKernel::new`].
pub fn build_kernel(radius: usize, sigma: f32) -> OpsResult<GaussianKernel> {
    GaussianKernel::new(radius, sigma)
}
