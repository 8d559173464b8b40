//! Pixel-exact image comparison.
//!
//! The serial sweep is the oracle for the tiled run: both must produce
//! identical bytes for every pixel.
//!
//! # Example
//!
//! ```rust
//! use tileblur_core::{Rgb, RgbImage};
//! use tileblur_ops::compare::{first_mismatch, images_equal};
//!
//! let a = RgbImage::new(3, 3).unwrap();
//! let mut b = a.clone();
//! assert!(images_equal(&a, &b));
//!
//! b.set_pixel(2, 1, Rgb::WHITE);
//! let m = first_mismatch(&a, &b).unwrap();
//! assert_eq!((m.x, m.y), (2, 1));
//! ```

use crate::{OpsError, OpsResult};
use tileblur_core::{Rgb, RgbImage};
#[allow(unused_imports)]
use tracing::{trace, warn};

/// First differing pixel between two images of equal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// Column
    pub x: usize,
    /// Row
    pub y: usize,
    /// Pixel in the first image
    pub left: Rgb,
    /// Pixel in the second image
    pub right: Rgb,
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pixel ({}, {}): {} vs {}", self.x, self.y, self.left, self.right)
    }
}

/// Returns `true` iff both images have the same dimensions and every
/// channel of every pixel matches. Stops at the first difference.
pub fn images_equal(a: &RgbImage, b: &RgbImage) -> bool {
    a.dimensions() == b.dimensions() && a.data() == b.data()
}

/// Locates the first differing pixel in row-major order.
///
/// Returns `None` if the images are equal or have different dimensions;
/// use [`ensure_equal`] to tell those cases apart.
pub fn first_mismatch(a: &RgbImage, b: &RgbImage) -> Option<Mismatch> {
    if a.dimensions() != b.dimensions() {
        return None;
    }
    let width = a.width();
    a.data()
        .iter()
        .zip(b.data())
        .position(|(l, r)| l != r)
        .map(|i| Mismatch {
            x: i % width,
            y: i / width,
            left: a.data()[i],
            right: b.data()[i],
        })
}

/// Fails unless the two images are pixel-identical.
///
/// # Errors
///
/// - [`OpsError::SizeMismatch`] if dimensions differ
/// - [`OpsError::Mismatch`] naming the first differing pixel
pub fn ensure_equal(a: &RgbImage, b: &RgbImage) -> OpsResult<()> {
    trace!(width = a.width(), height = a.height(), "ensure_equal");

    if a.dimensions() != b.dimensions() {
        return Err(OpsError::SizeMismatch(format!(
            "{}x{} vs {}x{}",
            a.width(),
            a.height(),
            b.width(),
            b.height()
        )));
    }
    match first_mismatch(a, b) {
        None => Ok(()),
        Some(m) => {
            warn!(%m, "images differ");
            Err(OpsError::Mismatch { x: m.x, y: m.y })
        }
    }
}
