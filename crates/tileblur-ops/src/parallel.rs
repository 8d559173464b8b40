//! Tiled parallel blur using Rayon.
//!
//! Each region of a [`Decomposition`] is handed, as an owned [`TileMut`], to
//! its own task on a dedicated pool with exactly one thread per region. All
//! tasks are spawned inside a single scope and joined when it ends, so the
//! output is complete once [`run_parallel`] returns.
//!
//! The source image and kernel are shared read-only. The output buffer is
//! split into disjoint tiles up front, so workers never write the same cell
//! and no locking is involved. Because every output pixel is produced by the
//! same [`filter_pixel`](crate::filter::filter_pixel) call as in the serial sweep, the result is
//! bit-identical to [`blur_serial`](crate::filter::blur_serial) for any
//! worker count.
//!
//! # Example
//!
//! ```rust
//! use tileblur_core::{Rgb, RgbImage};
//! use tileblur_ops::parallel::blur_parallel;
//! use tileblur_ops::filter::blur_serial;
//! use tileblur_ops::kernel::GaussianKernel;
//!
//! let src = RgbImage::from_fn(64, 48, |x, y| Rgb::new(x as u8, y as u8, 7)).unwrap();
//! let kernel = GaussianKernel::new(2, 1.5).unwrap();
//! let par = blur_parallel(&src, &kernel, 4).unwrap();
//! assert_eq!(par, blur_serial(&src, &kernel));
//! ```

use crate::decompose::{Decomposition, TileMut};
use crate::filter::filter_span;
use crate::kernel::GaussianKernel;
use crate::{OpsError, OpsResult};
use tileblur_core::RgbImage;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Blurs `src` with one worker thread per region of `decomposition`.
///
/// Returns a new image with the same dimensions as `src`.
///
/// # Errors
///
/// - [`OpsError::SizeMismatch`] if the decomposition was built for other dimensions
/// - [`OpsError::ThreadPool`] if the worker threads cannot be started
pub fn run_parallel(
    src: &RgbImage,
    decomposition: &Decomposition,
    kernel: &GaussianKernel,
) -> OpsResult<RgbImage> {
    trace!(
        width = src.width(),
        height = src.height(),
        workers = decomposition.len(),
        radius = kernel.radius(),
        "run_parallel"
    );

    if src.dimensions() != (decomposition.width(), decomposition.height()) {
        return Err(OpsError::SizeMismatch(format!(
            "image is {}x{}, decomposition was built for {}x{}",
            src.width(),
            src.height(),
            decomposition.width(),
            decomposition.height()
        )));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(decomposition.len())
        .thread_name(|i| format!("tileblur-worker-{i}"))
        .build()
        .map_err(|e| OpsError::ThreadPool(e.to_string()))?;

    let mut dst = src.blank_like();
    let tiles = decomposition.split_mut(dst.data_mut())?;

    // fan out one task per tile, join at scope end
    pool.scope(|s| {
        for (worker, tile) in tiles.into_iter().enumerate() {
            s.spawn(move |_| {
                debug!(worker, region = %tile.region(), "filtering tile");
                filter_tile(src, kernel, tile);
            });
        }
    });

    Ok(dst)
}

/// Decomposes `src` for `workers` workers and runs [`run_parallel`].
///
/// # Errors
///
/// Same as [`Decomposition::new`] and [`run_parallel`].
pub fn blur_parallel(src: &RgbImage, kernel: &GaussianKernel, workers: usize) -> OpsResult<RgbImage> {
    let decomposition = Decomposition::new(src.width(), src.height(), workers)?;
    run_parallel(src, &decomposition, kernel)
}

/// Fills every cell of `tile` with the filtered source pixel.
///
/// This is the body each worker runs. Empty tiles do nothing.
pub fn filter_tile(src: &RgbImage, kernel: &GaussianKernel, mut tile: TileMut<'_>) {
    if tile.is_empty() {
        return;
    }
    let region = tile.region();
    for (dy, row) in tile.rows_mut().iter_mut().enumerate() {
        filter_span(src, kernel, region.y + dy, region.x, row);
    }
}
