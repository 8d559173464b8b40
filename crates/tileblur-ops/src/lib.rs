//! # tileblur-ops
//!
//! Gaussian blur of RGB images, serial and tiled-parallel.
//!
//! # Modules
//!
//! - [`kernel`] - Normalized Gaussian kernel
//! - [`filter`] - Clamp-to-edge pixel filter and the serial sweep
//! - [`decompose`] - Splitting an image into one region per worker
//! - [`parallel`] - One thread per region, joined before returning
//! - [`compare`] - Pixel-exact equivalence check
//!
//! # Example
//!
//! ```rust
//! use tileblur_core::{Rgb, RgbImage};
//! use tileblur_ops::{blur_serial, decompose, ensure_equal, run_parallel, GaussianKernel};
//!
//! let src = RgbImage::from_fn(40, 30, |x, y| Rgb::new((x * 6) as u8, (y * 8) as u8, 90)).unwrap();
//! let kernel = GaussianKernel::new(1, 6.0).unwrap();
//!
//! let serial = blur_serial(&src, &kernel);
//! let tiles = decompose(src.width(), src.height(), 4).unwrap();
//! let parallel = run_parallel(&src, &tiles, &kernel).unwrap();
//!
//! ensure_equal(&serial, &parallel).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod compare;
pub mod decompose;
pub mod filter;
pub mod kernel;
pub mod parallel;

pub use compare::{ensure_equal, first_mismatch, images_equal, Mismatch};
pub use decompose::{decompose, Decomposition, TileMut, MAX_WORKERS};
pub use error::{OpsError, OpsResult};
pub use filter::{blur_serial, filter_pixel};
pub use kernel::{build_kernel, GaussianKernel};
pub use parallel::{blur_parallel, run_parallel};
