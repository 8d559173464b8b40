//! # tileblur-core
//!
//! Core types for the tiled Gaussian blur engine.
//!
//! - [`Rgb`] - 8-bit RGB color
//! - [`RgbImage`] - owned, row-major pixel buffer
//! - [`Region`] - half-open rectangle assigned to one worker
//! - [`Error`], [`Result`] - failures while building the above
//!
//! ## Crate Structure
//!
//! ```text
//! tileblur-core (this crate)
//!    ^
//!    |
//!    +-- tileblur-ops (kernel, filter, decomposition, parallel executor)
//!    +-- tileblur-cli (the `tileblur` binary)
//!    +-- tileblur-bench
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;
pub mod region;

pub use error::{Error, Result};
pub use image::RgbImage;
pub use pixel::Rgb;
pub use region::Region;
