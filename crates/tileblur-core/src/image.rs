//! Owned RGB image buffer.
//!
//! [`RgbImage`] stores pixels row-major: the pixel at column `x`, row `y`
//! lives at `y * width + x`. Each run (serial or parallel) owns its own
//! output buffer; buffers are never shared between runs.
//!
//! # Example
//!
//! ```rust
//! use tileblur_core::{Rgb, RgbImage};
//!
//! let mut img = RgbImage::new(4, 3).unwrap();
//! img.set_pixel(1, 2, Rgb::new(10, 20, 30));
//! assert_eq!(img.pixel(1, 2), Rgb::new(10, 20, 30));
//! assert_eq!(img.pixel_clamped(-5, 99), img.pixel(0, 2));
//! ```

use crate::error::{Error, Result};
use crate::pixel::Rgb;
use crate::region::Region;

/// Row-major RGB pixel buffer with fixed, non-zero dimensions.
#[derive(Clone, PartialEq, Eq)]
pub struct RgbImage {
    data: Vec<Rgb>,
    width: usize,
    height: usize,
}

impl RgbImage {
    /// Creates a black image.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] if either dimension is zero or the pixel
    /// count overflows.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::filled(width, height, Rgb::BLACK)
    }

    /// Creates an image with every pixel set to `pixel`.
    pub fn filled(width: usize, height: usize, pixel: Rgb) -> Result<Self> {
        let count = checked_pixel_count(width, height)?;
        Ok(Self {
            data: vec![pixel; count],
            width,
            height,
        })
    }

    /// Creates an image from existing row-major pixel data.
    ///
    /// # Errors
    ///
    /// [`Error::DataLength`] if `data.len() != width * height`.
    ///
    /// ```rust
    /// use tileblur_core::{Rgb, RgbImage};
    ///
    /// let img = RgbImage::from_data(2, 1, vec![Rgb::BLACK, Rgb::WHITE]).unwrap();
    /// assert_eq!(img.pixel(1, 0), Rgb::WHITE);
    /// assert!(RgbImage::from_data(2, 2, vec![Rgb::BLACK]).is_err());
    /// ```
    pub fn from_data(width: usize, height: usize, data: Vec<Rgb>) -> Result<Self> {
        let expected = checked_pixel_count(width, height)?;
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates an image by evaluating `f(x, y)` for every pixel in row-major order.
    ///
    /// ```rust
    /// use tileblur_core::{Rgb, RgbImage};
    ///
    /// let img = RgbImage::from_fn(3, 2, |x, y| Rgb::new(x as u8, y as u8, 0)).unwrap();
    /// assert_eq!(img.pixel(2, 1), Rgb::new(2, 1, 0));
    /// ```
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Rgb,
    {
        let count = checked_pixel_count(width, height)?;
        let mut data = Vec::with_capacity(count);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Black image with the same dimensions as `self`.
    ///
    /// Infallible because the dimensions were validated when `self` was built.
    pub fn blank_like(&self) -> Self {
        Self {
            data: vec![Rgb::BLACK; self.data.len()],
            width: self.width,
            height: self.height,
        }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Region covering the whole image.
    #[inline]
    pub fn bounds(&self) -> Region {
        Region::from_size(self.width, self.height)
    }

    /// Raw pixel data, row-major.
    #[inline]
    pub fn data(&self) -> &[Rgb] {
        &self.data
    }

    /// Mutable raw pixel data, row-major.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [Rgb] {
        &mut self.data
    }

    /// Returns the pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.data[y * self.width + x]
    }

    /// Returns the pixel at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Returns the pixel with coordinates clamped to the nearest edge.
    ///
    /// This is the clamp-to-edge boundary policy: samples outside the image
    /// replicate the border pixel. Never reads out of bounds, including for
    /// a 1×1 image.
    #[inline]
    pub fn pixel_clamped(&self, x: isize, y: isize) -> Rgb {
        let cx = x.clamp(0, self.width as isize - 1) as usize;
        let cy = y.clamp(0, self.height as isize - 1) as usize;
        self.data[cy * self.width + cx]
    }

    /// Sets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Rgb) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.data[y * self.width + x] = pixel;
    }

    /// Returns row `y` as a slice.
    #[inline]
    pub fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Iterates `(x, y, pixel)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, Rgb)> + '_ {
        let width = self.width;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, px)| (i % width, i / width, *px))
    }
}

impl std::fmt::Debug for RgbImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RgbImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

fn checked_pixel_count(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(
            width,
            height,
            "width and height must be > 0",
        ));
    }
    // isize bound keeps clamped sampling arithmetic in range
    width
        .checked_mul(height)
        .filter(|&n| n <= isize::MAX as usize)
        .ok_or_else(|| Error::invalid_dimensions(width, height, "pixel count overflows"))
}
