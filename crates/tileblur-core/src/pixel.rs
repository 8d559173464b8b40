//! 8-bit RGB color.
//!
//! Channels are stored as `u8`, so every value held by an [`Rgb`] is already
//! within `[0, 255]`. Filters accumulate in `f32` and come back through
//! [`Rgb::from_f32_truncated`], which applies the clamp per channel.
//!
//! # Memory Layout
//!
//! `#[repr(C)]` with three bytes `r, g, b`, no padding.

use std::fmt;

/// RGB color with three independent 8-bit channels.
///
/// # Example
///
/// ```rust
/// use tileblur_core::Rgb;
///
/// let px = Rgb::new(255, 128, 0);
/// assert_eq!(px.to_array(), [255, 128, 0]);
/// assert_eq!(Rgb::default(), Rgb::BLACK);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// All channels zero.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// All channels 255.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Creates a color from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a gray color with all channels equal.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Returns the channels as `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns the channels widened to `f32`.
    #[inline]
    pub fn to_f32(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }

    /// Converts accumulated channel sums back to a color.
    ///
    /// Each channel is truncated toward zero and then clamped to `[0, 255]`
    /// independently. NaN maps to 0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tileblur_core::Rgb;
    ///
    /// let px = Rgb::from_f32_truncated([12.9, -4.0, 300.5]);
    /// assert_eq!(px, Rgb::new(12, 0, 255));
    /// ```
    #[inline]
    pub fn from_f32_truncated(sums: [f32; 3]) -> Self {
        Self::new(
            clamp_channel(sums[0]),
            clamp_channel(sums[1]),
            clamp_channel(sums[2]),
        )
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from(v: [u8; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Rgb> for [u8; 3] {
    #[inline]
    fn from(px: Rgb) -> Self {
        px.to_array()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[inline]
fn clamp_channel(v: f32) -> u8 {
    // `as i32` truncates toward zero and saturates
    (v as i32).clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation_and_clamp() {
        assert_eq!(Rgb::from_f32_truncated([0.0, 0.99, 254.999]), Rgb::new(0, 0, 254));
        assert_eq!(Rgb::from_f32_truncated([-0.5, 255.0, 1e9]), Rgb::new(0, 255, 255));
        assert_eq!(Rgb::from_f32_truncated([f32::NAN, f32::NEG_INFINITY, f32::INFINITY]), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_conversions() {
        let px: Rgb = [1, 2, 3].into();
        assert_eq!(px, Rgb::new(1, 2, 3));
        let arr: [u8; 3] = px.into();
        assert_eq!(arr, [1, 2, 3]);
        assert_eq!(px.to_f32(), [1.0, 2.0, 3.0]);
        assert_eq!(Rgb::gray(7), Rgb::new(7, 7, 7));
        assert_eq!(px.to_string(), "rgb(1, 2, 3)");
    }
}
