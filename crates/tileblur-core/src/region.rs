//! Rectangular image regions.
//!
//! A [`Region`] is the unit of work handed to one worker: the set of output
//! pixels it is responsible for.
//!
//! # Coordinate System
//!
//! - Origin (0, 0) is at the **top-left** corner
//! - X (column) increases to the right
//! - Y (row) increases downward
//!
//! ```text
//! (0,0) ────────► X
//!   │
//!   │   ┌──────────┐
//!   │   │  Region  │
//!   │   └──────────┘
//!   ▼
//!   Y
//! ```
//!
//! Regions are half-open: `[x, right()) × [y, bottom())`.
//!
//! # Usage
//!
//! ```rust
//! use tileblur_core::Region;
//!
//! let region = Region::new(10, 20, 100, 50);
//! assert!(region.contains(15, 25));
//! assert!(!region.contains(110, 25));
//!
//! let other = Region::new(50, 40, 100, 50);
//! let overlap = region.intersect(&other).unwrap();
//! assert_eq!(overlap.width, 60);
//! ```

/// Axis-aligned half-open rectangle in pixel coordinates.
///
/// A region with zero width or height is empty. Empty regions are legal:
/// a decomposition with more column groups than columns produces them.
///
/// # Example
///
/// ```rust
/// use tileblur_core::Region;
///
/// let region = Region::new(10, 20, 100, 50);
/// assert_eq!(region.right(), 110);
/// assert_eq!(region.bottom(), 70);
/// assert_eq!(region.area(), 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// First column (inclusive)
    pub x: usize,
    /// First row (inclusive)
    pub y: usize,
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

impl Region {
    /// Creates a region with the given origin and dimensions.
    #[inline]
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a region at the origin covering `width × height`.
    ///
    /// ```rust
    /// use tileblur_core::Region;
    ///
    /// let full = Region::from_size(1920, 1080);
    /// assert_eq!((full.x, full.y), (0, 0));
    /// ```
    #[inline]
    pub const fn from_size(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Creates a region from its start (inclusive) and finish (exclusive) bounds.
    ///
    /// Finish values smaller than start values yield an empty region.
    ///
    /// ```rust
    /// use tileblur_core::Region;
    ///
    /// let r = Region::from_bounds(2, 3, 7, 5);
    /// assert_eq!(r, Region::new(2, 3, 5, 2));
    /// ```
    #[inline]
    pub const fn from_bounds(start_x: usize, start_y: usize, finish_x: usize, finish_y: usize) -> Self {
        Self::new(
            start_x,
            start_y,
            finish_x.saturating_sub(start_x),
            finish_y.saturating_sub(start_y),
        )
    }

    /// First column NOT in the region.
    #[inline]
    pub const fn right(&self) -> usize {
        self.x + self.width
    }

    /// First row NOT in the region.
    #[inline]
    pub const fn bottom(&self) -> usize {
        self.y + self.height
    }

    /// Area in pixels.
    #[inline]
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Returns `true` if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if column `px`, row `py` lies inside the region.
    ///
    /// ```rust
    /// use tileblur_core::Region;
    ///
    /// let r = Region::new(10, 10, 100, 100);
    /// assert!(r.contains(10, 10));
    /// assert!(r.contains(109, 109));
    /// assert!(!r.contains(110, 110));
    /// ```
    #[inline]
    pub const fn contains(&self, px: usize, py: usize) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Returns `true` if `other` lies entirely inside this region.
    #[inline]
    pub const fn contains_region(&self, other: &Region) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns `true` if the two regions share at least one pixel.
    ///
    /// Empty regions never overlap.
    #[inline]
    pub const fn overlaps(&self, other: &Region) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Returns the shared area, or `None` if the regions don't overlap.
    #[inline]
    pub fn intersect(&self, other: &Region) -> Option<Region> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Region::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Iterates `(x, y)` over the region, row by row.
    ///
    /// ```rust
    /// use tileblur_core::Region;
    ///
    /// let coords: Vec<_> = Region::new(0, 0, 2, 2).iter_coords().collect();
    /// assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    /// ```
    #[inline]
    pub fn iter_coords(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.y..self.bottom()).flat_map(move |y| (self.x..self.right()).map(move |x| (x, y)))
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}) x [{}, {}) ({}x{})",
            self.x,
            self.right(),
            self.y,
            self.bottom(),
            self.width,
            self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let r = Region::new(3, 4, 5, 6);
        assert_eq!(r.right(), 8);
        assert_eq!(r.bottom(), 10);
        assert_eq!(r.area(), 30);
        assert!(!r.is_empty());
        assert_eq!(Region::from_bounds(3, 4, 8, 10), r);
    }

    #[test]
    fn test_empty() {
        assert!(Region::new(5, 5, 0, 10).is_empty());
        assert!(Region::new(5, 5, 10, 0).is_empty());
        assert!(Region::from_bounds(7, 0, 3, 3).is_empty());
        assert!(!Region::new(0, 0, 0, 10).contains(0, 0));
    }

    #[test]
    fn test_overlaps() {
        let a = Region::new(0, 0, 5, 5);
        let right = Region::new(5, 0, 5, 5);
        let below = Region::new(0, 5, 5, 5);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
        assert!(a.overlaps(&Region::new(4, 4, 1, 1)));
        assert!(!a.overlaps(&Region::new(2, 2, 0, 3)));
    }

    #[test]
    fn test_intersect_and_contains() {
        let a = Region::new(0, 0, 100, 100);
        let b = Region::new(50, 50, 100, 100);
        assert_eq!(a.intersect(&b), Some(Region::new(50, 50, 50, 50)));
        assert_eq!(a.intersect(&Region::new(100, 0, 5, 5)), None);
        assert!(a.contains_region(&Region::new(10, 10, 50, 50)));
        assert!(!a.contains_region(&b));
    }

    #[test]
    fn test_display() {
        assert_eq!(Region::new(0, 5, 5, 5).to_string(), "[0, 5) x [5, 10) (5x5)");
    }
}
