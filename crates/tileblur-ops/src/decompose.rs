//! Work decomposition into per-worker tiles.
//!
//! An image of `width × height` is split into exactly `workers` regions laid
//! out as a `row_groups × col_groups` grid:
//!
//! 1. `workers` is factored as `m × (workers / m)` with `m` the largest divisor
//!    not above `sqrt(workers)`; the larger factor becomes the number of row
//!    groups. A prime count degenerates to horizontal strips.
//! 2. Height and width are split into nearly equal lengths, the first
//!    `length % groups` groups getting one extra unit.
//! 3. Region `i * col_groups + j` is row group `i` crossed with column group `j`.
//!
//! ```text
//!  workers = 6  ->  3 x 2 grid
//!  +-----+-----+
//!  |  0  |  1  |
//!  +-----+-----+
//!  |  2  |  3  |
//!  +-----+-----+
//!  |  4  |  5  |
//!  +-----+-----+
//! ```
//!
//! Regions tile the image exactly: no gaps, no overlaps. A region may be empty
//! when there are more groups than pixels along an axis.
//!
//! # Example
//!
//! ```rust
//! use tileblur_ops::decompose::decompose;
//!
//! let d = decompose(10, 10, 4).unwrap();
//! assert_eq!((d.row_groups(), d.col_groups()), (2, 2));
//! assert!(d.regions().iter().all(|r| r.width == 5 && r.height == 5));
//! ```

use crate::{OpsError, OpsResult};
use tileblur_core::{Region, Rgb};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Largest worker count a [`Decomposition`] accepts.
///
/// Each worker gets its own OS thread in the parallel executor.
pub const MAX_WORKERS: usize = 4096;

/// Factors `workers` into `(row_groups, col_groups)` as close to square as possible.
///
/// `row_groups >= col_groups` and `row_groups * col_groups == workers`.
///
/// ```rust
/// use tileblur_ops::decompose::grid_factors;
///
/// assert_eq!(grid_factors(4), (2, 2));
/// assert_eq!(grid_factors(6), (3, 2));
/// assert_eq!(grid_factors(7), (7, 1));
/// ```
///
/// # Panics
///
/// Panics if `workers` is zero.
pub fn grid_factors(workers: usize) -> (usize, usize) {
    assert!(workers > 0, "worker count must be > 0");

    let mut m = workers.isqrt();
    while workers % m != 0 {
        m -= 1;
    }
    let k = workers / m;
    (k.max(m), k.min(m))
}

/// Splits `length` into `groups` nearly equal parts.
///
/// The remainder is handed out one unit at a time starting from group 0.
///
/// ```rust
/// use tileblur_ops::decompose::split_lengths;
///
/// assert_eq!(split_lengths(10, 3), vec![4, 3, 3]);
/// assert_eq!(split_lengths(3, 5), vec![1, 1, 1, 0, 0]);
/// ```
pub fn split_lengths(length: usize, groups: usize) -> Vec<usize> {
    if groups == 0 {
        return Vec::new();
    }
    let base = length / groups;
    let tail = length % groups;
    (0..groups).map(|i| base + usize::from(i < tail)).collect()
}

/// Disjoint, covering set of regions for a fixed worker count.
///
/// Derived deterministically from `(width, height, workers)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    width: usize,
    height: usize,
    row_lengths: Vec<usize>,
    col_lengths: Vec<usize>,
    regions: Vec<Region>,
}

impl Decomposition {
    /// Decomposes a `width × height` image for `workers` workers.
    ///
    /// # Errors
    ///
    /// - [`OpsError::InvalidParameter`] if `workers` is zero or above [`MAX_WORKERS`]
    /// - [`OpsError::InvalidDimensions`] if `width` or `height` is zero
    pub fn new(width: usize, height: usize, workers: usize) -> OpsResult<Self> {
        trace!(width, height, workers, "Decomposition::new");

        if workers == 0 {
            return Err(OpsError::InvalidParameter(
                "worker count must be > 0".into(),
            ));
        }
        if workers > MAX_WORKERS {
            return Err(OpsError::InvalidParameter(format!(
                "worker count {workers} exceeds the limit of {MAX_WORKERS}"
            )));
        }
        if width == 0 || height == 0 {
            return Err(OpsError::InvalidDimensions(format!(
                "cannot decompose a {width}x{height} image"
            )));
        }

        let (row_groups, col_groups) = grid_factors(workers);
        let row_lengths = split_lengths(height, row_groups);
        let col_lengths = split_lengths(width, col_groups);

        let mut regions = Vec::with_capacity(workers);
        let mut y = 0;
        for &h in &row_lengths {
            let mut x = 0;
            for &w in &col_lengths {
                regions.push(Region::new(x, y, w, h));
                x += w;
            }
            y += h;
        }

        debug!(
            width,
            height,
            workers,
            row_groups,
            col_groups,
            "decomposed image"
        );
        let decomposition = Self {
            width,
            height,
            row_lengths,
            col_lengths,
            regions,
        };
        debug_assert!(decomposition.covers_exactly());
        Ok(decomposition)
    }

    /// Image width this decomposition was built for.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height this decomposition was built for.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Regions in worker order (`i * col_groups + j`).
    #[inline]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Number of regions, equal to the worker count.
    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Always `false` for a constructed decomposition.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Number of row groups (grid rows).
    #[inline]
    pub fn row_groups(&self) -> usize {
        self.row_lengths.len()
    }

    /// Number of column groups (grid columns).
    #[inline]
    pub fn col_groups(&self) -> usize {
        self.col_lengths.len()
    }

    /// Height of each row group, top to bottom.
    #[inline]
    pub fn row_lengths(&self) -> &[usize] {
        &self.row_lengths
    }

    /// Width of each column group, left to right.
    #[inline]
    pub fn col_lengths(&self) -> &[usize] {
        &self.col_lengths
    }

    /// Iterates over regions in worker order.
    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    /// Checks that regions are pairwise disjoint and cover the image exactly.
    pub fn covers_exactly(&self) -> bool {
        let bounds = Region::from_size(self.width, self.height);
        if !self.regions.iter().all(|r| bounds.contains_region(r)) {
            return false;
        }
        let area: usize = self.regions.iter().map(Region::area).sum();
        if area != self.width * self.height {
            return false;
        }
        self.regions.iter().enumerate().all(|(i, a)| {
            self.regions[i + 1..].iter().all(|b| !a.overlaps(b))
        })
    }

    /// Splits a row-major output buffer into one mutable tile per region.
    ///
    /// The returned tiles are in worker order. Each holds exactly the cells of
    /// its region, obtained purely by slice splitting, so no two tiles alias.
    ///
    /// # Errors
    ///
    /// [`OpsError::SizeMismatch`] if `data.len() != width * height`.
    pub fn split_mut<'a>(&self, data: &'a mut [Rgb]) -> OpsResult<Vec<TileMut<'a>>> {
        let expected = self.width * self.height;
        if data.len() != expected {
            return Err(OpsError::SizeMismatch(format!(
                "buffer holds {} pixels, decomposition expects {}x{} = {}",
                data.len(),
                self.width,
                self.height,
                expected
            )));
        }

        let col_groups = self.col_groups();
        let mut tiles: Vec<TileMut<'a>> = self
            .regions
            .iter()
            .map(|&region| TileMut {
                region,
                rows: Vec::with_capacity(region.height),
            })
            .collect();

        let mut rows = data.chunks_exact_mut(self.width);
        for (i, &group_height) in self.row_lengths.iter().enumerate() {
            for _ in 0..group_height {
                let Some(mut rest) = rows.next() else {
                    return Err(OpsError::SizeMismatch("ran out of rows".into()));
                };
                for (j, &w) in self.col_lengths.iter().enumerate() {
                    let (segment, tail) = std::mem::take(&mut rest).split_at_mut(w);
                    tiles[i * col_groups + j].rows.push(segment);
                    rest = tail;
                }
            }
        }

        Ok(tiles)
    }
}

impl<'a> IntoIterator for &'a Decomposition {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

/// Decomposes a `width × height` image for `workers` workers.
///
/// See [`Decomposition::new`].
pub fn decompose(width: usize, height: usize, workers: usize) -> OpsResult<Decomposition> {
    Decomposition::new(width, height, workers)
}

/// Exclusive view over the output cells of one region.
///
/// `rows()[dy][dx]` is the output pixel at column `region.x + dx`,
/// row `region.y + dy`.
#[derive(Debug)]
pub struct TileMut<'a> {
    region: Region,
    rows: Vec<&'a mut [Rgb]>,
}

impl<'a> TileMut<'a> {
    /// Region this tile covers.
    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    /// Returns `true` if the tile covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.region.is_empty()
    }

    /// Row segments of the tile, top to bottom.
    #[inline]
    pub fn rows(&self) -> &[&'a mut [Rgb]] {
        &self.rows
    }

    /// Mutable row segments of the tile, top to bottom.
    #[inline]
    pub fn rows_mut(&mut self) -> &mut [&'a mut [Rgb]] {
        &mut self.rows
    }
}
