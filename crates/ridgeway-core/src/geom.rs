//! Grid geometry: [`Coord`] and [`Extent`].
//!
//! Coordinates are `(row, col)` pairs of unsigned indices. Row 0 is the top
//! of the grid, column 0 the left edge.

use std::fmt;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A cell position in a grid.
///
/// [`Coord::NONE`] is a reserved value outside every valid grid, used for
/// "no coordinate" in predecessor grids and for the empty heap sentinel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: u32,
    pub col: u32,
}

impl Coord {
    /// Top-left cell.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// "No coordinate" sentinel.
    pub const NONE: Self = Self {
        row: u32::MAX,
        col: u32::MAX,
    };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Whether this is the [`NONE`](Self::NONE) sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.row == u32::MAX && self.col == u32::MAX
    }

    /// Return the coordinate shifted by `(dr, dc)`, or `None` if either
    /// index would leave the `u32` range.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Coord) -> u64 {
        u64::from(self.row.abs_diff(other.row)) + u64::from(self.col.abs_diff(other.col))
    }

    /// Whether `other` is one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "(none)");
        }
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Extent
// ---------------------------------------------------------------------------

/// The dimensions of a grid: `rows x cols` cells starting at [`Coord::ORIGIN`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub rows: u32,
    pub cols: u32,
}

impl Extent {
    /// Create a new extent.
    #[inline]
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the extent holds no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `c` lies inside the extent.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row < self.rows && c.col < self.cols
    }

    /// Bottom-right cell, or `None` for an empty extent.
    #[inline]
    pub fn last(self) -> Option<Coord> {
        if self.is_empty() {
            return None;
        }
        Some(Coord::new(self.rows - 1, self.cols - 1))
    }

    /// Row-major flat index of `c`. Returns `None` if out of range.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some((c.row as usize) * (self.cols as usize) + c.col as usize)
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    pub fn coord(self, idx: usize) -> Coord {
        let cols = self.cols.max(1) as usize;
        Coord::new((idx / cols) as u32, (idx % cols) as u32)
    }

    /// Number of directed 4-connected edges in the grid.
    #[inline]
    pub fn directed_edges(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let (r, c) = (self.rows as usize, self.cols as usize);
        2 * (r * (c - 1) + (r - 1) * c)
    }

    /// Row-major iterator over every coordinate.
    #[inline]
    pub fn iter(self) -> ExtentIter {
        ExtentIter {
            extent: self,
            next: 0,
        }
    }
}

impl IntoIterator for Extent {
    type Item = Coord;
    type IntoIter = ExtentIter;
    #[inline]
    fn into_iter(self) -> ExtentIter {
        self.iter()
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Row-major iterator over the coordinates of an [`Extent`].
#[derive(Clone, Debug)]
pub struct ExtentIter {
    extent: Extent,
    next: usize,
}

impl Iterator for ExtentIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.next >= self.extent.len() {
            return None;
        }
        let c = self.extent.coord(self.next);
        self.next += 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.extent.len().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for ExtentIter {}
