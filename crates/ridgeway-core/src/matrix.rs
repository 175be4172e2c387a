//! The [`Matrix`] type: an owned, row-major 2D array indexed by [`Coord`].
//!
//! Distance, predecessor, visited and height grids are all `Matrix` values.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::geom::{Coord, Extent};

/// Errors raised when building a grid from raw data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A dimension is zero.
    EmptyDimensions(Extent),
    /// The number of values does not match `rows * cols`.
    SizeMismatch { expected: usize, actual: usize },
    /// A dimension does not fit in a `u32`.
    DimensionOverflow { rows: usize, cols: usize },
    /// A row in a nested representation has the wrong length.
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimensions(e) => write!(f, "grid dimensions must be positive, got {e}"),
            Self::SizeMismatch { expected, actual } => {
                write!(f, "grid expects {expected} values, got {actual}")
            }
            Self::DimensionOverflow { rows, cols } => {
                write!(f, "grid dimensions {rows}x{cols} are too large")
            }
            Self::RaggedRow {
                row,
                expected,
                actual,
            } => write!(f, "row {row} has {actual} values, expected {expected}"),
        }
    }
}

impl std::error::Error for GridError {}

/// A `rows x cols` grid of `T` stored row-major in a single `Vec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    extent: Extent,
    cells: Vec<T>,
}

impl<T> Default for Matrix<T> {
    /// An empty `0x0` matrix.
    fn default() -> Self {
        Self {
            extent: Extent::default(),
            cells: Vec::new(),
        }
    }
}

impl<T: Clone> Matrix<T> {
    /// Create a matrix with every cell set to `value`.
    pub fn new(extent: Extent, value: T) -> Self {
        Self {
            extent,
            cells: vec![value; extent.len()],
        }
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T) {
        for v in self.cells.iter_mut() {
            *v = value.clone();
        }
    }

    /// Resize to `extent` and fill with `value`, reusing the existing
    /// allocation when it is large enough.
    pub fn reset(&mut self, extent: Extent, value: T) {
        self.extent = extent;
        self.cells.clear();
        self.cells.resize(extent.len(), value);
    }
}

impl<T> Matrix<T> {
    /// Wrap row-major `cells`. The length must equal `extent.len()`.
    pub fn from_vec(extent: Extent, cells: Vec<T>) -> Result<Self, GridError> {
        if extent.is_empty() {
            return Err(GridError::EmptyDimensions(extent));
        }
        if cells.len() != extent.len() {
            return Err(GridError::SizeMismatch {
                expected: extent.len(),
                actual: cells.len(),
            });
        }
        Ok(Self { extent, cells })
    }

    /// Build a matrix from nested rows. All rows must have the same,
    /// non-zero length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        let (Ok(r), Ok(c)) = (u32::try_from(rows.len()), u32::try_from(width)) else {
            return Err(GridError::DimensionOverflow {
                rows: rows.len(),
                cols: width,
            });
        };
        let extent = Extent::new(r, c);
        if extent.is_empty() {
            return Err(GridError::EmptyDimensions(extent));
        }
        let mut cells = Vec::with_capacity(extent.len());
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: i,
                    expected: width,
                    actual: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self { extent, cells })
    }

    /// Dimensions of the matrix.
    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.extent.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.extent.cols
    }

    /// Whether `c` lies inside the matrix.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.extent.contains(c)
    }

    /// The cell at `c`, or `None` if out of range.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<&T> {
        self.extent.index(c).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `c`, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, c: Coord) -> Option<&mut T> {
        self.extent.index(c).map(|i| &mut self.cells[i])
    }

    /// Replace the cell at `c`. Returns `false` (and does nothing) if `c` is
    /// out of range.
    #[inline]
    pub fn set(&mut self, c: Coord, value: T) -> bool {
        match self.get_mut(c) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Row-major view of all cells.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Iterate over rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.extent.cols.max(1) as usize)
    }

    /// Row-major iterator over `(Coord, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        self.extent.iter().zip(self.cells.iter())
    }
}

impl<T> Index<Coord> for Matrix<T> {
    type Output = T;

    /// Panics if `c` is out of range, like slice indexing.
    #[inline]
    fn index(&self, c: Coord) -> &T {
        match self.extent.index(c) {
            Some(i) => &self.cells[i],
            None => panic!("coordinate {c} out of range for {} matrix", self.extent),
        }
    }
}

impl<T> IndexMut<Coord> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, c: Coord) -> &mut T {
        match self.extent.index(c) {
            Some(i) => &mut self.cells[i],
            None => panic!("coordinate {c} out of range for {} matrix", self.extent),
        }
    }
}
