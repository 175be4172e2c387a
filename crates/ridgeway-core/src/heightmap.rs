//! The [`HeightMap`]: an immutable elevation grid plus its movement prices.

use std::fmt::Write as _;

use crate::geom::{Coord, Extent};
use crate::matrix::{GridError, Matrix};

/// Accumulated path cost.
pub type Cost = u64;

/// Sentinel cost meaning "not reached". Larger than any real cost.
pub const UNREACHABLE: Cost = Cost::MAX;

/// A rectangular elevation grid.
///
/// Moving between two orthogonally adjacent cells costs
/// `step_cost + height_coefficient * (h_to - h_from)^2`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "HeightMapData", into = "HeightMapData")
)]
pub struct HeightMap {
    step_cost: u32,
    height_coefficient: u32,
    heights: Matrix<i32>,
}

impl HeightMap {
    /// Wrap a height matrix with its movement prices.
    pub fn new(step_cost: u32, height_coefficient: u32, heights: Matrix<i32>) -> Self {
        Self {
            step_cost,
            height_coefficient,
            heights,
        }
    }

    /// Build from nested rows of heights.
    pub fn from_rows(
        step_cost: u32,
        height_coefficient: u32,
        rows: Vec<Vec<i32>>,
    ) -> Result<Self, GridError> {
        Ok(Self::new(
            step_cost,
            height_coefficient,
            Matrix::from_rows(rows)?,
        ))
    }

    /// A grid where every cell has the same height.
    pub fn flat(
        extent: Extent,
        step_cost: u32,
        height_coefficient: u32,
        height: i32,
    ) -> Result<Self, GridError> {
        if extent.is_empty() {
            return Err(GridError::EmptyDimensions(extent));
        }
        Ok(Self::new(
            step_cost,
            height_coefficient,
            Matrix::new(extent, height),
        ))
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        self.heights.extent()
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.heights.rows()
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.heights.cols()
    }

    /// Price of a single step before the height penalty.
    #[inline]
    pub fn step_cost(&self) -> u32 {
        self.step_cost
    }

    /// Multiplier applied to the squared height difference of a step.
    #[inline]
    pub fn height_coefficient(&self) -> u32 {
        self.height_coefficient
    }

    #[inline]
    pub fn heights(&self) -> &Matrix<i32> {
        &self.heights
    }

    /// Height at `c`, or `None` outside the grid.
    #[inline]
    pub fn height(&self, c: Coord) -> Option<i32> {
        self.heights.get(c).copied()
    }

    /// Where every route starts.
    #[inline]
    pub fn origin(&self) -> Coord {
        Coord::ORIGIN
    }

    /// Where every route ends: the bottom-right cell.
    #[inline]
    pub fn destination(&self) -> Coord {
        Coord::new(self.rows().saturating_sub(1), self.cols().saturating_sub(1))
    }

    /// Cost of stepping from `from` to `to`.
    ///
    /// Returns `None` if either cell is outside the grid or the cost does
    /// not fit in [`Cost`]. Adjacency is not checked.
    pub fn edge_cost(&self, from: Coord, to: Coord) -> Option<Cost> {
        let diff = i64::from(self.height(to)?) - i64::from(self.height(from)?);
        let diff = diff.unsigned_abs();
        let penalty = Cost::from(self.height_coefficient).checked_mul(diff.checked_mul(diff)?)?;
        Cost::from(self.step_cost).checked_add(penalty)
    }

    /// Render in the plain-text input format read by [`crate::loader::parse`].
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {}\n{} {}",
            self.step_cost,
            self.height_coefficient,
            self.rows(),
            self.cols()
        );
        for row in self.heights.row_slices() {
            let line: Vec<String> = row.iter().map(i32::to_string).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}

/// Serialized shape of a [`HeightMap`]: nested rows instead of a flat buffer.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct HeightMapData {
    step_cost: u32,
    height_coefficient: u32,
    heights: Vec<Vec<i32>>,
}

#[cfg(feature = "serde")]
impl TryFrom<HeightMapData> for HeightMap {
    type Error = GridError;

    fn try_from(data: HeightMapData) -> Result<Self, GridError> {
        HeightMap::from_rows(data.step_cost, data.height_coefficient, data.heights)
    }
}

#[cfg(feature = "serde")]
impl From<HeightMap> for HeightMapData {
    fn from(map: HeightMap) -> Self {
        Self {
            step_cost: map.step_cost,
            height_coefficient: map.height_coefficient,
            heights: map.heights.row_slices().map(<[i32]>::to_vec).collect(),
        }
    }
}
