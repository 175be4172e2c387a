use ridgeway_core::{Coord, Cost, Extent, HeightMap};

/// A 4-connected grid with non-negative step costs.
pub trait Terrain {
    /// Dimensions of the grid. The search starts at [`Coord::ORIGIN`].
    fn extent(&self) -> Extent;

    /// Cost of moving from `from` to the adjacent cell `to`, or `None` when
    /// the cost does not fit in [`Cost`].
    fn edge_cost(&self, from: Coord, to: Coord) -> Option<Cost>;

    /// Whether `c` may be entered. Every cell is passable by default.
    fn passable(&self, _c: Coord) -> bool {
        true
    }
}

impl Terrain for HeightMap {
    #[inline]
    fn extent(&self) -> Extent {
        HeightMap::extent(self)
    }

    #[inline]
    fn edge_cost(&self, from: Coord, to: Coord) -> Option<Cost> {
        HeightMap::edge_cost(self, from, to)
    }
}
