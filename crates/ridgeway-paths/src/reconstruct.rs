//! Path reconstruction from a predecessor grid.

use ridgeway_core::{Coord, Cost, Matrix};

/// A cheapest route: the visited cells from origin to destination and the
/// total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub path: Vec<Coord>,
    pub cost: Cost,
}

/// Walk `prev` backwards from `dest` until a cell with no predecessor, and
/// return the cells in forward order (that cell first, `dest` last).
///
/// Returns `None` if `dest` or any predecessor lies outside the grid, or if
/// the walk is longer than the grid has cells (a cycle).
pub fn reconstruct(prev: &Matrix<Coord>, dest: Coord) -> Option<Vec<Coord>> {
    let limit = prev.extent().len();
    let mut path = Vec::new();
    let mut cur = dest;
    while !cur.is_none() {
        if path.len() >= limit {
            return None;
        }
        let &p = prev.get(cur)?;
        path.push(cur);
        cur = p;
    }
    path.reverse();
    Some(path)
}
