//! Single-source Dijkstra over a 4-connected [`Terrain`].

use std::fmt;

use ridgeway_core::{Coord, Cost, Extent, HeightMap, Matrix, UNREACHABLE};

use crate::heap::{HeapEntry, HeapError, MinHeap};
use crate::neighbors::Neighbors;
use crate::reconstruct::{Route, reconstruct};
use crate::traits::Terrain;

/// Search settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Cost the origin is queued with. The origin's own distance is always
    /// 0; every other distance is shifted by this amount.
    pub seed_cost: Cost,
    /// Fixed heap capacity. `None` provisions for the worst case, see
    /// [`worst_case_capacity`].
    pub heap_capacity: Option<usize>,
}

impl SearchConfig {
    /// Queue the origin with the grid's step cost, as older tooling did.
    /// Reported totals come out `step_cost` higher than the true minimum.
    pub fn legacy(map: &HeightMap) -> Self {
        Self {
            seed_cost: Cost::from(map.step_cost()),
            heap_capacity: None,
        }
    }
}

/// Heap capacity that can never be exceeded: one push per directed edge plus
/// the origin.
#[inline]
pub fn worst_case_capacity(extent: Extent) -> usize {
    1 + extent.directed_edges()
}

/// Errors that abort a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The terrain has no cells.
    EmptyGrid,
    /// The heap could not be allocated or overflowed its capacity.
    Capacity(HeapError),
    /// An accumulated cost no longer fits in [`Cost`].
    CostOverflow { at: Coord },
    /// The destination was never reached.
    Unreachable { destination: Coord },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "cannot search an empty grid"),
            Self::Capacity(e) => write!(f, "{e}"),
            Self::CostOverflow { at } => write!(f, "path cost overflows at {at}"),
            Self::Unreachable { destination } => {
                write!(f, "destination {destination} is unreachable")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Capacity(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HeapError> for SearchError {
    fn from(e: HeapError) -> Self {
        Self::Capacity(e)
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries popped from the heap, stale ones included.
    pub pops: usize,
    /// Popped entries whose cell was already finalized.
    pub stale: usize,
    /// Entries pushed, the origin included.
    pub pushes: usize,
    /// Largest heap size observed.
    pub peak: usize,
}

/// Distances and predecessors produced by [`GridSearch::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    dist: Matrix<Cost>,
    prev: Matrix<Coord>,
    stats: SearchStats,
}

impl ShortestPaths {
    #[inline]
    pub fn extent(&self) -> Extent {
        self.dist.extent()
    }

    /// Accumulated cost per cell; [`UNREACHABLE`] where nothing arrived.
    #[inline]
    pub fn distances(&self) -> &Matrix<Cost> {
        &self.dist
    }

    /// The cell each cell was last improved from; [`Coord::NONE`] for the
    /// origin and unreached cells.
    #[inline]
    pub fn predecessors(&self) -> &Matrix<Coord> {
        &self.prev
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Minimum cost to reach `c`, or `None` if unreached or out of range.
    pub fn cost_to(&self, c: Coord) -> Option<Cost> {
        self.dist.get(c).copied().filter(|&d| d != UNREACHABLE)
    }

    /// Cells from the origin to `c`, both included.
    ///
    /// Returns `None` if `c` was not reached.
    pub fn path_to(&self, c: Coord) -> Option<Vec<Coord>> {
        self.cost_to(c)?;
        reconstruct(&self.prev, c)
    }

    /// The cheapest route to `destination`, or
    /// [`SearchError::Unreachable`].
    pub fn route_to(&self, destination: Coord) -> Result<Route, SearchError> {
        match (self.cost_to(destination), self.path_to(destination)) {
            (Some(cost), Some(path)) => Ok(Route { path, cost }),
            _ => {
                log::warn!("destination {destination} was not reached");
                Err(SearchError::Unreachable { destination })
            }
        }
    }
}

/// Dijkstra searcher over a [`Terrain`].
///
/// `GridSearch` owns the priority queue and the visited grid and reuses
/// their storage between runs, so repeated searches over same-sized grids
/// do not reallocate them.
#[derive(Default)]
pub struct GridSearch {
    heap: MinHeap,
    visited: Matrix<bool>,
    nbuf: Neighbors,
}

impl GridSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the minimum cost from [`Coord::ORIGIN`] to every reachable
    /// cell of `terrain`.
    pub fn run<T: Terrain>(
        &mut self,
        terrain: &T,
        config: &SearchConfig,
    ) -> Result<ShortestPaths, SearchError> {
        let extent = terrain.extent();
        if extent.is_empty() {
            return Err(SearchError::EmptyGrid);
        }

        let capacity = config
            .heap_capacity
            .unwrap_or_else(|| worst_case_capacity(extent));
        self.heap.reset(capacity)?;
        self.visited.reset(extent, false);

        let mut dist = Matrix::new(extent, UNREACHABLE);
        let mut prev = Matrix::new(extent, Coord::NONE);
        let mut stats = SearchStats::default();

        log::debug!(
            "searching {extent} grid (heap capacity {capacity}, seed cost {})",
            config.seed_cost
        );

        let origin = Coord::ORIGIN;
        if terrain.passable(origin) {
            dist[origin] = 0;
            self.heap.push(HeapEntry::new(origin, config.seed_cost))?;
            stats.pushes += 1;
            stats.peak = 1;
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(HeapEntry { pos: cur, cost }) = self.heap.pop() {
            stats.pops += 1;
            // A cheaper entry for this cell was already handled.
            if self.visited[cur] {
                stats.stale += 1;
                continue;
            }
            self.visited[cur] = true;

            let visited = &self.visited;
            let neighbors = nbuf.cardinal(cur, extent, |n| !visited[n] && terrain.passable(n));
            for &n in neighbors {
                let candidate = terrain
                    .edge_cost(cur, n)
                    .and_then(|edge| cost.checked_add(edge))
                    .filter(|&c| c != UNREACHABLE)
                    .ok_or(SearchError::CostOverflow { at: n })?;
                if candidate < dist[n] {
                    dist[n] = candidate;
                    prev[n] = cur;
                    self.heap.push(HeapEntry::new(n, candidate))?;
                    stats.pushes += 1;
                    stats.peak = stats.peak.max(self.heap.len());
                }
            }
        }

        self.nbuf = nbuf;

        log::debug!(
            "search finished: {} pops ({} stale), {} pushes, peak queue {}",
            stats.pops,
            stats.stale,
            stats.pushes,
            stats.peak
        );

        Ok(ShortestPaths { dist, prev, stats })
    }
}
