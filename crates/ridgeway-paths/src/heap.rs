//! Fixed-capacity binary min-heap of `(Coord, Cost)` entries.
//!
//! The heap has no decrease-key: a cheaper route to a cell is pushed as a
//! new entry and the older, dearer one stays behind until popped. Callers
//! discard such stale entries themselves.

use std::fmt;

use ridgeway_core::{Coord, Cost, UNREACHABLE};

/// A queued cell and the cost it was reached with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeapEntry {
    pub pos: Coord,
    pub cost: Cost,
}

impl HeapEntry {
    /// Returned by [`MinHeap::pop_or_empty`] when the heap is empty.
    pub const EMPTY: Self = Self {
        pos: Coord::NONE,
        cost: UNREACHABLE,
    };

    #[inline]
    pub const fn new(pos: Coord, cost: Cost) -> Self {
        Self { pos, cost }
    }

    /// Whether this is the [`EMPTY`](Self::EMPTY) sentinel.
    #[inline]
    pub fn is_empty_sentinel(&self) -> bool {
        *self == Self::EMPTY
    }
}

/// Errors reported by [`MinHeap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// Backing storage for `capacity` entries could not be allocated.
    Alloc { capacity: usize },
    /// A push was attempted on a full heap.
    CapacityExceeded { capacity: usize },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alloc { capacity } => {
                write!(f, "cannot allocate priority queue for {capacity} entries")
            }
            Self::CapacityExceeded { capacity } => {
                write!(f, "priority queue is full ({capacity} entries)")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// An array-backed binary min-heap ordered by ascending cost.
///
/// The capacity is fixed at construction; the backing `Vec` never grows.
/// Order among equal costs is unspecified.
#[derive(Debug, Clone)]
pub struct MinHeap {
    nodes: Vec<HeapEntry>,
    capacity: usize,
}

impl Default for MinHeap {
    /// An empty heap with zero capacity. Use [`reset`](MinHeap::reset) to
    /// make room before pushing.
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            capacity: 0,
        }
    }
}

impl MinHeap {
    /// Allocate storage for exactly `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Result<Self, HeapError> {
        let mut nodes = Vec::new();
        nodes
            .try_reserve_exact(capacity)
            .map_err(|_| HeapError::Alloc { capacity })?;
        Ok(Self { nodes, capacity })
    }

    /// Maximum number of entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove every entry, keeping the storage.
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Clear the heap and make room for `capacity` entries, reallocating
    /// only when the current storage is too small.
    pub fn reset(&mut self, capacity: usize) -> Result<(), HeapError> {
        self.nodes.clear();
        if capacity > self.nodes.capacity() {
            self.nodes
                .try_reserve_exact(capacity)
                .map_err(|_| HeapError::Alloc { capacity })?;
        }
        self.capacity = capacity;
        Ok(())
    }

    /// The cheapest entry, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&HeapEntry> {
        self.nodes.first()
    }

    /// Insert an entry. Fails without modifying the heap when it is full.
    pub fn push(&mut self, entry: HeapEntry) -> Result<(), HeapError> {
        if self.nodes.len() >= self.capacity {
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.nodes.push(entry);

        // Sift up.
        let mut i = self.nodes.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.nodes[i].cost >= self.nodes[parent].cost {
                break;
            }
            self.nodes.swap(i, parent);
            i = parent;
        }
        Ok(())
    }

    /// Remove and return the cheapest entry.
    pub fn pop(&mut self) -> Option<HeapEntry> {
        let last = self.nodes.pop()?;
        if self.nodes.is_empty() {
            return Some(last);
        }
        let top = std::mem::replace(&mut self.nodes[0], last);

        // Sift down within the shrunk heap.
        let len = self.nodes.len();
        let mut i = 0;
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smallest = left;
            if right < len && self.nodes[right].cost < self.nodes[left].cost {
                smallest = right;
            }
            if self.nodes[smallest].cost >= self.nodes[i].cost {
                break;
            }
            self.nodes.swap(i, smallest);
            i = smallest;
        }
        Some(top)
    }

    /// Like [`pop`](Self::pop) but returns [`HeapEntry::EMPTY`] for an empty
    /// heap.
    #[inline]
    pub fn pop_or_empty(&mut self) -> HeapEntry {
        self.pop().unwrap_or(HeapEntry::EMPTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn entry(i: u32, cost: Cost) -> HeapEntry {
        HeapEntry::new(Coord::new(i, 0), cost)
    }

    fn drain(heap: &mut MinHeap) -> Vec<Cost> {
        let mut out = Vec::new();
        while let Some(e) = heap.pop() {
            out.push(e.cost);
        }
        out
    }

    #[test]
    fn pops_in_cost_order() {
        let mut h = MinHeap::with_capacity(8).unwrap();
        for (i, c) in [5, 3, 8, 1, 9, 2, 7].into_iter().enumerate() {
            h.push(entry(i as u32, c)).unwrap();
        }
        assert_eq!(h.peek().map(|e| e.cost), Some(1));
        assert_eq!(drain(&mut h), vec![1, 2, 3, 5, 7, 8, 9]);
        assert!(h.is_empty());
    }

    #[test]
    fn keeps_duplicates() {
        let mut h = MinHeap::with_capacity(4).unwrap();
        let c = Coord::new(2, 2);
        h.push(HeapEntry::new(c, 10)).unwrap();
        h.push(HeapEntry::new(c, 4)).unwrap();
        h.push(HeapEntry::new(c, 4)).unwrap();
        assert_eq!(h.len(), 3);
        assert_eq!(h.pop(), Some(HeapEntry::new(c, 4)));
        assert_eq!(h.pop(), Some(HeapEntry::new(c, 4)));
        assert_eq!(h.pop(), Some(HeapEntry::new(c, 10)));
    }

    #[test]
    fn random_pushes_pop_non_decreasing() {
        let mut rng = StdRng::seed_from_u64(7);
        for round in 0..20 {
            let n = 1 + round * 13;
            let mut h = MinHeap::with_capacity(n).unwrap();
            let mut expected = Vec::with_capacity(n);
            for i in 0..n {
                let c: Cost = rng.random_range(0..50);
                expected.push(c);
                h.push(entry(i as u32, c)).unwrap();
            }
            expected.sort_unstable();
            assert_eq!(drain(&mut h), expected);
        }
    }

    #[test]
    fn interleaved_push_pop() {
        let mut h = MinHeap::with_capacity(4).unwrap();
        h.push(entry(0, 6)).unwrap();
        h.push(entry(1, 2)).unwrap();
        assert_eq!(h.pop().map(|e| e.cost), Some(2));
        h.push(entry(2, 1)).unwrap();
        h.push(entry(3, 9)).unwrap();
        h.push(entry(4, 4)).unwrap();
        assert_eq!(drain(&mut h), vec![1, 4, 6, 9]);
    }

    #[test]
    fn push_beyond_capacity_is_rejected() {
        let mut h = MinHeap::with_capacity(2).unwrap();
        h.push(entry(0, 3)).unwrap();
        h.push(entry(1, 1)).unwrap();
        assert_eq!(
            h.push(entry(2, 0)),
            Err(HeapError::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(h.len(), 2);
        assert_eq!(drain(&mut h), vec![1, 3]);
    }

    #[test]
    fn zero_capacity_rejects_everything() {
        let mut h = MinHeap::with_capacity(0).unwrap();
        assert!(h.push(entry(0, 0)).is_err());
        assert_eq!(h.pop(), None);
    }

    #[test]
    fn empty_pop_returns_sentinel_and_heap_stays_usable() {
        let mut h = MinHeap::with_capacity(3).unwrap();
        assert_eq!(h.pop(), None);
        let e = h.pop_or_empty();
        assert!(e.is_empty_sentinel());
        assert!(e.pos.is_none());
        assert_eq!(e.cost, UNREACHABLE);
        assert_eq!(h.len(), 0);

        h.push(entry(0, 5)).unwrap();
        h.push(entry(1, 2)).unwrap();
        assert_eq!(h.pop_or_empty(), entry(1, 2));
        assert_eq!(h.pop_or_empty(), entry(0, 5));
        assert!(h.pop_or_empty().is_empty_sentinel());
    }

    #[test]
    fn reset_changes_capacity() {
        let mut h = MinHeap::with_capacity(1).unwrap();
        h.push(entry(0, 1)).unwrap();
        h.reset(3).unwrap();
        assert!(h.is_empty());
        assert_eq!(h.capacity(), 3);
        for i in 0..3 {
            h.push(entry(i, Cost::from(i))).unwrap();
        }
        assert!(h.push(entry(3, 0)).is_err());
        h.reset(1).unwrap();
        assert_eq!(h.capacity(), 1);
    }

    #[test]
    fn absurd_capacity_fails_to_allocate() {
        assert_eq!(
            MinHeap::with_capacity(usize::MAX).unwrap_err(),
            HeapError::Alloc {
                capacity: usize::MAX
            }
        );
    }
}
