use ridgeway_core::{Coord, Extent};

/// Row/column offsets of the four orthogonal neighbours: north, south,
/// east, west.
const CARDINAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

/// Cached neighbour computation helper.
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the in-bounds orthogonal neighbours of `c`, keeping only those
    /// for which `keep` returns `true`.
    pub fn cardinal(
        &mut self,
        c: Coord,
        extent: Extent,
        keep: impl Fn(Coord) -> bool,
    ) -> &[Coord] {
        self.buf.clear();
        for (dr, dc) in CARDINAL {
            let Some(n) = c.offset(dr, dc) else {
                continue;
            };
            if extent.contains(n) && keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_two_neighbors() {
        let mut nb = Neighbors::new();
        let e = Extent::new(3, 3);
        assert_eq!(
            nb.cardinal(Coord::ORIGIN, e, |_| true),
            &[Coord::new(1, 0), Coord::new(0, 1)]
        );
        assert_eq!(
            nb.cardinal(Coord::new(2, 2), e, |_| true),
            &[Coord::new(1, 2), Coord::new(2, 1)]
        );
    }

    #[test]
    fn center_has_four_in_fixed_order() {
        let mut nb = Neighbors::new();
        assert_eq!(
            nb.cardinal(Coord::new(1, 1), Extent::new(3, 3), |_| true),
            &[
                Coord::new(0, 1),
                Coord::new(2, 1),
                Coord::new(1, 2),
                Coord::new(1, 0)
            ]
        );
    }

    #[test]
    fn keep_filters() {
        let mut nb = Neighbors::new();
        let out = nb.cardinal(Coord::new(1, 1), Extent::new(3, 3), |c| c.row != 0);
        assert_eq!(out.len(), 3);
        assert!(!out.contains(&Coord::new(0, 1)));
    }

    #[test]
    fn single_cell_has_none() {
        let mut nb = Neighbors::new();
        assert!(nb.cardinal(Coord::ORIGIN, Extent::new(1, 1), |_| true).is_empty());
    }
}
