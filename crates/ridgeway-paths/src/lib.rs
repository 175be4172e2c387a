//! Minimum-cost routes across elevation grids.
//!
//! - [`MinHeap`]: a fixed-capacity binary min-heap with lazy deletion.
//! - [`GridSearch`]: Dijkstra from the top-left cell over any [`Terrain`],
//!   producing a [`ShortestPaths`] distance/predecessor pair.
//! - [`reconstruct`]: iterative path recovery from a predecessor grid.
//!
//! [`solve`] ties them together for the common case of routing a
//! [`HeightMap`] from its origin to its bottom-right corner.

mod heap;
mod neighbors;
mod reconstruct;
mod search;
mod traits;

pub use heap::{HeapEntry, HeapError, MinHeap};
pub use neighbors::Neighbors;
pub use reconstruct::{Route, reconstruct};
pub use search::{
    GridSearch, SearchConfig, SearchError, SearchStats, ShortestPaths, worst_case_capacity,
};
pub use traits::Terrain;

use ridgeway_core::HeightMap;

/// Cheapest route from the origin of `map` to its bottom-right cell.
pub fn solve(map: &HeightMap, config: &SearchConfig) -> Result<Route, SearchError> {
    GridSearch::new()
        .run(map, config)?
        .route_to(map.destination())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ridgeway_core::{Coord, Cost, Extent, UNREACHABLE};
    use ridgeway_gen::{GenConfig, HeightGen};

    /// Minimum cost over every simple path from the origin to the
    /// destination, by exhaustive depth-first enumeration.
    fn brute_force(map: &HeightMap) -> Cost {
        fn walk(
            map: &HeightMap,
            at: Coord,
            spent: Cost,
            seen: &mut Vec<Coord>,
            best: &mut Cost,
        ) {
            if at == map.destination() {
                *best = (*best).min(spent);
                return;
            }
            for (dr, dc) in [(-1, 0), (1, 0), (0, 1), (0, -1)] {
                let Some(next) = at.offset(dr, dc) else {
                    continue;
                };
                if !map.extent().contains(next) || seen.contains(&next) {
                    continue;
                }
                let step = map.edge_cost(at, next).unwrap();
                seen.push(next);
                walk(map, next, spent + step, seen, best);
                seen.pop();
            }
        }

        let mut best = UNREACHABLE;
        walk(map, map.origin(), 0, &mut vec![map.origin()], &mut best);
        best
    }

    fn assert_valid_path(map: &HeightMap, route: &Route) {
        let path = &route.path;
        assert_eq!(path.first(), Some(&map.origin()));
        assert_eq!(path.last(), Some(&map.destination()));
        for pair in path.windows(2) {
            assert!(pair[0].is_adjacent(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
        let mut sorted = path.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), path.len(), "path revisits a cell");
        // The path's own price is the reported cost.
        let priced: Cost = path
            .windows(2)
            .map(|p| map.edge_cost(p[0], p[1]).unwrap())
            .sum();
        assert_eq!(priced, route.cost);
    }

    #[test]
    fn flat_two_by_two_costs_two() {
        let map = HeightMap::flat(Extent::new(2, 2), 1, 0, 0).unwrap();
        let route = solve(&map, &SearchConfig::default()).unwrap();
        assert_eq!(route.cost, 2);
        assert_eq!(route.path.len(), 3);
        assert_valid_path(&map, &route);
    }

    #[test]
    fn peak_in_the_corner() {
        let map = HeightMap::from_rows(1, 1, vec![vec![0, 0], vec![0, 5]]).unwrap();
        let route = solve(&map, &SearchConfig::default()).unwrap();
        let flat_step = 1;
        let climb = 1 + 5 * 5;
        assert_eq!(route.cost, flat_step + climb);
        assert_valid_path(&map, &route);
    }

    #[test]
    fn hand_computed_three_by_three() {
        // Cheapest: (0,0) (1,0) (2,0) (2,1) (2,2) with diffs 1,1,0,1
        // costing 3+3+1+3 = 10 at step 1, coefficient 2.
        let map = HeightMap::from_rows(
            1,
            2,
            vec![vec![0, 3, 6], vec![1, 4, 7], vec![2, 2, 3]],
        )
        .unwrap();
        let route = solve(&map, &SearchConfig::default()).unwrap();
        assert_eq!(route.cost, 10);
        assert_eq!(brute_force(&map), 10);
        assert_eq!(
            route.path,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(2, 0),
                Coord::new(2, 1),
                Coord::new(2, 2),
            ]
        );
    }

    #[test]
    fn hand_computed_four_by_four_snake() {
        // A valley of zeros winds between ridges of nines. The destination
        // sits on a ridge, so the cheapest route follows the valley to (2,3)
        // and climbs once at the very end.
        let map = HeightMap::from_rows(
            1,
            1,
            vec![
                vec![0, 0, 0, 0],
                vec![9, 9, 9, 0],
                vec![0, 0, 0, 0],
                vec![0, 9, 9, 9],
            ],
        )
        .unwrap();
        let route = solve(&map, &SearchConfig::default()).unwrap();
        assert_eq!(brute_force(&map), route.cost);
        assert_valid_path(&map, &route);
        let valley = 5;
        let climb = 1 + 9 * 9;
        assert_eq!(route.cost, valley + climb);
        assert_eq!(route.path[route.path.len() - 2], Coord::new(2, 3));
    }

    #[test]
    fn matches_brute_force_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for (rows, cols) in [(3, 3), (4, 4), (2, 5), (3, 4), (1, 6)] {
            for coefficient in [0, 1, 3] {
                let cfg = GenConfig {
                    extent: Extent::new(rows, cols),
                    step_cost: 2,
                    height_coefficient: coefficient,
                    min_height: -4,
                    max_height: 6,
                };
                let mut generator = HeightGen::new(cfg, &mut rng).unwrap();
                for _ in 0..10 {
                    let map = generator.uniform();
                    let route = solve(&map, &SearchConfig::default()).unwrap();
                    assert_eq!(route.cost, brute_force(&map), "{}", map.to_text());
                    assert_valid_path(&map, &route);
                }
            }
        }
    }

    #[test]
    fn flat_grids_cost_step_times_manhattan() {
        for (rows, cols, step) in [(1, 1, 5), (1, 8, 3), (5, 1, 2), (7, 9, 4), (30, 20, 1)] {
            let extent = Extent::new(rows, cols);
            let expected = Cost::from(step) * Coord::ORIGIN.manhattan(extent.last().unwrap());

            let level = HeightMap::flat(extent, step, 7, 12).unwrap();
            let route = solve(&level, &SearchConfig::default()).unwrap();
            assert_eq!(route.cost, expected);
            assert_valid_path(&level, &route);

            let mut rng = StdRng::seed_from_u64(u64::from(rows * cols));
            let bumpy = HeightGen::new(
                GenConfig {
                    extent,
                    step_cost: step,
                    height_coefficient: 0,
                    min_height: -100,
                    max_height: 100,
                },
                &mut rng,
            )
            .unwrap()
            .uniform();
            assert_eq!(solve(&bumpy, &SearchConfig::default()).unwrap().cost, expected);
        }
    }

    #[test]
    fn hill_maps_give_valid_paths() {
        let cfg = GenConfig {
            extent: Extent::new(25, 40),
            step_cost: 3,
            height_coefficient: 2,
            min_height: 0,
            max_height: 50,
        };
        let mut generator = HeightGen::new(cfg, StdRng::seed_from_u64(42)).unwrap();
        for _ in 0..5 {
            let map = generator.hills(8, 2);
            let route = solve(&map, &SearchConfig::default()).unwrap();
            assert_valid_path(&map, &route);
        }
    }

    #[test]
    fn solving_twice_is_identical() {
        let mut generator = HeightGen::new(
            GenConfig {
                extent: Extent::new(12, 12),
                ..GenConfig::default()
            },
            StdRng::seed_from_u64(3),
        )
        .unwrap();
        let map = generator.uniform();
        assert_eq!(
            solve(&map, &SearchConfig::default()),
            solve(&map, &SearchConfig::default())
        );
    }

    #[test]
    fn legacy_seed_adds_one_step() {
        let map = HeightMap::from_rows(4, 1, vec![vec![0, 2], vec![1, 1]]).unwrap();
        let plain = solve(&map, &SearchConfig::default()).unwrap();
        let legacy = solve(&map, &SearchConfig::legacy(&map)).unwrap();
        assert_eq!(legacy.cost, plain.cost + 4);
        assert_eq!(legacy.path, plain.path);
    }
}
