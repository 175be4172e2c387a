//! Random elevation grids.
//!
//! Provides two generators:
//! - **Uniform**: every cell gets an independent height from the range.
//! - **Hills**: random walks raise ridges, then a smoothing pass softens
//!   them into slopes.

use std::fmt;

use rand::Rng;
use ridgeway_core::{Coord, Extent, HeightMap, Matrix};

/// Shape and price settings for generated grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenConfig {
    pub extent: Extent,
    pub step_cost: u32,
    pub height_coefficient: u32,
    /// Lowest generated height (inclusive).
    pub min_height: i32,
    /// Highest generated height (inclusive).
    pub max_height: i32,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            extent: Extent::new(10, 10),
            step_cost: 1,
            height_coefficient: 1,
            min_height: 0,
            max_height: 9,
        }
    }
}

/// Invalid generator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    EmptyExtent(Extent),
    InvertedRange { min: i32, max: i32 },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyExtent(e) => write!(f, "cannot generate an empty {e} grid"),
            Self::InvertedRange { min, max } => {
                write!(f, "minimum height {min} is above maximum height {max}")
            }
        }
    }
}

impl std::error::Error for GenError {}

/// Height-map generator driven by `rng`.
pub struct HeightGen<R: Rng> {
    pub rng: R,
    config: GenConfig,
}

impl<R: Rng> HeightGen<R> {
    /// Validate `config` and create a generator.
    pub fn new(config: GenConfig, rng: R) -> Result<Self, GenError> {
        if config.extent.is_empty() {
            return Err(GenError::EmptyExtent(config.extent));
        }
        if config.min_height > config.max_height {
            return Err(GenError::InvertedRange {
                min: config.min_height,
                max: config.max_height,
            });
        }
        Ok(Self { rng, config })
    }

    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    /// Independent uniform heights in `[min_height, max_height]`.
    pub fn uniform(&mut self) -> HeightMap {
        let GenConfig {
            extent,
            min_height,
            max_height,
            ..
        } = self.config;
        let mut heights = Matrix::new(extent, min_height);
        for c in extent {
            heights[c] = self.rng.random_range(min_height..=max_height);
        }
        self.finish(heights)
    }

    /// Raise `count` random-walk ridges, then apply `passes` rounds of
    /// 4-neighbour averaging.
    pub fn hills(&mut self, count: usize, passes: usize) -> HeightMap {
        let GenConfig {
            extent,
            min_height,
            max_height,
            ..
        } = self.config;
        let span = i64::from(max_height) - i64::from(min_height);
        let max_lift = (span / 4).max(1);
        let walk_len = (extent.rows as usize + extent.cols as usize).max(1);

        let mut heights = Matrix::new(extent, i64::from(min_height));
        for _ in 0..count {
            let mut pos = Coord::new(
                self.rng.random_range(0..extent.rows),
                self.rng.random_range(0..extent.cols),
            );
            for _ in 0..walk_len {
                let lift = self.rng.random_range(1..=max_lift);
                heights[pos] = (heights[pos] + lift).min(i64::from(max_height));
                let next = self.step(pos);
                if extent.contains(next) {
                    pos = next;
                }
            }
        }

        let mut scratch = heights.clone();
        for _ in 0..passes {
            for c in extent {
                let mut sum = heights[c];
                let mut n = 1;
                for (dr, dc) in [(-1, 0), (1, 0), (0, 1), (0, -1)] {
                    if let Some(h) = c.offset(dr, dc).and_then(|nc| heights.get(nc)) {
                        sum += h;
                        n += 1;
                    }
                }
                scratch[c] = sum / n;
            }
            std::mem::swap(&mut heights, &mut scratch);
        }

        let mut out = Matrix::new(extent, min_height);
        for (c, &h) in heights.iter() {
            // Averages of in-range values stay in range.
            out[c] = h.clamp(i64::from(min_height), i64::from(max_height)) as i32;
        }
        log::debug!("generated {extent} hill map ({count} ridges, {passes} smoothing passes)");
        self.finish(out)
    }

    /// A random orthogonal neighbour of `p`, or `p` itself at the edge of
    /// the coordinate space.
    fn step(&mut self, p: Coord) -> Coord {
        let (dr, dc) = match self.rng.random_range(0..4u32) {
            0 => (-1, 0),
            1 => (1, 0),
            2 => (0, 1),
            _ => (0, -1),
        };
        p.offset(dr, dc).unwrap_or(p)
    }

    fn finish(&self, heights: Matrix<i32>) -> HeightMap {
        HeightMap::new(
            self.config.step_cost,
            self.config.height_coefficient,
            heights,
        )
    }
}
