//! **ridgeway-core** — elevation grids and their plumbing.
//!
//! This crate provides the types shared across the *ridgeway* workspace:
//! grid coordinates, a row-major [`Matrix`], the immutable [`HeightMap`]
//! that searches run over, and the plain-text [`loader`].

pub mod geom;
pub mod heightmap;
pub mod loader;
pub mod matrix;

pub use geom::{Coord, Extent};
pub use heightmap::{Cost, HeightMap, UNREACHABLE};
pub use loader::{LoadError, LoadLimits};
pub use matrix::{GridError, Matrix};
