//! Plain-text height-map loader.
//!
//! ## Format
//!
//! Whitespace-separated integers:
//! ```text
//! step_cost height_coefficient
//! rows cols
//! h(0,0) h(0,1) ... h(0,cols-1)
//! ...
//! h(rows-1,0) ...   h(rows-1,cols-1)
//! ```
//! Line breaks carry no meaning; only the token order matters.

use std::fmt;
use std::io;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use crate::geom::Extent;
use crate::heightmap::HeightMap;
use crate::matrix::{GridError, Matrix};

/// Largest accepted number of rows or columns unless configured otherwise.
pub const DEFAULT_MAX_EXTENT: u32 = 250;

/// Limits enforced while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadLimits {
    /// Maximum number of rows and of columns.
    pub max_extent: u32,
}

impl Default for LoadLimits {
    fn default() -> Self {
        Self {
            max_extent: DEFAULT_MAX_EXTENT,
        }
    }
}

/// Errors produced while reading a height map.
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    /// The input ended before `what` was read.
    Missing { what: &'static str },
    /// A token could not be parsed as `what`.
    InvalidNumber { what: &'static str, token: String },
    /// The declared dimensions exceed [`LoadLimits::max_extent`].
    TooLarge { extent: Extent, max: u32 },
    /// Tokens remain after the last height.
    TrailingData { token: String },
    /// A structured (non-text) document could not be decoded.
    Decode {
        format: &'static str,
        message: String,
    },
    Grid(GridError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read height map: {e}"),
            Self::Missing { what } => write!(f, "unexpected end of input, expected {what}"),
            Self::InvalidNumber { what, token } => {
                write!(f, "invalid {what}: \u{201c}{token}\u{201d}")
            }
            Self::TooLarge { extent, max } => {
                write!(f, "grid {extent} exceeds the maximum of {max} per dimension")
            }
            Self::TrailingData { token } => {
                write!(f, "unexpected data after the last height: \u{201c}{token}\u{201d}")
            }
            Self::Decode { format, message } => {
                write!(f, "malformed {format} height map: {message}")
            }
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for LoadError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Read and parse a height map from a file.
pub fn load(path: impl AsRef<Path>, limits: &LoadLimits) -> Result<HeightMap, LoadError> {
    let path = path.as_ref();
    log::debug!("loading height map from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    parse(&text, limits)
}

/// Parse a height map from text.
pub fn parse(text: &str, limits: &LoadLimits) -> Result<HeightMap, LoadError> {
    let mut tokens = Tokens(text.split_whitespace());

    let step_cost: u32 = tokens.next("step cost")?;
    let height_coefficient: u32 = tokens.next("height coefficient")?;
    let rows: u32 = tokens.next("row count")?;
    let cols: u32 = tokens.next("column count")?;

    let extent = Extent::new(rows, cols);
    if extent.is_empty() {
        return Err(GridError::EmptyDimensions(extent).into());
    }
    if rows > limits.max_extent || cols > limits.max_extent {
        return Err(LoadError::TooLarge {
            extent,
            max: limits.max_extent,
        });
    }

    // The header is untrusted; every height takes at least two bytes.
    let mut heights = Vec::with_capacity(extent.len().min(text.len() / 2 + 1));
    for _ in 0..extent.len() {
        heights.push(tokens.next::<i32>("height")?);
    }
    if let Some(token) = tokens.0.next() {
        return Err(LoadError::TrailingData {
            token: token.to_string(),
        });
    }

    log::debug!(
        "parsed {extent} height map (step cost {step_cost}, height coefficient {height_coefficient})"
    );
    Ok(HeightMap::new(
        step_cost,
        height_coefficient,
        Matrix::from_vec(extent, heights)?,
    ))
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl Tokens<'_> {
    fn next<T: FromStr>(&mut self, what: &'static str) -> Result<T, LoadError> {
        let token = self.0.next().ok_or(LoadError::Missing { what })?;
        token.parse().map_err(|_| LoadError::InvalidNumber {
            what,
            token: token.to_string(),
        })
    }
}
