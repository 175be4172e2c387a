//! Route output.

use std::io::{self, Write};

use ridgeway_paths::Route;

/// Marks the end of the coordinate list in text output.
pub const PATH_TERMINATOR: &str = "-1 -1";

/// Write one `row col` line per cell, the terminator line, then the cost.
pub fn write_text(out: &mut impl Write, route: &Route) -> io::Result<()> {
    for c in &route.path {
        writeln!(out, "{} {}", c.row, c.col)?;
    }
    writeln!(out, "{PATH_TERMINATOR}")?;
    writeln!(out, "{}", route.cost)
}

#[derive(serde::Serialize)]
struct JsonRoute {
    path: Vec<[u32; 2]>,
    cost: u64,
}

/// Write `{"path":[[row,col],...],"cost":N}` followed by a newline.
pub fn write_json(out: &mut impl Write, route: &Route) -> io::Result<()> {
    let json = JsonRoute {
        path: route.path.iter().map(|c| [c.row, c.col]).collect(),
        cost: route.cost,
    };
    serde_json::to_writer(&mut *out, &json)?;
    writeln!(out)
}
