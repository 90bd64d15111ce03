//! Input collection: point flags, CSV vertex tables, and default geometry.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use rectclip::Point;
use std::ops::RangeInclusive;
use std::path::Path;

/// Vertex counts accepted from the command line.
pub const VERTEX_RANGE: RangeInclusive<usize> = 3..=10;

/// Parse `"x,y"` into a point. Used as a clap value parser.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|e| format!("bad y in `{s}`: {e}"))?;
    if !x.is_finite() || !y.is_finite() {
        return Err(format!("coordinates must be finite, got `{s}`"));
    }
    Ok(Point::new(x, y))
}

/// Diagonal vertices `(i, i)` for `i in 0..n`, the starting values of the
/// interactive vertex inputs.
pub fn diagonal_vertices(n: usize) -> Vec<Point> {
    (0..n).map(|i| Point::new(i as f64, i as f64)).collect()
}

pub fn check_vertex_count(n: usize) -> Result<()> {
    if !VERTEX_RANGE.contains(&n) {
        bail!(
            "polygon has {n} vertices; expected {}..={}",
            VERTEX_RANGE.start(),
            VERTEX_RANGE.end()
        );
    }
    Ok(())
}

/// Read polygon vertices from a CSV with `x` and `y` columns (header required).
pub fn read_vertices_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    tracing::info!(rows = df.height(), path = %path.display(), "vertices_csv");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => out.push(Point::new(x, y)),
            (Some(_), Some(_)) => bail!("row {row} of {} has a non-finite coordinate", path.display()),
            _ => bail!("row {row} of {} has a missing coordinate", path.display()),
        }
    }
    Ok(out)
}
