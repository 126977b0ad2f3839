use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::Path;
use strokegeom::{Polyline, Vec2};

/// Read a polyline: `.csv` with `x`,`y` columns, otherwise JSON `[[x, y], ...]`.
pub fn read_polyline<P: AsRef<Path>>(path: P) -> Result<Polyline> {
    let path = path.as_ref();
    if path.extension().is_some_and(|ext| ext == "csv") {
        read_csv(path)
    } else {
        read_json(path)
    }
}

fn read_json(path: &Path) -> Result<Polyline> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let pts: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(pts.into_iter().map(|[x, y]| Vec2::new(x, y)).collect())
}

fn read_csv(path: &Path) -> Result<Polyline> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Vec2::new(x, y)),
            _ => bail!("{}: row {} is missing x or y", path.display(), row),
        }
    }
    Ok(out)
}

#[inline]
pub fn to_pairs(line: &[Vec2<f64>]) -> Vec<[f64; 2]> {
    line.iter().map(|p| [p.x, p.y]).collect()
}

/// Pretty JSON to `out` (parent dirs created) or to stdout.
pub fn write_output<T: Serialize>(value: &T, out: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating output dir {}", parent.display()))?;
                }
            }
            fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
        }
        None => println!("{text}"),
    }
    Ok(())
}
