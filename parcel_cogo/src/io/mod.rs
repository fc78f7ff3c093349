//! Point file input and output.
//!
//! Point files are plain text with one `name,x,y` record per line. Blank
//! lines and lines starting with `#` are skipped.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::geometry::Position;
use crate::surveying::PointStore;

/// Reads a file to string.
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Parses point records into `store` and returns how many were added.
///
/// Nothing is added unless every record parses.
pub fn parse_points(text: &str, store: &mut PointStore) -> Result<usize> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() < 3 {
            return Err(Error::InvalidCoordinate {
                line: idx + 1,
                message: "expected name,x,y".to_string(),
            });
        }
        let coord = |s: &str| {
            s.parse::<f64>().map_err(|e| Error::InvalidCoordinate {
                line: idx + 1,
                message: format!("{s:?}: {e}"),
            })
        };
        let x = coord(parts[1])?;
        let y = coord(parts[2])?;
        records.push((parts[0], Position::new(x, y)));
    }

    let count = records.len();
    for (name, position) in records {
        store.add_point(name, position);
    }
    Ok(count)
}

/// Reads a point file into `store` and returns how many points were added.
pub fn read_points_csv(path: impl AsRef<Path>, store: &mut PointStore) -> Result<usize> {
    let path = path.as_ref();
    let text = read_to_string(path)?;
    let count = parse_points(&text, store)?;
    debug!("read {count} points from {}", path.display());
    Ok(count)
}

/// Writes every live point in `store` to a point file.
pub fn write_points_csv(path: impl AsRef<Path>, store: &PointStore) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    for (_, p) in store.iter() {
        writeln!(file, "{},{},{}", p.name, p.position.x, p.position.y)?;
    }
    file.flush()?;
    Ok(())
}
