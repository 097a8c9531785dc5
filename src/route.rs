use crate::error::{PlotError, Result};

use serde_pickle::DeOptions;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// File extension of serialized route blobs.
pub const ROUTE_EXTENSION: &str = "bin";

/// Minimum points for a non-degenerate polygon.
const MIN_POLYGON_POINTS: usize = 3;

/// Loads one route blob: a pickle-encoded sequence of (x, y) pairs.
///
/// # Errors
/// Returns error if the file cannot be read, the blob does not decode, or it
/// holds fewer than 3 points (degenerate polygon).
pub fn load_route<P: AsRef<Path>>(path: P) -> Result<Vec<(f64, f64)>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let points: Vec<(f64, f64)> = serde_pickle::from_reader(BufReader::new(file), DeOptions::new())?;

    if points.len() < MIN_POLYGON_POINTS {
        return Err(PlotError::Route {
            path: path.to_path_buf(),
            message: format!("polygon needs at least 3 points, got {}", points.len()),
        });
    }

    Ok(points)
}

/// Returns the boundary with the first point appended, closing the ring.
pub fn closed_ring(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut ring = points.to_vec();
    if let Some(&first) = points.first() {
        ring.push(first);
    }
    ring
}

/// Filename minus the `.bin` extension; used as chart title and output stem.
pub fn route_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Output image path for a route: `<plots_dir>/<stem>.png`.
pub fn output_path(plots_dir: &Path, stem: &str) -> PathBuf {
    plots_dir.join(format!("{stem}.png"))
}

/// Lists every `.bin` file in the routes directory, in directory order.
/// An empty directory yields an empty list; a missing one is an error.
pub fn scan_routes<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) == Some(ROUTE_EXTENSION) {
            files.push(path);
        }
    }
    Ok(files)
}
