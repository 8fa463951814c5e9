// THEORY:
// Failures in the seat map only happen while it is being built. Once a `SeatMap`
// exists, every interaction (hit-testing, toggling, resizing) resolves locally and
// returns a value. The taxonomy therefore has two fatal families:
// 1.  **ConfigError**: the seat data itself is unusable (empty, ragged, mismatched
//     layout/occupancy dimensions, unknown cell codes) or the surface has no area.
// 2.  **AssetError**: the seat glyph images could not be prepared in time.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Malformed or mismatched seat data supplied at initialization.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{matrix} matrix has no rows")]
    EmptyMatrix { matrix: &'static str },
    #[error("{matrix} matrix row {row} has no columns")]
    EmptyRow { matrix: &'static str, row: usize },
    #[error("{matrix} matrix row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        matrix: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("layout has (rows, columns) {layout:?} but occupancy has {occupancy:?}")]
    DimensionMismatch {
        layout: (usize, usize),
        occupancy: (usize, usize),
    },
    #[error("{matrix} matrix has invalid value {value} at row {row}, column {column}")]
    InvalidCellValue {
        matrix: &'static str,
        row: usize,
        column: usize,
        value: u8,
    },
    #[error("surface must have a non-zero area, got {width}x{height}")]
    EmptySurface { width: u32, height: u32 },
    #[error("failed to parse seat data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read seat data from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Seat glyph preparation failed or did not finish in time.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load seat image {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("seat images were not ready within {timeout:?}")]
    Timeout { timeout: Duration },
    #[error("seat image loader task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Everything that can abort `SeatMap` construction.
#[derive(Debug, Error)]
pub enum SeatMapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Asset(#[from] AssetError),
}
