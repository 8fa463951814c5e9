// THEORY:
// Configuration is split between how the seat map is shown (`SeatMapConfig`) and
// what it shows (`SeatData`). The seat data source speaks the compact 0/1 matrix
// format used by booking back-ends:
//   layout: 1 = seat, 0 = aisle
//   taken:  1 = already reserved, 0 = free
// It is validated once, converted to a `SeatGrid`, and never consulted again.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core_modules::assets::AssetSource;
use crate::core_modules::cell::cell::{CellKind, Occupancy};
use crate::core_modules::painter::DEFAULT_LABEL_COLOR;
use crate::core_modules::seat_grid::SeatGrid;
use crate::error::ConfigError;

/// How long seat glyph preparation may take before initialization fails.
pub const DEFAULT_ASSET_TIMEOUT: Duration = Duration::from_secs(5);

/// Display-side settings for a `SeatMap`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatMapConfig {
    /// Surface width in pixels.
    pub surface_width: u32,
    /// Surface height in pixels.
    pub surface_height: u32,
    pub assets: AssetSource,
    pub asset_timeout: Duration,
    /// RGBA colour of the row index labels.
    pub label_color: [u8; 4],
}

impl Default for SeatMapConfig {
    fn default() -> Self {
        Self {
            surface_width: 1040,
            surface_height: 800,
            assets: AssetSource::Builtin,
            asset_timeout: DEFAULT_ASSET_TIMEOUT,
            label_color: DEFAULT_LABEL_COLOR,
        }
    }
}

impl SeatMapConfig {
    /// Rejects surfaces without area.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Err(ConfigError::EmptySurface {
                width: self.surface_width,
                height: self.surface_height,
            });
        }
        Ok(())
    }
}

/// Seat layout and occupancy as supplied by a seat data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatData {
    /// `1` for a seat, `0` for an aisle.
    pub layout: Vec<Vec<u8>>,
    /// `1` for a seat reserved by someone else, `0` for a free cell.
    pub taken: Vec<Vec<u8>>,
}

impl SeatData {
    /// The reference auditorium: 10 rows of 13 cells with aisles at columns 2 and 8
    /// (except the back row) and a few blocks of reserved seats.
    pub fn fixture() -> Self {
        let aisled_row = vec![1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1];
        let mut layout = vec![aisled_row; 9];
        layout.push(vec![1; 13]);

        let mut taken = vec![vec![0; 13]; 10];
        for row in 3..=5 {
            for column in 4..=7 {
                taken[row][column] = 1;
            }
        }
        taken[6][6] = 1;
        taken[6][7] = 1;
        taken[9][8] = 1;
        taken[9][9] = 1;

        Self { layout, taken }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: PathBuf::from(path),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Decodes both matrices and validates them into a `SeatGrid`.
    pub fn into_grid(&self) -> Result<SeatGrid, ConfigError> {
        let layout = decode("layout", &self.layout, |flag| match flag {
            1 => Some(CellKind::Seat),
            0 => Some(CellKind::Aisle),
            _ => None,
        })?;
        let occupancy = decode("taken", &self.taken, |flag| match flag {
            1 => Some(Occupancy::Taken),
            0 => Some(Occupancy::Free),
            _ => None,
        })?;
        SeatGrid::new(layout, occupancy)
    }
}

fn decode<T>(
    matrix: &'static str,
    flags: &[Vec<u8>],
    map: impl Fn(u8) -> Option<T>,
) -> Result<Vec<Vec<T>>, ConfigError> {
    flags
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(column, &value)| {
                    map(value).ok_or(ConfigError::InvalidCellValue {
                        matrix,
                        row,
                        column,
                        value,
                    })
                })
                .collect::<Result<Vec<T>, ConfigError>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::cell::cell::CellRef;

    #[test]
    fn fixture_is_a_valid_ten_by_thirteen_grid() {
        let grid = SeatData::fixture().into_grid().unwrap();
        assert_eq!((grid.rows(), grid.columns()), (10, 13));
        assert_eq!(grid.kind(CellRef::new(0, 2)), Some(CellKind::Aisle));
        assert_eq!(grid.kind(CellRef::new(9, 2)), Some(CellKind::Seat));
        assert_eq!(grid.occupancy(CellRef::new(3, 4)), Some(Occupancy::Taken));
        assert_eq!(grid.occupancy(CellRef::new(6, 5)), Some(Occupancy::Free));
        assert_eq!(grid.occupancy(CellRef::new(9, 9)), Some(Occupancy::Taken));
        let taken = grid.cells().filter(|(_, _, o)| *o == Occupancy::Taken).count();
        assert_eq!(taken, 16);
    }

    #[test]
    fn parses_json_seat_data() {
        let data = SeatData::from_json_str(r#"{"layout": [[1, 0, 1]], "taken": [[0, 0, 1]]}"#).unwrap();
        let grid = data.into_grid().unwrap();
        assert_eq!(grid.kind(CellRef::new(0, 1)), Some(CellKind::Aisle));
        assert_eq!(grid.occupancy(CellRef::new(0, 2)), Some(Occupancy::Taken));
    }

    #[test]
    fn rejects_unknown_cell_codes() {
        let data = SeatData {
            layout: vec![vec![1, 2]],
            taken: vec![vec![0, 0]],
        };
        let err = data.into_grid().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidCellValue { matrix: "layout", row: 0, column: 1, value: 2 }
        ));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(SeatData::from_json_str("{\"layout\": "), Err(ConfigError::Parse(_))));
        assert!(matches!(
            SeatData::from_path("/definitely/not/here.json"),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn default_config_matches_reference_widget() {
        let config = SeatMapConfig::default();
        assert_eq!(config.asset_timeout, Duration::from_secs(5));
        assert!(config.validate().is_ok());

        let flat = SeatMapConfig {
            surface_height: 0,
            ..SeatMapConfig::default()
        };
        assert!(matches!(flat.validate(), Err(ConfigError::EmptySurface { height: 0, .. })));
    }
}
