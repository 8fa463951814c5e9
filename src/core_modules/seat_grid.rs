// THEORY:
// The `SeatGrid` is the immutable model of the auditorium. It owns two matrices of
// identical shape: the layout (which cells are seats and which are aisles) and the
// occupancy (which seats were already reserved when the data was loaded).
//
// Key architectural principles:
// 1.  **Validate Once**: Both matrices are checked for emptiness, raggedness and
//     matching dimensions in `new`. A grid that exists is always rectangular and
//     consistent, so no other module re-checks shapes.
// 2.  **Flattened Storage**: Cells are stored row-major in a single `Vec`, indexed
//     by `row * columns + column`, the same way a frame buffer is addressed.
// 3.  **Aisle-Aware Numbering**: The seat number shown to users skips aisles. It is
//     derived on demand from the layout row rather than stored.

use crate::core_modules::cell::cell::{CellKind, CellRef, Occupancy, SeatLabel};
use crate::error::ConfigError;

/// A validated, rectangular seat layout with its occupancy.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatGrid {
    rows: usize,
    columns: usize,
    /// Row-major layout cells.
    layout: Vec<CellKind>,
    /// Row-major occupancy cells, same shape as `layout`.
    occupancy: Vec<Occupancy>,
}

impl SeatGrid {
    /// Builds a grid from row-major matrices, rejecting empty, ragged or mismatched input.
    pub fn new(layout: Vec<Vec<CellKind>>, occupancy: Vec<Vec<Occupancy>>) -> Result<Self, ConfigError> {
        let layout_shape = Self::shape_of("layout", &layout)?;
        let occupancy_shape = Self::shape_of("occupancy", &occupancy)?;

        if layout_shape != occupancy_shape {
            return Err(ConfigError::DimensionMismatch {
                layout: layout_shape,
                occupancy: occupancy_shape,
            });
        }

        let (rows, columns) = layout_shape;
        Ok(Self {
            rows,
            columns,
            layout: layout.into_iter().flatten().collect(),
            occupancy: occupancy.into_iter().flatten().collect(),
        })
    }

    fn shape_of<T>(matrix: &'static str, cells: &[Vec<T>]) -> Result<(usize, usize), ConfigError> {
        let first = cells.first().ok_or(ConfigError::EmptyMatrix { matrix })?;
        let columns = first.len();
        if columns == 0 {
            return Err(ConfigError::EmptyRow { matrix, row: 0 });
        }
        for (row, cells_in_row) in cells.iter().enumerate().skip(1) {
            if cells_in_row.is_empty() {
                return Err(ConfigError::EmptyRow { matrix, row });
            }
            if cells_in_row.len() != columns {
                return Err(ConfigError::RaggedRow {
                    matrix,
                    row,
                    expected: columns,
                    found: cells_in_row.len(),
                });
            }
        }
        Ok((cells.len(), columns))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn contains(&self, cell: CellRef) -> bool {
        cell.row < self.rows && cell.column < self.columns
    }

    fn index(&self, cell: CellRef) -> Option<usize> {
        self.contains(cell).then(|| cell.row * self.columns + cell.column)
    }

    /// The layout kind of a cell, or `None` when it lies outside the grid.
    pub fn kind(&self, cell: CellRef) -> Option<CellKind> {
        self.index(cell).map(|i| self.layout[i])
    }

    /// The load-time occupancy of a cell, or `None` when it lies outside the grid.
    pub fn occupancy(&self, cell: CellRef) -> Option<Occupancy> {
        self.index(cell).map(|i| self.occupancy[i])
    }

    /// A cell can join a selection only if it is a free seat.
    pub fn is_selectable(&self, cell: CellRef) -> bool {
        self.kind(cell) == Some(CellKind::Seat) && self.occupancy(cell) == Some(Occupancy::Free)
    }

    /// The 1-based seat number of a seat cell with aisles to its left not counted.
    /// Returns `None` for aisles and out-of-range cells.
    pub fn seat_number(&self, cell: CellRef) -> Option<usize> {
        if self.kind(cell)? != CellKind::Seat {
            return None;
        }
        let row_start = cell.row * self.columns;
        let aisles_before = self.layout[row_start..row_start + cell.column]
            .iter()
            .filter(|kind| **kind == CellKind::Aisle)
            .count();
        Some(cell.column + 1 - aisles_before)
    }

    /// The user-facing label of a seat cell.
    pub fn label(&self, cell: CellRef) -> Option<SeatLabel> {
        self.seat_number(cell).map(|seat| SeatLabel { row: cell.row + 1, seat })
    }

    /// Every cell in row-major order together with its kind and occupancy.
    pub fn cells(&self) -> impl Iterator<Item = (CellRef, CellKind, Occupancy)> + '_ {
        self.layout
            .iter()
            .zip(self.occupancy.iter())
            .enumerate()
            .map(|(i, (kind, occupancy))| (CellRef::new(i / self.columns, i % self.columns), *kind, *occupancy))
    }
}
