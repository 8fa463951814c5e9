// THEORY:
// `CellGeometry` is the bridge between pixel space and grid space. Cell sizes are
// never stored per cell; they are derived from the surface size divided by the
// fixed row and column counts, exactly as a frame is sliced into equal chunks.
//
// The geometry answers two questions:
// 1.  **Pixel -> Cell**: which grid cell does a surface-local point fall into?
//     (`cell_at`, bounds check only; aisle filtering belongs to the seat map.)
// 2.  **Cell -> Pixels**: which integer pixel rectangle does a cell cover?
//     (`pixel_rect`, used by painters. Adjacent rectangles tile the surface
//     without gaps or overlaps.)

use crate::core_modules::cell::cell::CellRef;

/// An integer pixel rectangle on a raster surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Cell sizes derived from the current surface size and the fixed grid dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct CellGeometry {
    rows: usize,
    columns: usize,
    surface_width: u32,
    surface_height: u32,
    /// Width of one cell in surface pixels.
    cell_width: f64,
    /// Height of one cell in surface pixels.
    cell_height: f64,
}

impl CellGeometry {
    pub fn new(rows: usize, columns: usize, surface_width: u32, surface_height: u32) -> Self {
        let mut geometry = Self {
            rows,
            columns,
            surface_width: 0,
            surface_height: 0,
            cell_width: 0.0,
            cell_height: 0.0,
        };
        geometry.resize(surface_width, surface_height);
        geometry
    }

    /// Recomputes the cell size for a new surface size. Row and column counts stay fixed.
    pub fn resize(&mut self, surface_width: u32, surface_height: u32) {
        self.surface_width = surface_width;
        self.surface_height = surface_height;
        self.cell_width = surface_width as f64 / self.columns.max(1) as f64;
        self.cell_height = surface_height as f64 / self.rows.max(1) as f64;
    }

    pub fn surface_size(&self) -> (u32, u32) {
        (self.surface_width, self.surface_height)
    }

    pub fn cell_size(&self) -> (f64, f64) {
        (self.cell_width, self.cell_height)
    }

    /// Maps a surface-local point to the cell beneath it.
    /// Points outside `[0, width) x [0, height)`, including NaN, map to `None`.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<CellRef> {
        let inside = x >= 0.0 && y >= 0.0 && x < self.surface_width as f64 && y < self.surface_height as f64;
        if !inside || self.rows == 0 || self.columns == 0 {
            return None;
        }

        // Clamp guards against rounding pushing a point just inside the edge past the last index.
        let row = ((y / self.cell_height).floor() as usize).min(self.rows - 1);
        let column = ((x / self.cell_width).floor() as usize).min(self.columns - 1);
        Some(CellRef::new(row, column))
    }

    /// The integer pixel rectangle covered by a cell.
    pub fn pixel_rect(&self, cell: CellRef) -> PixelRect {
        let x0 = (cell.column as f64 * self.cell_width).floor() as u32;
        let x1 = ((cell.column + 1) as f64 * self.cell_width).floor() as u32;
        let y0 = (cell.row as f64 * self.cell_height).floor() as u32;
        let y1 = ((cell.row + 1) as f64 * self.cell_height).floor() as u32;
        PixelRect {
            x: x0,
            y: y0,
            width: x1.saturating_sub(x0),
            height: y1.saturating_sub(y0),
        }
    }
}
