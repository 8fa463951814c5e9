// THEORY:
// The `seat_map` module is the top-level API of the crate. A `SeatMap` owns the
// immutable grid, the current cell geometry, the user's selection and the cached
// background layer, and exposes the handful of operations a booking widget needs:
// render, hit-test, toggle, resize.
//
// Key architectural principles:
// 1.  **Gated Start**: `initialize` is the only suspend point. It validates the seat
//     data, prepares the glyphs under a timeout and paints the background. Any
//     failure aborts construction; there is no partially usable seat map.
// 2.  **Synchronous Interaction**: After construction everything is synchronous and
//     infallible. Clicking outside the surface, on an aisle, or on a taken seat is a
//     no-op resolved right here, not an error.
// 3.  **Model and Pixels Agree**: every change to the selection is immediately
//     followed by a redraw of exactly that cell, and a full render re-applies the
//     selection on top of the background.
// 4.  **Injected Collaborators**: drawing goes through a `SeatPainter` and
//     user-facing text through a `StatusSink`, so the model is independent of any
//     particular surface or display technology.

use std::fmt;

use image::RgbaImage;
use log::{debug, info};

use crate::config::{SeatData, SeatMapConfig};
use crate::core_modules::assets::SeatAssets;
use crate::core_modules::geometry::CellGeometry;
use crate::core_modules::selection::Selection;
use crate::error::{ConfigError, SeatMapError};

// Re-export the types callers need to drive a seat map.
pub use crate::core_modules::cell::cell::{CellKind, CellRef, Occupancy, SeatLabel, SeatVisual};
pub use crate::core_modules::painter::{RasterPainter, SeatPainter};
pub use crate::core_modules::seat_grid::SeatGrid;
pub use crate::core_modules::status::{LogStatus, StatusSink};

/// Shown when the user picks a seat someone else already reserved.
pub const TAKEN_SEAT_MESSAGE: &str = "seat already taken, please choose an empty seat";

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The seat joined the selection.
    Selected(SeatLabel),
    /// The seat left the selection.
    Deselected(SeatLabel),
    /// The seat was reserved at load time; nothing changed.
    AlreadyTaken,
    /// The cell is an aisle or outside the grid; nothing changed.
    Ignored,
}

impl ToggleOutcome {
    /// The status line for this outcome, if it produces one.
    pub fn message(&self) -> Option<String> {
        match self {
            ToggleOutcome::Selected(label) => Some(format!("selected seat: {label}")),
            ToggleOutcome::Deselected(label) => Some(format!("deselected seat: {label}")),
            ToggleOutcome::AlreadyTaken => Some(TAKEN_SEAT_MESSAGE.to_string()),
            ToggleOutcome::Ignored => None,
        }
    }
}

impl fmt::Display for ToggleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => f.write_str(&message),
            None => f.write_str("ignored"),
        }
    }
}

/// An interactive seat map over a fixed grid.
pub struct SeatMap<P: SeatPainter = RasterPainter, S: StatusSink = LogStatus> {
    grid: SeatGrid,
    geometry: CellGeometry,
    selection: Selection,
    painter: P,
    /// Static layer painted once at construction.
    background: P::Background,
    status: S,
}

impl<S: StatusSink> SeatMap<RasterPainter, S> {
    /// Validates `data` and `config`, prepares the seat glyphs within
    /// `config.asset_timeout`, and paints the cached background.
    pub async fn initialize(data: &SeatData, config: &SeatMapConfig, status: S) -> Result<Self, SeatMapError> {
        let grid = data.into_grid()?;
        config.validate()?;
        info!(
            "Initializing {}x{} seat map on a {}x{} surface",
            grid.rows(),
            grid.columns(),
            config.surface_width,
            config.surface_height
        );

        let assets = SeatAssets::prepare(&config.assets, config.asset_timeout).await?;
        let painter = RasterPainter::new(assets, config.label_color);
        Ok(Self::new(grid, painter, status, config.surface_width, config.surface_height)?)
    }

    /// A transparent surface matching the current geometry.
    pub fn blank_surface(&self) -> RgbaImage {
        let (width, height) = self.geometry.surface_size();
        RgbaImage::new(width, height)
    }
}

impl<P: SeatPainter, S: StatusSink> SeatMap<P, S> {
    /// Builds a seat map from an already validated grid and a ready painter.
    pub fn new(grid: SeatGrid, painter: P, status: S, surface_width: u32, surface_height: u32) -> Result<Self, ConfigError> {
        if surface_width == 0 || surface_height == 0 {
            return Err(ConfigError::EmptySurface {
                width: surface_width,
                height: surface_height,
            });
        }
        let geometry = CellGeometry::new(grid.rows(), grid.columns(), surface_width, surface_height);
        let background = painter.render_full(&grid, &geometry);
        debug!("Cached seat map background at {surface_width}x{surface_height}");

        Ok(Self {
            grid,
            geometry,
            selection: Selection::new(),
            painter,
            background,
            status,
        })
    }

    /// Draws the cached background, then the current selection on top of it.
    pub fn render(&self, surface: &mut P::Surface) {
        self.painter.blit(&self.background, surface);
        for cell in self.selection.iter() {
            self.painter
                .render_cell(surface, &self.background, *cell, &self.geometry, SeatVisual::Selected);
        }
    }

    /// The seat under a surface-local point. Points outside the surface and aisle
    /// cells yield `None`.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<CellRef> {
        let cell = self.geometry.cell_at(x, y)?;
        match self.grid.kind(cell)? {
            CellKind::Seat => Some(cell),
            CellKind::Aisle => None,
        }
    }

    /// Flips a seat in or out of the selection and repaints that one cell.
    pub fn toggle_seat(&mut self, surface: &mut P::Surface, cell: CellRef) -> ToggleOutcome {
        let Some(label) = self.grid.label(cell) else {
            debug!("Ignoring toggle on non-seat cell {cell}");
            return ToggleOutcome::Ignored;
        };

        let outcome = if self.grid.occupancy(cell) == Some(Occupancy::Taken) {
            debug!("Seat {cell} was already taken");
            ToggleOutcome::AlreadyTaken
        } else if self.selection.remove(cell) {
            self.painter
                .render_cell(surface, &self.background, cell, &self.geometry, SeatVisual::Free);
            ToggleOutcome::Deselected(label)
        } else {
            self.selection.insert(cell);
            self.painter
                .render_cell(surface, &self.background, cell, &self.geometry, SeatVisual::Selected);
            ToggleOutcome::Selected(label)
        };

        if let Some(message) = outcome.message() {
            self.status.show(&message);
        }
        outcome
    }

    /// Hit-tests a surface-local point and toggles the seat there, if any.
    pub fn click(&mut self, surface: &mut P::Surface, x: f64, y: f64) -> Option<ToggleOutcome> {
        let Some(cell) = self.hit_test(x, y) else {
            debug!("Click at ({x:.1}, {y:.1}) hit no seat");
            return None;
        };
        Some(self.toggle_seat(surface, cell))
    }

    /// Recomputes the cell size for a new surface size.
    ///
    /// The cached background is kept as painted at construction time, so after a
    /// resize full renders show it at its original pixel scale.
    pub fn update_geometry(&mut self, surface_width: u32, surface_height: u32) {
        debug!(
            "Surface resized from {:?} to {surface_width}x{surface_height}",
            self.geometry.surface_size()
        );
        self.geometry.resize(surface_width, surface_height);
    }

    /// Selected cells in the order they were picked.
    pub fn selections(&self) -> &[CellRef] {
        self.selection.as_slice()
    }

    /// Labels of the selected seats in the order they were picked.
    pub fn selected_labels(&self) -> Vec<SeatLabel> {
        self.selection.iter().filter_map(|cell| self.grid.label(*cell)).collect()
    }

    pub fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    pub fn geometry(&self) -> &CellGeometry {
        &self.geometry
    }

    pub fn background(&self) -> &P::Background {
        &self.background
    }

    pub fn painter(&self) -> &P {
        &self.painter
    }

    pub fn status(&self) -> &S {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Remembers the last visual painted per cell.
    #[derive(Default)]
    struct Canvas {
        blits: usize,
        cells: HashMap<CellRef, SeatVisual>,
    }

    struct RecordingPainter;

    impl SeatPainter for RecordingPainter {
        type Surface = Canvas;
        type Background = ();

        fn render_full(&self, _grid: &SeatGrid, _geometry: &CellGeometry) {}

        fn blit(&self, _background: &(), surface: &mut Canvas) {
            surface.blits += 1;
            surface.cells.clear();
        }

        fn render_cell(&self, surface: &mut Canvas, _: &(), cell: CellRef, _: &CellGeometry, visual: SeatVisual) {
            surface.cells.insert(cell, visual);
        }
    }

    fn seat_map() -> SeatMap<RecordingPainter, Vec<String>> {
        let grid = SeatData::fixture().into_grid().unwrap();
        SeatMap::new(grid, RecordingPainter, Vec::new(), 1040, 800).unwrap()
    }

    fn assert_no_drift(map: &SeatMap<RecordingPainter, Vec<String>>, canvas: &Canvas) {
        for (cell, visual) in &canvas.cells {
            assert_eq!(*visual == SeatVisual::Selected, map.selections().contains(cell), "cell {cell}");
        }
        for cell in map.selections() {
            assert_eq!(canvas.cells.get(cell), Some(&SeatVisual::Selected));
        }
    }

    #[test]
    fn rejects_surfaces_without_area() {
        let grid = SeatData::fixture().into_grid().unwrap();
        let result = SeatMap::new(grid, RecordingPainter, Vec::<String>::new(), 0, 800);
        assert!(matches!(result, Err(ConfigError::EmptySurface { width: 0, .. })));
    }

    #[test]
    fn hit_test_skips_aisles_and_outside_points() {
        let map = seat_map();
        assert_eq!(map.hit_test(330.0, 250.0), Some(CellRef::new(3, 4)));
        // Column 2 is an aisle in row 0.
        assert_eq!(map.hit_test(170.0, 10.0), None);
        // ... but not in the back row.
        assert_eq!(map.hit_test(170.0, 790.0), Some(CellRef::new(9, 2)));
        assert_eq!(map.hit_test(-1.0, 10.0), None);
        assert_eq!(map.hit_test(10.0, 800.0), None);
    }

    #[test_log::test]
    fn toggling_twice_round_trips_the_selection() {
        let mut map = seat_map();
        let mut canvas = Canvas::default();
        let seat = CellRef::new(3, 3);

        let first = map.toggle_seat(&mut canvas, seat);
        assert_eq!(first, ToggleOutcome::Selected(SeatLabel { row: 4, seat: 3 }));
        assert_eq!(map.selections(), &[seat]);
        assert_no_drift(&map, &canvas);

        let second = map.toggle_seat(&mut canvas, seat);
        assert_eq!(second, ToggleOutcome::Deselected(SeatLabel { row: 4, seat: 3 }));
        assert!(map.selections().is_empty());
        assert_eq!(canvas.cells.get(&seat), Some(&SeatVisual::Free));
        assert_no_drift(&map, &canvas);

        assert_eq!(
            map.status(),
            &vec!["selected seat: row 4 seat 3".to_string(), "deselected seat: row 4 seat 3".to_string()]
        );
    }

    #[test_log::test]
    fn taken_seats_never_change_the_selection() {
        let mut map = seat_map();
        let mut canvas = Canvas::default();
        for _ in 0..3 {
            assert_eq!(map.toggle_seat(&mut canvas, CellRef::new(3, 4)), ToggleOutcome::AlreadyTaken);
        }
        assert!(map.selections().is_empty());
        assert!(canvas.cells.is_empty());
        assert_eq!(map.status(), &vec![TAKEN_SEAT_MESSAGE.to_string(); 3]);
    }

    #[test]
    fn aisles_and_out_of_range_cells_are_silent_no_ops() {
        let mut map = seat_map();
        let mut canvas = Canvas::default();
        assert_eq!(map.toggle_seat(&mut canvas, CellRef::new(0, 2)), ToggleOutcome::Ignored);
        assert_eq!(map.toggle_seat(&mut canvas, CellRef::new(10, 0)), ToggleOutcome::Ignored);
        assert_eq!(map.click(&mut canvas, 5000.0, 5000.0), None);
        assert!(map.status().is_empty());
        assert!(canvas.cells.is_empty());
    }

    #[test]
    fn full_render_reapplies_the_selection() {
        let mut map = seat_map();
        let mut canvas = Canvas::default();
        map.click(&mut canvas, 10.0, 10.0);
        map.click(&mut canvas, 1000.0, 10.0);

        map.render(&mut canvas);
        assert_eq!(canvas.blits, 1);
        assert_eq!(canvas.cells.len(), 2);
        assert_no_drift(&map, &canvas);
        let labels: Vec<String> = map.selected_labels().iter().map(|l| l.to_string()).collect();
        assert_eq!(labels, vec!["row 1 seat 1", "row 1 seat 11"]);
    }

    #[test]
    fn resize_uses_new_cell_dimensions() {
        let mut map = seat_map();
        let mut canvas = Canvas::default();
        map.update_geometry(520, 400);
        // (6, 8) is an aisle at the new scale.
        assert_eq!(map.hit_test(330.0, 250.0), None);
        assert_eq!(map.hit_test(290.0, 250.0), Some(CellRef::new(6, 7)));
        assert_eq!(map.hit_test(600.0, 10.0), None);
        assert_eq!(
            map.click(&mut canvas, 210.0, 250.0),
            Some(ToggleOutcome::Selected(SeatLabel { row: 7, seat: 5 }))
        );
    }

    #[test]
    fn outcomes_render_their_status_lines() {
        let label = SeatLabel { row: 1, seat: 3 };
        assert_eq!(ToggleOutcome::Selected(label).to_string(), "selected seat: row 1 seat 3");
        assert_eq!(ToggleOutcome::Deselected(label).to_string(), "deselected seat: row 1 seat 3");
        assert_eq!(ToggleOutcome::AlreadyTaken.to_string(), TAKEN_SEAT_MESSAGE);
        assert_eq!(ToggleOutcome::Ignored.message(), None);
    }
}
