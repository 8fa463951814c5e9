// THEORY:
// Rendering is split into two tiers so the expensive part happens once:
// 1.  **render_full**: paints every cell in its resting state (free glyph for free
//     seats, taken glyph for taken cells, nothing for aisles) plus the row index in
//     the first cell of every row. The result is the cached background. It never
//     changes after initialization.
// 2.  **blit / render_cell**: a full redraw copies the cached background onto the
//     surface in one operation; a toggle repaints exactly one cell.
//
// `SeatPainter` is the contract between the seat map and a drawing technology. The
// seat map never touches pixels itself. `RasterPainter` implements the contract on
// top of `image::RgbaImage`; other environments (textures, retained scenes, tests)
// provide their own implementation with their own background type.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::core_modules::assets::SeatAssets;
use crate::core_modules::cell::cell::{CellKind, CellRef, Occupancy, SeatVisual};
use crate::core_modules::geometry::{CellGeometry, PixelRect};
use crate::core_modules::glyph_font::{self, GLYPH_ROWS};
use crate::core_modules::seat_grid::SeatGrid;

/// The default colour of the row index labels (`#bfbfbf`).
pub const DEFAULT_LABEL_COLOR: [u8; 4] = [191, 191, 191, 255];

/// Two-tier rendering contract used by `SeatMap`.
pub trait SeatPainter {
    /// The drawable the seat map is shown on.
    type Surface;
    /// The cached static layer produced once by `render_full`.
    type Background;

    /// Paints every cell of `grid` in its resting visual state.
    fn render_full(&self, grid: &SeatGrid, geometry: &CellGeometry) -> Self::Background;

    /// Copies the cached background onto the surface in one operation.
    fn blit(&self, background: &Self::Background, surface: &mut Self::Surface);

    /// Repaints a single cell in `visual` state.
    fn render_cell(
        &self,
        surface: &mut Self::Surface,
        background: &Self::Background,
        cell: CellRef,
        geometry: &CellGeometry,
        visual: SeatVisual,
    );
}

/// Paints the seat map into `RgbaImage` surfaces using glyph images.
#[derive(Debug, Clone)]
pub struct RasterPainter {
    assets: SeatAssets,
    label_color: Rgba<u8>,
}

impl RasterPainter {
    pub fn new(assets: SeatAssets, label_color: [u8; 4]) -> Self {
        Self {
            assets,
            label_color: Rgba(label_color),
        }
    }

    pub fn assets(&self) -> &SeatAssets {
        &self.assets
    }

    /// Scales `glyph` to the cell rectangle and alpha-blends it onto `target`.
    fn stamp(target: &mut RgbaImage, glyph: &RgbaImage, rect: PixelRect) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let scaled = imageops::resize(glyph, rect.width, rect.height, FilterType::Triangle);
        imageops::overlay(target, &scaled, rect.x as i64, rect.y as i64);
    }

    /// Draws the 1-based row number roughly centred in the row's first cell.
    fn draw_row_label(&self, target: &mut RgbaImage, row: usize, rect: PixelRect) {
        let text = (row + 1).to_string();
        let scale = (rect.height / (GLYPH_ROWS * 3)).max(1);
        let width = glyph_font::text_width(&text, scale);
        let height = GLYPH_ROWS * scale;
        let x = rect.x + rect.width.saturating_sub(width) / 2;
        let y = rect.y + rect.height.saturating_sub(height) / 2;
        glyph_font::draw_text(target, &text, x, y, scale, self.label_color);
    }
}

impl SeatPainter for RasterPainter {
    type Surface = RgbaImage;
    type Background = RgbaImage;

    fn render_full(&self, grid: &SeatGrid, geometry: &CellGeometry) -> RgbaImage {
        let (width, height) = geometry.surface_size();
        let mut background = RgbaImage::new(width, height);

        for (cell, kind, occupancy) in grid.cells() {
            let rect = geometry.pixel_rect(cell);
            match (kind, occupancy) {
                (_, Occupancy::Taken) => Self::stamp(&mut background, &self.assets.taken_seat, rect),
                (CellKind::Seat, Occupancy::Free) => Self::stamp(&mut background, &self.assets.free_seat, rect),
                (CellKind::Aisle, Occupancy::Free) => {}
            }
            if cell.column == 0 {
                self.draw_row_label(&mut background, cell.row, rect);
            }
        }
        background
    }

    fn blit(&self, background: &RgbaImage, surface: &mut RgbaImage) {
        imageops::replace(surface, background, 0, 0);
    }

    fn render_cell(
        &self,
        surface: &mut RgbaImage,
        background: &RgbaImage,
        cell: CellRef,
        geometry: &CellGeometry,
        visual: SeatVisual,
    ) {
        let rect = geometry.pixel_rect(cell);

        // Restore the resting pixels first so a deselect leaves nothing behind.
        let resting = imageops::crop_imm(background, rect.x, rect.y, rect.width, rect.height).to_image();
        imageops::replace(surface, &resting, rect.x as i64, rect.y as i64);

        if visual == SeatVisual::Selected {
            Self::stamp(surface, &self.assets.taken_seat, rect);
        }
    }
}
