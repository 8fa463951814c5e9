pub mod assets;
pub mod cell;
pub mod geometry;
pub mod glyph_font;
pub mod input;
pub mod painter;
pub mod seat_grid;
pub mod selection;
pub mod status;
