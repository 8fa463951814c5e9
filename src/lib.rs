// THEORY:
// This file is the entry point for the `cinema_seat` library crate. The public
// face of the crate is the `SeatMap` (in `seat_map`) together with its
// configuration (`config`) and error taxonomy (`error`). The building blocks it is
// made of (cells, grid, geometry, selection, glyphs, painters, input helpers) live
// in `core_modules` and are public for callers that want to assemble their own
// rendering or input pipeline around the same model.

pub mod config;
pub mod core_modules;
pub mod error;
pub mod seat_map;
