// THEORY:
// The `cell` module holds the smallest units of the seat map. Like a pixel in an
// image, a cell is a "dumb" value: it knows what it is (a seat or an aisle, free or
// taken) and where it is, but nothing about its neighbours or how it is drawn.
//
// Everything here is `Copy` so the grid, the selection set and the renderer can
// pass cells around freely without sharing ownership.

pub mod cell {
    use std::fmt;

    /// The structural role of a cell in the auditorium layout.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum CellKind {
        Seat,
        Aisle,
    }

    /// Whether a cell was already reserved by someone else when the data was loaded.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Occupancy {
        Free,
        Taken,
    }

    /// A (row, column) position in the grid, both 0-based.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct CellRef {
        pub row: usize,
        pub column: usize,
    }

    impl CellRef {
        pub fn new(row: usize, column: usize) -> Self {
            Self { row, column }
        }
    }

    impl fmt::Display for CellRef {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "({}, {})", self.row, self.column)
        }
    }

    /// The visual state a single cell can be redrawn in after the background is cached.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum SeatVisual {
        /// The resting look of the cell, as it appears in the cached background.
        Free,
        /// The cell is part of the user's selection.
        Selected,
    }

    /// The human-facing name of a seat: 1-based row and aisle-excluded seat number.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SeatLabel {
        pub row: usize,
        pub seat: usize,
    }

    impl fmt::Display for SeatLabel {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "row {} seat {}", self.row, self.seat)
        }
    }
}
