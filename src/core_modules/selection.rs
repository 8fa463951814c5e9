// The user's current picks, in the order they were made. A cell appears at most once.

use crate::core_modules::cell::cell::CellRef;

/// An insertion-ordered set of selected cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    cells: Vec<CellRef>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, cell: CellRef) -> bool {
        self.cells.contains(&cell)
    }

    /// Adds a cell at the end. Returns `false` if it was already present.
    pub fn insert(&mut self, cell: CellRef) -> bool {
        if self.contains(cell) {
            return false;
        }
        self.cells.push(cell);
        true
    }

    /// Removes a cell, keeping the order of the rest. Returns `false` if it was absent.
    pub fn remove(&mut self, cell: CellRef) -> bool {
        match self.cells.iter().position(|c| *c == cell) {
            Some(index) => {
                self.cells.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn as_slice(&self) -> &[CellRef] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &CellRef> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
