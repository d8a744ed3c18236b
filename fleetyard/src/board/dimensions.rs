// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Bounds of a square board.
use std::borrow::Borrow;

use crate::board::{Cell, OutOfBounds};

/// Side length of the board used by the standard game.
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Square `size` x `size` dimensions. Rows and columns are numbered `1..=size`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Number of rows, which is also the number of columns.
    size: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the given side length.
    /// Panics if `size` is 0 or if `size * size` exceeds `usize::max_value()`.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(dim) => dim,
            None if size == 0 => panic!("Dimensions must be nonzero, got {0}x{0}", size),
            None => panic!(
                "Dimensions too large: {0} * {0} > {1}",
                size,
                usize::max_value()
            ),
        }
    }

    /// Create new [`Dimensions`] with the given side length.
    /// Returns `None` if `size` is 0 or if `size * size` exceeds `usize::max_value()`.
    pub fn try_new(size: usize) -> Option<Self> {
        if size == 0 {
            None
        } else {
            size.checked_mul(size).map(|_| Self { size })
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn total_size(&self) -> usize {
        self.size * self.size
    }

    /// Returns true if the cell lies within these dimensions.
    pub fn contains(&self, cell: &Cell) -> bool {
        self.check_bounds(cell).is_some()
    }

    /// Get the cell at the given coordinates, failing if either is outside `1..=size`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, OutOfBounds> {
        self.check_bounds(Cell::new(row, col))
            .ok_or_else(|| OutOfBounds::new(row, col, self.size))
    }

    /// Convert a cell to a linear index. Returns `None` if the cell is out of bounds.
    pub fn try_linearize(&self, cell: &Cell) -> Option<usize> {
        self.check_bounds(cell)
            .map(|cell| (cell.row() - 1) * self.size + (cell.col() - 1))
    }

    /// Convert a cell to a linear index.
    /// Panics if the cell is out of bounds.
    pub fn linearize(&self, cell: &Cell) -> usize {
        match self.try_linearize(cell) {
            Some(v) => v,
            None => panic!("{} is out of bounds for {:?}", cell, self),
        }
    }

    /// Convert a linear index back into a [`Cell`].
    pub fn un_linearize(&self, idx: usize) -> Cell {
        Cell::new(idx / self.size + 1, idx % self.size + 1)
    }

    /// Get an iterator over the rows of the board. Each row is an iterator over the cells
    /// of that row, left to right.
    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = Cell>> {
        let size = self.size;
        (1..=size).map(move |row| (1..=size).map(move |col| Cell::new(row, col)))
    }

    /// Check if the given [`Cell`] is in bounds. If so, return it, otherwise return `None`.
    #[inline]
    fn check_bounds<B: Borrow<Cell>>(&self, cell: B) -> Option<B> {
        let c = cell.borrow();
        if (1..=self.size).contains(&c.row()) && (1..=self.size).contains(&c.col()) {
            Some(cell)
        } else {
            None
        }
    }
}

impl Default for Dimensions {
    /// The standard 10x10 board.
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
        }
    }
}
