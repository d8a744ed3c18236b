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
//! Types that make up one side's board during the placement phase.

use std::{fmt, str::FromStr};

use enumflags2::BitFlags;

use self::grid::Grid;
pub use self::{
    cell::{Cell, CellId},
    dimensions::{Dimensions, DEFAULT_BOARD_SIZE},
    errors::{OutOfBounds, ParseCellIdError},
};

mod cell;
mod dimensions;
mod errors;
mod grid;

/// Which half of the game a board belongs to. Each side owns its own [`Board`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    /// The human player's board.
    Player,
    /// The opponent's board.
    Enemy,
}

impl Side {
    /// Get the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }

    /// Prefix used for this side in [`CellId`] text.
    pub fn prefix(self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Enemy => "enemy",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.prefix())
    }
}

impl FromStr for Side {
    type Err = ParseCellIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "player" => Ok(Side::Player),
            "enemy" => Ok(Side::Enemy),
            other => Err(ParseCellIdError::Side(other.to_owned())),
        }
    }
}

/// Reasons a cell is occupied. A cell may carry both, e.g. when the padding of two ships
/// overlaps, or none at all when it is empty.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Mark {
    /// Part of a committed ship's footprint.
    Ship = 0b01,
    /// Part of the breathing room around a committed ship.
    Padding = 0b10,
}

/// Summary of a single cell for display.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellState {
    /// Nothing has been committed here.
    Empty,
    /// A ship occupies this cell.
    Ship,
    /// The cell borders a ship and cannot take another one.
    Padding,
}

impl CellState {
    /// Collapse a set of marks into a display state. Ships win over padding.
    fn from_marks(marks: BitFlags<Mark>) -> Self {
        if marks.contains(Mark::Ship) {
            CellState::Ship
        } else if marks.contains(Mark::Padding) {
            CellState::Padding
        } else {
            CellState::Empty
        }
    }
}

/// Occupancy of one side's square grid.
///
/// Committed ships and their padding are recorded here; the board is only ever written
/// through [`confirm_placement`][crate::placement::confirm_placement].
#[derive(Debug, Clone)]
pub struct Board {
    /// The side this board belongs to.
    side: Side,
    /// Occupancy marks per cell.
    grid: Grid,
}

impl Board {
    /// Create an empty board for the given side.
    /// Panics if `size` is 0 or if the board would be too large to address.
    pub fn new(side: Side, size: usize) -> Self {
        Self {
            side,
            grid: Grid::new(Dimensions::new(size)),
        }
    }

    /// Create an empty board for the given side. Returns `None` if `size` is 0 or if the
    /// board would be too large to address.
    pub fn try_new(side: Side, size: usize) -> Option<Self> {
        Dimensions::try_new(size).map(|dim| Self {
            side,
            grid: Grid::new(dim),
        })
    }

    /// The side this board belongs to.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Get the [`Dimensions`] of this board.
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Side length of this board.
    pub fn size(&self) -> usize {
        self.grid.dim.size()
    }

    /// Get the cell at the given 1-indexed coordinates.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, OutOfBounds> {
        self.grid.dim.cell_at(row, col)
    }

    /// Returns true if the cell lies on this board.
    pub fn contains(&self, cell: &Cell) -> bool {
        self.grid.dim.contains(cell)
    }

    /// Returns true if a ship or a ship's padding occupies the cell. Cells outside the
    /// board are never occupied.
    pub fn is_occupied(&self, cell: &Cell) -> bool {
        self.grid
            .get(cell)
            .map_or(false, |marks| !marks.is_empty())
    }

    /// Get the occupancy marks of a cell, or `None` if it is out of bounds.
    pub fn marks(&self, cell: &Cell) -> Option<BitFlags<Mark>> {
        self.grid.get(cell).copied()
    }

    /// Get the display state of a cell, or `None` if it is out of bounds.
    pub fn state(&self, cell: &Cell) -> Option<CellState> {
        self.grid.get(cell).map(|marks| CellState::from_marks(*marks))
    }

    /// Number of cells that are occupied for any reason.
    pub fn occupied_count(&self) -> usize {
        self.grid.iter().filter(|marks| !marks.is_empty()).count()
    }

    /// Add `mark` to every given cell.
    /// Panics if any cell is out of bounds; callers must only pass cells of this board.
    pub fn mark_occupied<'a, I>(&mut self, cells: I, mark: Mark)
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        for cell in cells {
            self.grid[cell].insert(mark);
        }
    }

    /// Get an iterator over the rows of this board. Each row is an iterator over the cells
    /// of that row and their display state.
    pub fn iter_rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = (Cell, CellState)>> {
        let grid = &self.grid;
        grid.dim
            .iter_rows()
            .map(move |row| row.map(move |cell| (cell, CellState::from_marks(grid[cell]))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_accumulate() {
        let mut board = Board::new(Side::Player, 10);
        let cell = board.cell_at(3, 3).unwrap();
        assert!(!board.is_occupied(&cell));
        assert_eq!(board.state(&cell), Some(CellState::Empty));

        board.mark_occupied(&[cell], Mark::Padding);
        assert!(board.is_occupied(&cell));
        assert_eq!(board.state(&cell), Some(CellState::Padding));

        board.mark_occupied(&[cell], Mark::Ship);
        assert_eq!(board.state(&cell), Some(CellState::Ship));
        assert_eq!(board.marks(&cell), Some(Mark::Ship | Mark::Padding));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn out_of_bounds_cells() {
        let board = Board::new(Side::Enemy, 10);
        assert!(board.cell_at(11, 1).is_err());
        assert!(!board.is_occupied(&Cell::new(0, 0)));
        assert_eq!(board.state(&Cell::new(11, 11)), None);
        assert!(Board::try_new(Side::Enemy, 0).is_none());
    }

    #[test]
    #[should_panic(expected = "cell out of bounds")]
    fn marking_outside_the_board_panics() {
        let mut board = Board::new(Side::Player, 5);
        board.mark_occupied(&[Cell::new(6, 1)], Mark::Ship);
    }

    #[test]
    fn rows_cover_the_board() {
        let board = Board::new(Side::Player, 3);
        let rows: Vec<Vec<Cell>> = board
            .iter_rows()
            .map(|row| row.map(|(cell, _)| cell).collect())
            .collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], [Cell::new(3, 1), Cell::new(3, 2), Cell::new(3, 3)]);
        assert_eq!(Side::Player.opponent(), Side::Enemy);
    }
}
