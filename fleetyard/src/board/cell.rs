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
//! Cell coordinates and the textual ids front-ends use to name them.
use std::{fmt, str::FromStr};

use crate::{
    board::{ParseCellIdError, Side},
    ships::Orientation,
};

/// The coordinates of a single square of a board. Both `row` and `col` start at 1.
///
/// A [`Cell`] says nothing about occupancy; that is tracked by the
/// [`Board`][crate::board::Board] the cell is used with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Cell {
    /// Vertical position of the cell, counted from the top.
    row: usize,
    /// Horizontal position of the cell, counted from the left.
    col: usize,
}

impl Cell {
    /// Construct a [`Cell`] from the given `row` and `col`. Bounds are not checked here,
    /// use [`Board::cell_at`][crate::board::Board::cell_at] for a checked cell.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row of this cell.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column of this cell.
    pub fn col(&self) -> usize {
        self.col
    }

    /// The cell `steps` cells further along the given orientation: to the right for
    /// [`Orientation::Horizontal`], downward for [`Orientation::Vertical`].
    /// Panics if the coordinate overflows.
    pub fn along(self, orientation: Orientation, steps: usize) -> Self {
        match self.checked_along(orientation, steps) {
            Some(cell) => cell,
            None => panic!("moving {} by {} cells {} overflows", self, steps, orientation),
        }
    }

    /// Like [`along`][Cell::along], but returns `None` if the coordinate overflows.
    pub fn checked_along(self, orientation: Orientation, steps: usize) -> Option<Self> {
        match orientation {
            Orientation::Horizontal => {
                self.col.checked_add(steps).map(|col| Self::new(self.row, col))
            }
            Orientation::Vertical => {
                self.row.checked_add(steps).map(|row| Self::new(row, self.col))
            }
        }
    }
}

impl From<(usize, usize)> for Cell {
    /// Construct a [`Cell`] from a `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (usize, usize) {
    /// Convert the [`Cell`] into a `(row, col)` pair.
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A cell together with the side of the game it belongs to. The text form is
/// `<side>-<row>-<col>`, e.g. `player-3-7` or `enemy-10-1`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CellId {
    side: Side,
    cell: Cell,
}

impl CellId {
    /// Construct a [`CellId`] for the cell on the given side.
    pub fn new(side: Side, cell: Cell) -> Self {
        Self { side, cell }
    }

    /// Side of the game this cell belongs to.
    pub fn side(&self) -> Side {
        self.side
    }

    /// The cell coordinates.
    pub fn cell(&self) -> Cell {
        self.cell
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}-{}", self.side, self.cell.row, self.cell.col)
    }
}

impl FromStr for CellId {
    type Err = ParseCellIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('-');
        let (side, row, col) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(side), Some(row), Some(col), None) => (side, row, col),
            _ => return Err(ParseCellIdError::Format(s.to_owned())),
        };
        let side = side.parse()?;
        let row = parse_coordinate(s, row)?;
        let col = parse_coordinate(s, col)?;
        Ok(Self::new(side, Cell::new(row, col)))
    }
}

/// Parse one 1-indexed coordinate of a cell id.
fn parse_coordinate(id: &str, part: &str) -> Result<usize, ParseCellIdError> {
    match part.parse() {
        Ok(0) | Err(_) => Err(ParseCellIdError::Format(id.to_owned())),
        Ok(v) => Ok(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_id_text_form() {
        let id: CellId = "enemy-10-3".parse().unwrap();
        assert_eq!(id.side(), Side::Enemy);
        assert_eq!(id.cell(), Cell::new(10, 3));
        assert_eq!(id.to_string(), "enemy-10-3");
        assert_eq!(
            CellId::new(Side::Player, Cell::new(1, 2)).to_string(),
            "player-1-2"
        );
    }

    #[test]
    fn malformed_cell_ids() {
        for bad in &["player-1", "player-1-2-3", "player-0-2", "player-a-2", "-1-2", ""] {
            assert!(bad.parse::<CellId>().is_err(), "{:?} should not parse", bad);
        }
        assert!(matches!(
            "navy-1-1".parse::<CellId>(),
            Err(ParseCellIdError::Side(_))
        ));
    }

    #[test]
    fn cells_order_row_major() {
        let mut cells = vec![Cell::new(2, 1), Cell::new(1, 9), Cell::new(1, 2)];
        cells.sort();
        assert_eq!(cells, [Cell::new(1, 2), Cell::new(1, 9), Cell::new(2, 1)]);
        assert_eq!(
            Cell::new(4, 4).along(Orientation::Vertical, 2),
            Cell::new(6, 4)
        );
        assert_eq!(
            Cell::new(1, usize::max_value()).checked_along(Orientation::Horizontal, 1),
            None
        );
    }
}
