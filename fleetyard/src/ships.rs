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
//! A single ship and its placement lifecycle.
use std::{collections::BTreeSet, fmt, str::FromStr};

#[cfg(feature = "rng_gen")]
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::Cell;

pub use self::errors::ShipError;

mod errors;

/// Axis a ship extends along from its origin cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Extends toward higher columns.
    Horizontal,
    /// Extends toward higher rows.
    Vertical,
}

impl Orientation {
    /// Get the other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Returns true if the cells form a straight, gap-free run starting at the first cell
    /// and extending along this orientation.
    fn is_run(self, cells: &[Cell]) -> bool {
        match cells.first() {
            None => false,
            Some(&start) => cells
                .iter()
                .enumerate()
                .all(|(i, cell)| start.checked_along(self, i) == Some(*cell)),
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Horizontal
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        })
    }
}

impl FromStr for Orientation {
    type Err = ShipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "h" | "across" => Ok(Orientation::Horizontal),
            "vertical" | "v" | "down" => Ok(Orientation::Vertical),
            _ => Err(ShipError::InvalidOrientation(s.to_owned())),
        }
    }
}

#[cfg(feature = "rng_gen")]
impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen::<bool>() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }
}

/// Where a ship is in its placement lifecycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShipState {
    /// No footprint has been chosen.
    Unplaced,
    /// A candidate footprint is being shown but is not committed.
    Placeholder,
    /// Committed to the board. Terminal.
    Placed,
}

/// One vessel of a fleet.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    /// Class name, e.g. `"battleship"`.
    kind: String,
    /// Number of cells the ship covers.
    length: usize,
    orientation: Orientation,
    state: ShipState,
    /// Candidate or committed footprint, ordered from the origin outward.
    cells: Vec<Cell>,
    /// Breathing room recorded when the ship is placed.
    padding: BTreeSet<Cell>,
    /// Whether front-ends should draw the padding.
    padding_visible: bool,
}

impl Ship {
    /// Construct an unplaced, horizontal ship of the given class. Panics if `length` is 0.
    pub fn new(kind: impl Into<String>, length: usize) -> Self {
        assert!(length > 0, "ships must be at least one cell long");
        Self {
            kind: kind.into(),
            length,
            orientation: Orientation::default(),
            state: ShipState::Unplaced,
            cells: Vec::new(),
            padding: BTreeSet::new(),
            padding_visible: true,
        }
    }

    /// Class name of this ship.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Number of cells the ship covers.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Orientation used for the candidate footprint.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ShipState {
        self.state
    }

    /// Returns true while a candidate footprint is shown.
    pub fn is_placeholder(&self) -> bool {
        self.state == ShipState::Placeholder
    }

    /// Returns true once the ship is committed to a board.
    pub fn is_placed(&self) -> bool {
        self.state == ShipState::Placed
    }

    /// The candidate or committed footprint, ordered from the origin. Empty while
    /// unplaced.
    pub fn occupied_cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Padding recorded at placement. Empty until placed.
    pub fn padding_cells(&self) -> &BTreeSet<Cell> {
        &self.padding
    }

    /// Whether the padding should be drawn. Hidden padding still blocks placement.
    pub fn padding_visible(&self) -> bool {
        self.padding_visible
    }

    /// Change the orientation used for the next candidate footprint.
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), ShipError> {
        if self.is_placed() {
            return Err(ShipError::AlreadyPlaced);
        }
        self.orientation = orientation;
        Ok(())
    }

    /// Record a non-committed footprint and become a placeholder. The cells must be a
    /// contiguous run of exactly [`length`][Ship::length] cells along the ship's
    /// orientation, starting at the origin.
    pub fn set_candidate_cells(&mut self, cells: Vec<Cell>) -> Result<(), ShipError> {
        if self.is_placed() {
            return Err(ShipError::AlreadyPlaced);
        }
        if cells.len() != self.length || !self.orientation.is_run(&cells) {
            return Err(ShipError::InvalidPlacement {
                expected: self.length,
                actual: cells.len(),
            });
        }
        self.cells = cells;
        self.state = ShipState::Placeholder;
        Ok(())
    }

    /// Commit the candidate footprint with the given padding.
    pub fn mark_placed(&mut self, padding: BTreeSet<Cell>) -> Result<(), ShipError> {
        match self.state {
            ShipState::Placed => Err(ShipError::AlreadyPlaced),
            ShipState::Unplaced => Err(ShipError::NotAPlaceholder),
            ShipState::Placeholder => {
                self.padding = padding;
                self.state = ShipState::Placed;
                Ok(())
            }
        }
    }

    /// Discard the candidate footprint. Does nothing if the ship is unplaced.
    pub fn clear_placeholder(&mut self) -> Result<(), ShipError> {
        match self.state {
            ShipState::Placed => Err(ShipError::AlreadyPlaced),
            ShipState::Unplaced => Ok(()),
            ShipState::Placeholder => {
                self.cells.clear();
                self.state = ShipState::Unplaced;
                Ok(())
            }
        }
    }

    /// Stop drawing this ship's padding.
    pub fn hide_padding(&mut self) {
        self.padding_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(row: usize, col: usize, orientation: Orientation, len: usize) -> Vec<Cell> {
        (0..len)
            .map(|i| Cell::new(row, col).along(orientation, i))
            .collect()
    }

    #[test]
    fn lifecycle() {
        let mut ship = Ship::new("destroyer", 3);
        assert_eq!(ship.state(), ShipState::Unplaced);
        assert!(ship.occupied_cells().is_empty());

        ship.set_candidate_cells(run(2, 2, Orientation::Horizontal, 3))
            .unwrap();
        assert!(ship.is_placeholder());
        ship.clear_placeholder().unwrap();
        assert_eq!(ship.state(), ShipState::Unplaced);
        assert!(ship.occupied_cells().is_empty());
        // clearing an unplaced ship is a no-op
        ship.clear_placeholder().unwrap();

        ship.set_orientation(Orientation::Vertical).unwrap();
        ship.set_candidate_cells(run(2, 2, Orientation::Vertical, 3))
            .unwrap();
        let padding: BTreeSet<_> = vec![Cell::new(1, 2)].into_iter().collect();
        ship.mark_placed(padding.clone()).unwrap();
        assert!(ship.is_placed());
        assert_eq!(ship.padding_cells(), &padding);

        assert_eq!(ship.mark_placed(BTreeSet::new()), Err(ShipError::AlreadyPlaced));
        assert_eq!(ship.clear_placeholder(), Err(ShipError::AlreadyPlaced));
        assert_eq!(
            ship.set_orientation(Orientation::Horizontal),
            Err(ShipError::AlreadyPlaced)
        );
        assert_eq!(
            ship.set_candidate_cells(run(5, 5, Orientation::Vertical, 3)),
            Err(ShipError::AlreadyPlaced)
        );
    }

    #[test]
    fn candidate_must_match_length_and_axis() {
        let mut ship = Ship::new("submarine", 2);
        assert_eq!(
            ship.set_candidate_cells(run(1, 1, Orientation::Horizontal, 3)),
            Err(ShipError::InvalidPlacement {
                expected: 2,
                actual: 3
            })
        );
        // vertical run on a horizontal ship
        assert!(ship
            .set_candidate_cells(run(1, 1, Orientation::Vertical, 2))
            .is_err());
        assert!(ship
            .set_candidate_cells(vec![Cell::new(1, 1), Cell::new(1, 3)])
            .is_err());
        let edge = Cell::new(1, usize::max_value());
        assert!(ship.set_candidate_cells(vec![edge, edge]).is_err());
        assert_eq!(ship.state(), ShipState::Unplaced);
    }

    #[test]
    fn placing_requires_a_placeholder() {
        let mut ship = Ship::new("patrol", 1);
        assert_eq!(
            ship.mark_placed(BTreeSet::new()),
            Err(ShipError::NotAPlaceholder)
        );
    }

    #[test]
    fn copies_do_not_alias() {
        let mut ship = Ship::new("patrol", 1);
        ship.set_candidate_cells(vec![Cell::new(4, 4)]).unwrap();
        let mut copy = ship.occupied_cells().to_vec();
        copy.push(Cell::new(9, 9));
        assert_eq!(ship.occupied_cells(), &[Cell::new(4, 4)]);
    }

    #[test]
    fn parse_orientation() {
        assert_eq!("Vertical".parse(), Ok(Orientation::Vertical));
        assert_eq!("h".parse(), Ok(Orientation::Horizontal));
        assert_eq!(
            "diagonal".parse::<Orientation>(),
            Err(ShipError::InvalidOrientation("diagonal".into()))
        );
        assert_eq!(Orientation::Vertical.toggled(), Orientation::Horizontal);
    }

    #[test]
    #[should_panic]
    fn zero_length_ship() {
        Ship::new("raft", 0);
    }
}
