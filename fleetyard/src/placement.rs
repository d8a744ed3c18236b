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
//! The placement engine: candidate footprints, padding, and committing ships to a board.
//!
//! All functions here are stateless and operate on exactly one [`Board`] and one of its
//! side's ships at a time. Padding is marked on the board and blocks later placements
//! just like ship cells do, so two committed ships never touch, not even diagonally.
use std::collections::BTreeSet;

use log::debug;

use crate::{
    board::{Board, Cell, Mark, OutOfBounds},
    ships::{Orientation, Ship},
};

pub use self::errors::PlacementError;
#[cfg(feature = "rng_gen")]
pub use self::random::{run_automatic_placement, RandomPlacement, UniformCell};

mod errors;
#[cfg(feature = "rng_gen")]
mod random;

/// Compute the footprint of a ship of `length` cells starting at `origin` and extending
/// toward higher coordinates along `orientation`.
///
/// Returns an empty footprint when the origin is off the board, when the ship would cross
/// the board edge, or when any of its cells is occupied by a ship or padding. An empty
/// result is a normal outcome, not an error.
pub fn try_compute_cells(
    board: &Board,
    origin: Cell,
    orientation: Orientation,
    length: usize,
) -> Vec<Cell> {
    (0..length)
        .map(|i| {
            origin
                .checked_along(orientation, i)
                .filter(|cell| board.contains(cell) && !board.is_occupied(cell))
        })
        .collect::<Option<Vec<Cell>>>()
        .unwrap_or_default()
}

/// Compute the one-cell ring around a ship's footprint, clipped to the board.
///
/// For a straight footprint the ring is the perpendicular neighbors of every cell plus,
/// at each end, the cell continuing the axis and its two diagonal corners. Returns an
/// empty set if the ship has no footprint.
pub fn compute_padding(board: &Board, ship: &Ship) -> BTreeSet<Cell> {
    let footprint = ship.occupied_cells();
    let (first, last) = match (footprint.iter().min(), footprint.iter().max()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return BTreeSet::new(),
    };
    let size = board.size();
    let top = first.row().saturating_sub(1).max(1);
    let bottom = (last.row() + 1).min(size);
    let left = first.col().saturating_sub(1).max(1);
    let right = (last.col() + 1).min(size);
    (top..=bottom)
        .flat_map(|row| (left..=right).map(move |col| Cell::new(row, col)))
        .filter(|cell| !footprint.contains(cell))
        .collect()
}

/// Commit a placeholder ship to the board: record its padding, mark footprint and padding
/// as occupied, and move the ship to its placed state.
pub fn confirm_placement(board: &mut Board, ship: &mut Ship) -> Result<(), PlacementError> {
    if !ship.is_placeholder() {
        return Err(PlacementError::NotAPlaceholder);
    }
    for cell in ship.occupied_cells() {
        if !board.contains(cell) {
            return Err(OutOfBounds::new(cell.row(), cell.col(), board.size()).into());
        }
        if board.is_occupied(cell) {
            return Err(PlacementError::Occupied { cell: *cell });
        }
    }
    let padding = compute_padding(board, ship);
    ship.mark_placed(padding)?;
    board.mark_occupied(ship.occupied_cells(), Mark::Ship);
    board.mark_occupied(ship.padding_cells(), Mark::Padding);
    debug!(
        "placed {} at {} ({}) on the {} board",
        ship.kind(),
        ship.occupied_cells()[0],
        ship.orientation(),
        board.side()
    );
    Ok(())
}
