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
//! Errors raised while computing or committing placements.

use thiserror::Error;

use crate::{
    board::{Cell, OutOfBounds},
    fleet::FleetConfigError,
    ships::ShipError,
};

/// Error returned by the placement engine.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum PlacementError {
    /// Only a placeholder can be confirmed.
    #[error("only a placeholder ship can be confirmed")]
    NotAPlaceholder,
    /// The candidate footprint leaves the board.
    #[error("candidate footprint leaves the board: {0}")]
    OutOfBounds(#[from] OutOfBounds),
    /// The candidate footprint covers a cell that is already occupied.
    #[error("candidate footprint covers occupied cell {cell}")]
    Occupied {
        /// The first occupied cell found.
        cell: Cell,
    },
    /// The ship rejected a lifecycle transition.
    #[error(transparent)]
    Ship(#[from] ShipError),
    /// The board size is zero or too large to address.
    #[error("cannot build a {0}x{0} board")]
    BoardSize(usize),
    /// The fleet configuration cannot be used on the requested board.
    #[error(transparent)]
    Config(#[from] FleetConfigError),
    /// Random placement ran out of attempts.
    #[error("gave up placing {kind:?} after {attempts} attempts")]
    Exhausted {
        /// Class of the ship that could not be placed.
        kind: String,
        /// Number of attempts made.
        attempts: usize,
    },
}
