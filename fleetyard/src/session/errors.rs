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
//! Errors returned by the events of a placement session.

use thiserror::Error;

use crate::{
    board::{CellId, OutOfBounds, Side},
    fleet::FleetConfigError,
    placement::PlacementError,
    ships::ShipError,
};

/// Error returned by a [`PlacementSession`][crate::session::PlacementSession].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum SessionError {
    /// The fleet configuration cannot be used on the requested board.
    #[error(transparent)]
    Config(#[from] FleetConfigError),
    /// The board size is zero or too large to address.
    #[error("cannot build a {0}x{0} board")]
    BoardSize(usize),
    /// The cell id names the other side's board.
    #[error("cell {id} is not on the {expected} board")]
    ForeignCell {
        /// The rejected cell id.
        id: CellId,
        /// The side this session places ships for.
        expected: Side,
    },
    /// The cell id lies outside this session's board.
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),
    /// The ship rejected a lifecycle transition.
    #[error(transparent)]
    Ship(#[from] ShipError),
    /// The placement engine rejected the placeholder.
    #[error(transparent)]
    Placement(#[from] PlacementError),
}
