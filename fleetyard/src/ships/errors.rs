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
//! Errors raised by misuse of the [`Ship`][crate::ships::Ship] lifecycle.

use thiserror::Error;

/// Contract violations on a [`Ship`][crate::ships::Ship]. None of these happen during
/// normal play; seeing one means the caller drove the ship through an invalid transition.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ShipError {
    /// Text did not name an orientation.
    #[error("unknown orientation {0:?}, expected \"horizontal\" or \"vertical\"")]
    InvalidOrientation(String),
    /// Candidate cells do not form a straight run of the ship's length along its
    /// orientation.
    #[error("invalid candidate footprint: expected {expected} contiguous cells, got {actual}")]
    InvalidPlacement {
        /// Length of the ship.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },
    /// The ship was already committed to the board.
    #[error("ship was already placed")]
    AlreadyPlaced,
    /// The ship has no candidate footprint to commit.
    #[error("ship is not a placeholder")]
    NotAPlaceholder,
}
