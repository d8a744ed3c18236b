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
//! Errors used by the [`Board`][crate::board::Board] and cell ids.

use thiserror::Error;

/// Error returned when a coordinate falls outside a board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("cell ({row}, {col}) is outside the {size}x{size} board")]
pub struct OutOfBounds {
    /// Requested row.
    row: usize,
    /// Requested column.
    col: usize,
    /// Side length of the board the coordinate was checked against.
    size: usize,
}

impl OutOfBounds {
    /// Construct an [`OutOfBounds`] error for the given coordinate and board size.
    pub(crate) fn new(row: usize, col: usize, size: usize) -> Self {
        Self { row, col, size }
    }

    /// The row that was requested.
    pub fn row(&self) -> usize {
        self.row
    }

    /// The column that was requested.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Error returned when parsing a [`CellId`][crate::board::CellId] or a
/// [`Side`][crate::board::Side] from text.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParseCellIdError {
    /// The text is not of the form `<side>-<row>-<col>` with 1-indexed numbers.
    #[error("malformed cell id {0:?}, expected <side>-<row>-<col>")]
    Format(String),
    /// The side prefix is not a known side.
    #[error("unknown board side {0:?}, expected \"player\" or \"enemy\"")]
    Side(String),
}
