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
//! Storage for the occupancy marks of every cell of a board.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use enumflags2::BitFlags;

use crate::board::{Cell, Dimensions, Mark};

/// Occupancy marks for every cell, stored row-major.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Dimensions of this grid.
    pub(super) dim: Dimensions,
    /// Marks of each cell. An empty set is an empty cell.
    cells: Box<[BitFlags<Mark>]>,
}

impl Grid {
    pub(super) fn new(dim: Dimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| BitFlags::empty()).collect();
        Self { dim, cells }
    }

    /// Get the marks of the given [`Cell`].
    pub(super) fn get<B: Borrow<Cell>>(&self, cell: B) -> Option<&BitFlags<Mark>> {
        self.dim
            .try_linearize(cell.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Mutably get the marks of the given [`Cell`].
    pub(super) fn get_mut<B: Borrow<Cell>>(&mut self, cell: B) -> Option<&mut BitFlags<Mark>> {
        self.dim
            .try_linearize(cell.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Iterate the marks of all cells.
    pub(super) fn iter(&self) -> impl Iterator<Item = &BitFlags<Mark>> {
        self.cells.iter()
    }
}

impl<B: Borrow<Cell>> Index<B> for Grid {
    type Output = BitFlags<Mark>;

    fn index(&self, cell: B) -> &Self::Output {
        self.get(cell).expect("cell out of bounds")
    }
}

impl<B: Borrow<Cell>> IndexMut<B> for Grid {
    fn index_mut(&mut self, cell: B) -> &mut Self::Output {
        self.get_mut(cell).expect("cell out of bounds")
    }
}
