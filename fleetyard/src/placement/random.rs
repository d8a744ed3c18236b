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
//! Unattended placement of a whole fleet, used for the opponent's board.
use log::{debug, trace, warn};
use rand::{
    distributions::{
        uniform::{SampleBorrow, SampleUniform, Uniform, UniformSampler},
        Distribution, Standard,
    },
    Rng,
};

use crate::{
    board::{Board, Cell, Side},
    fleet::{Fleet, FleetConfig},
    placement::{confirm_placement, try_compute_cells, PlacementError},
    ships::{Orientation, Ship},
};

/// Samples cells uniformly from a rectangular range of rows and columns.
#[derive(Debug, Clone, Copy)]
pub struct UniformCell {
    rows: Uniform<usize>,
    cols: Uniform<usize>,
}

impl SampleUniform for Cell {
    type Sampler = UniformCell;
}

impl UniformSampler for UniformCell {
    type X = Cell;

    fn new<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high) = (low.borrow(), high.borrow());
        Self {
            rows: Uniform::new(low.row(), high.row()),
            cols: Uniform::new(low.col(), high.col()),
        }
    }

    fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high) = (low.borrow(), high.borrow());
        Self {
            rows: Uniform::new_inclusive(low.row(), high.row()),
            cols: Uniform::new_inclusive(low.col(), high.col()),
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
        Cell::new(self.rows.sample(rng), self.cols.sample(rng))
    }
}

/// Places ships at random origins and orientations until each one fits.
///
/// Every ship gets at most [`max_attempts`][RandomPlacement::with_max_attempts] tries.
/// [`run`][RandomPlacement::run] additionally starts over on a fresh board when a greedy
/// pass paints itself into a corner.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RandomPlacement {
    max_attempts: usize,
    max_restarts: usize,
}

impl RandomPlacement {
    /// Attempts per ship before giving up.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;
    /// Fresh boards tried by [`run`][RandomPlacement::run] after the first one fails.
    pub const DEFAULT_MAX_RESTARTS: usize = 32;

    pub fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            max_restarts: Self::DEFAULT_MAX_RESTARTS,
        }
    }

    /// Set the number of attempts per ship. At least one attempt is always made.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Set the number of fresh boards [`run`][RandomPlacement::run] may start over with.
    pub fn with_max_restarts(mut self, max_restarts: usize) -> Self {
        self.max_restarts = max_restarts;
        self
    }

    /// Place one ship, committing it to the board on the first random footprint that
    /// fits. The ship's padding is hidden once placed.
    pub fn place_ship<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        board: &mut Board,
        ship: &mut Ship,
    ) -> Result<(), PlacementError> {
        if ship.is_placed() {
            return Ok(());
        }
        let size = board.size();
        let origins = Uniform::new_inclusive(Cell::new(1, 1), Cell::new(size, size));
        for attempt in 1..=self.max_attempts {
            let origin = origins.sample(rng);
            let orientation: Orientation = Standard.sample(rng);
            let footprint = try_compute_cells(board, origin, orientation, ship.length());
            if footprint.is_empty() {
                trace!(
                    "attempt {}: {} does not fit at {} ({})",
                    attempt,
                    ship.kind(),
                    origin,
                    orientation
                );
                continue;
            }
            ship.set_orientation(orientation)?;
            ship.set_candidate_cells(footprint)?;
            confirm_placement(board, ship)?;
            ship.hide_padding();
            return Ok(());
        }
        warn!(
            "no room for {} after {} attempts",
            ship.kind(),
            self.max_attempts
        );
        Err(PlacementError::Exhausted {
            kind: ship.kind().to_owned(),
            attempts: self.max_attempts,
        })
    }

    /// Place every unplaced ship of the fleet, in order.
    pub fn place_fleet<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        board: &mut Board,
        fleet: &mut Fleet,
    ) -> Result<(), PlacementError> {
        while let Some(index) = fleet.next_unplaced() {
            self.place_ship(rng, board, &mut fleet[index])?;
        }
        Ok(())
    }

    /// Build a fully placed board and fleet for `side`, starting over on a fresh board
    /// whenever a ship runs out of attempts.
    pub fn run<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        side: Side,
        config: &FleetConfig,
        board_size: usize,
    ) -> Result<(Board, Fleet), PlacementError> {
        config.check_fits(board_size)?;
        let empty =
            Board::try_new(side, board_size).ok_or(PlacementError::BoardSize(board_size))?;
        let mut restarts = 0;
        loop {
            let mut board = empty.clone();
            let mut fleet = Fleet::from_config(config);
            match self.place_fleet(rng, &mut board, &mut fleet) {
                Ok(()) => {
                    debug!(
                        "placed {} ships on the {} board after {} restarts",
                        fleet.len(),
                        side,
                        restarts
                    );
                    return Ok((board, fleet));
                }
                Err(PlacementError::Exhausted { .. }) if restarts < self.max_restarts => {
                    restarts += 1;
                    warn!("restarting random placement ({}/{})", restarts, self.max_restarts);
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl Default for RandomPlacement {
    fn default() -> Self {
        Self::new()
    }
}

/// Place a whole fleet on a fresh opponent board with the default budgets.
pub fn run_automatic_placement<R: Rng + ?Sized>(
    config: &FleetConfig,
    board_size: usize,
    rng: &mut R,
) -> Result<(Board, Fleet), PlacementError> {
    RandomPlacement::new().run(rng, Side::Enemy, config, board_size)
}
