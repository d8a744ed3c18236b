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
#![cfg(feature = "rng_gen")]

use std::collections::BTreeSet;

use fleetyard::{
    board::{Cell, CellState, Side},
    fleet::{FleetConfig, ShipClass},
    placement::{run_automatic_placement, RandomPlacement},
};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn standard_fleet_for_a_thousand_seeds() {
    let config = FleetConfig::standard();
    for seed in 0..1000 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (board, fleet) = run_automatic_placement(&config, 10, &mut rng)
            .unwrap_or_else(|err| panic!("seed {}: {}", seed, err));
        assert!(fleet.all_placed(), "seed {}", seed);
        assert_eq!(board.side(), Side::Enemy);

        let mut seen = BTreeSet::new();
        for ship in &fleet {
            assert_eq!(ship.occupied_cells().len(), ship.length());
            for cell in ship.occupied_cells() {
                assert!(seen.insert(*cell), "seed {}: {} covered twice", seed, cell);
                assert_eq!(board.state(cell), Some(CellState::Ship));
            }
        }
        for (i, a) in fleet.iter().enumerate() {
            for b in fleet.iter().skip(i + 1) {
                assert!(a
                    .occupied_cells()
                    .iter()
                    .all(|cell| !b.padding_cells().contains(cell)));
            }
        }
    }
}

#[test]
fn same_seed_same_board() {
    let config = FleetConfig::standard();
    let cells = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let (_, fleet) = run_automatic_placement(&config, 10, &mut rng).unwrap();
        fleet
            .iter()
            .map(|ship| ship.occupied_cells().to_vec())
            .collect::<Vec<Vec<Cell>>>()
    };
    assert_eq!(cells(42), cells(42));
}

#[test]
fn tight_board_uses_restarts() {
    // four patrol boats fit on a 3x3 board only in the corners, so most greedy passes
    // dead-end and have to start over
    let config = FleetConfig::new(vec![ShipClass::new("patrol", 1, 4)]).unwrap();
    let strategy = RandomPlacement::new()
        .with_max_attempts(200)
        .with_max_restarts(200);
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (board, fleet) = strategy.run(&mut rng, Side::Enemy, &config, 3).unwrap();
        assert!(fleet.all_placed());
        for corner in &[(1, 1), (1, 3), (3, 1), (3, 3)] {
            assert_eq!(board.state(&Cell::from(*corner)), Some(CellState::Ship));
        }
    }
}
