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
//! Ship placement for the classic naval combat game.
//!
//! Each side owns a square [`Board`] and a [`Fleet`] built from a [`FleetConfig`]. Ships
//! are placed either interactively through a [`PlacementSession`] or all at once with
//! [`run_automatic_placement`]. Committed ships are surrounded by a one-cell ring of
//! padding, including the diagonal corners, which no other ship may cover.
//!
//! ```
//! use fleetyard::{Cell, FleetConfig, PlacementSession, Side};
//!
//! let mut session = PlacementSession::begin(Side::Player, &FleetConfig::standard(), 10)?;
//! let preview = session.on_reference_cell_entered("player-5-3".parse()?)?;
//! assert_eq!(preview.unwrap().cells()[3], Cell::new(5, 6));
//! assert!(!session.on_confirm()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod fleet;
pub mod placement;
pub mod session;
pub mod ships;

pub use crate::{
    board::{Board, Cell, CellId, CellState, Side, DEFAULT_BOARD_SIZE},
    fleet::{Fleet, FleetConfig, ShipClass},
    placement::PlacementError,
    session::{PlacementPreview, PlacementSession, SessionError, SessionState},
    ships::{Orientation, Ship, ShipState},
};

#[cfg(feature = "rng_gen")]
pub use crate::placement::{run_automatic_placement, RandomPlacement};
