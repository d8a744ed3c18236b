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
//! Interactive placement of one side's fleet, driven by pointer-like events.
//!
//! A [`PlacementSession`] owns the [`Board`] and [`Fleet`] of one side. The front-end
//! reports which cell the pointer is over, asks for the orientation to be flipped, and
//! confirms the preview; the session places the fleet's ships one at a time, in fleet
//! order, until every ship is placed.
//!
//! Every event goes through the session's [`SessionState`]: events that arrive while the
//! session is [`Busy`][SessionState::Busy] or [`Complete`][SessionState::Complete] are
//! dropped and return the same result as an event that changed nothing.
use log::{debug, trace};

use crate::{
    board::{Board, Cell, CellId, Side},
    fleet::{Fleet, FleetConfig},
    placement::{confirm_placement, try_compute_cells},
    ships::{Orientation, Ship},
};

pub use self::{errors::SessionError, state::SessionState};

mod errors;
mod state;

/// The candidate footprint currently shown for the ship being placed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlacementPreview {
    kind: String,
    orientation: Orientation,
    cells: Vec<Cell>,
}

impl PlacementPreview {
    fn of(ship: &Ship) -> Self {
        Self {
            kind: ship.kind().to_owned(),
            orientation: ship.orientation(),
            cells: ship.occupied_cells().to_vec(),
        }
    }

    /// Class of the ship being previewed.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells the ship would cover, ordered from the reference cell.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns true if the preview covers the cell.
    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }
}

/// Placement phase of one side, from an empty board until every ship is placed.
#[derive(Debug, Clone)]
pub struct PlacementSession {
    board: Board,
    fleet: Fleet,
    /// Orientation applied to the next preview. Carried over between ships.
    orientation: Orientation,
    /// Last cell the pointer entered, kept even when no preview fits there.
    reference: Option<Cell>,
    state: SessionState,
}

impl PlacementSession {
    /// Start placing `config`'s fleet on a fresh `board_size` x `board_size` board for
    /// `side`.
    pub fn begin(
        side: Side,
        config: &FleetConfig,
        board_size: usize,
    ) -> Result<Self, SessionError> {
        config.check_fits(board_size)?;
        let board = Board::try_new(side, board_size).ok_or(SessionError::BoardSize(board_size))?;
        let fleet = Fleet::from_config(config);
        debug!(
            "placement session for the {} board: {} ships on {}x{}",
            side,
            fleet.len(),
            board_size,
            board_size
        );
        Ok(Self {
            board,
            fleet,
            orientation: Orientation::default(),
            reference: None,
            state: SessionState::AwaitingInput,
        })
    }

    /// The pointer entered a cell. Shows the current ship at that cell if it fits and
    /// returns the preview, or `None` if it does not fit or the event was dropped.
    pub fn on_reference_cell_entered(
        &mut self,
        id: CellId,
    ) -> Result<Option<PlacementPreview>, SessionError> {
        self.guarded(Ok(None), |session| {
            let expected = session.board.side();
            if id.side() != expected {
                return Err(SessionError::ForeignCell { id, expected });
            }
            let cell = session.board.cell_at(id.cell().row(), id.cell().col())?;
            session.reference = Some(cell);
            session.show_placeholder()
        })
    }

    /// The pointer left the board. Discards the preview.
    pub fn on_reference_cell_left(&mut self) -> Result<(), SessionError> {
        self.guarded(Ok(()), |session| {
            session.reference = None;
            session.discard_placeholder()
        })
    }

    /// Flip the orientation of the shown preview and recompute it from the same reference
    /// cell. Does nothing while no preview is shown. If the ship does not fit the other
    /// way, the preview disappears and `None` is returned.
    pub fn on_toggle_orientation(&mut self) -> Result<Option<PlacementPreview>, SessionError> {
        self.guarded(Ok(None), |session| {
            if session.placeholder_index().is_none() {
                trace!("no preview to rotate");
                return Ok(None);
            }
            session.orientation = session.orientation.toggled();
            trace!("orientation is now {}", session.orientation);
            session.show_placeholder()
        })
    }

    /// Commit the current preview. Returns true once the whole fleet is placed. Without a
    /// preview nothing is committed.
    pub fn on_confirm(&mut self) -> Result<bool, SessionError> {
        self.guarded(Ok(false), |session| {
            let index = match session.placeholder_index() {
                Some(index) => index,
                None => {
                    trace!("nothing to confirm");
                    return Ok(false);
                }
            };
            confirm_placement(&mut session.board, &mut session.fleet[index])?;
            Ok(session.fleet.all_placed())
        })
    }

    /// The preview currently shown, if any.
    pub fn preview(&self) -> Option<PlacementPreview> {
        self.placeholder_index()
            .map(|index| PlacementPreview::of(&self.fleet[index]))
    }

    /// The ship that will be placed next, or `None` once the fleet is complete.
    pub fn current_ship(&self) -> Option<&Ship> {
        self.fleet.next_unplaced().map(|index| &self.fleet[index])
    }

    /// The board ships are committed to.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The ships being placed, in placement order.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// The side this session places ships for.
    pub fn side(&self) -> Side {
        self.board.side()
    }

    /// Orientation the next preview will use.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether the session accepts input, is handling an event, or is done.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns true once every ship is placed.
    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Complete
    }

    /// Give up the board and fleet, e.g. to hand them to the next phase of the game.
    pub fn into_parts(self) -> (Board, Fleet) {
        (self.board, self.fleet)
    }

    /// Run `op` while the session is busy. If the session does not accept input, `op` is
    /// not run and `dropped` is returned instead.
    fn guarded<R>(&mut self, dropped: R, op: impl FnOnce(&mut Self) -> R) -> R {
        if !self.state.try_begin() {
            trace!("dropping event while {:?}", self.state);
            return dropped;
        }
        let result = op(self);
        let complete = self.fleet.all_placed();
        self.state.finish(complete);
        if complete {
            debug!("every ship on the {} board is placed", self.board.side());
        }
        result
    }

    /// Index of the ship currently shown as a placeholder.
    fn placeholder_index(&self) -> Option<usize> {
        self.fleet.iter().position(Ship::is_placeholder)
    }

    /// Recompute the current ship's placeholder from the reference cell and orientation.
    fn show_placeholder(&mut self) -> Result<Option<PlacementPreview>, SessionError> {
        self.discard_placeholder()?;
        let (index, reference) = match (self.fleet.next_unplaced(), self.reference) {
            (Some(index), Some(reference)) => (index, reference),
            _ => return Ok(None),
        };
        let ship = &mut self.fleet[index];
        ship.set_orientation(self.orientation)?;
        let cells = try_compute_cells(&self.board, reference, self.orientation, ship.length());
        if cells.is_empty() {
            trace!(
                "{} does not fit at {} ({})",
                ship.kind(),
                reference,
                self.orientation
            );
            return Ok(None);
        }
        ship.set_candidate_cells(cells)?;
        Ok(Some(PlacementPreview::of(ship)))
    }

    fn discard_placeholder(&mut self) -> Result<(), SessionError> {
        if let Some(index) = self.placeholder_index() {
            self.fleet[index].clear_placeholder()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::CellState,
        fleet::{FleetConfigError, ShipClass},
        ships::ShipState,
    };

    fn player(row: usize, col: usize) -> CellId {
        CellId::new(Side::Player, Cell::new(row, col))
    }

    fn small_fleet() -> FleetConfig {
        FleetConfig::new(vec![
            ShipClass::new("destroyer", 3, 1),
            ShipClass::new("patrol", 1, 1),
        ])
        .unwrap()
    }

    #[test]
    fn hover_and_confirm() {
        let mut session = PlacementSession::begin(Side::Player, &small_fleet(), 10).unwrap();
        let preview = session.on_reference_cell_entered(player(5, 3)).unwrap().unwrap();
        assert_eq!(preview.kind(), "destroyer");
        assert_eq!(
            preview.cells(),
            &[Cell::new(5, 3), Cell::new(5, 4), Cell::new(5, 5)]
        );
        assert_eq!(session.preview(), Some(preview));
        assert_eq!(session.board().occupied_count(), 0);

        assert_eq!(session.on_confirm(), Ok(false));
        assert_eq!(session.fleet()[0].state(), ShipState::Placed);
        assert_eq!(session.board().state(&Cell::new(5, 4)), Some(CellState::Ship));
        assert_eq!(session.preview(), None);
        assert_eq!(session.current_ship().map(Ship::kind), Some("patrol"));

        // the reference cell is now taken
        assert_eq!(session.on_reference_cell_entered(player(5, 6)), Ok(None));
        assert_eq!(session.on_confirm(), Ok(false));
        assert!(session.on_reference_cell_entered(player(9, 9)).unwrap().is_some());
        assert_eq!(session.on_confirm(), Ok(true));
        assert!(session.is_complete());
        assert!(session.fleet().all_placed());
    }

    #[test]
    fn leave_then_enter_reproduces_the_preview() {
        let mut session = PlacementSession::begin(Side::Player, &small_fleet(), 10).unwrap();
        let first = session.on_reference_cell_entered(player(2, 7)).unwrap();
        session.on_reference_cell_left().unwrap();
        assert_eq!(session.preview(), None);
        assert_eq!(session.fleet()[0].state(), ShipState::Unplaced);
        let second = session.on_reference_cell_entered(player(2, 7)).unwrap();
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn toggle_recomputes_from_the_same_cell() {
        let mut session = PlacementSession::begin(Side::Player, &small_fleet(), 10).unwrap();
        assert!(session.on_reference_cell_entered(player(4, 7)).unwrap().is_some());
        let preview = session.on_toggle_orientation().unwrap().unwrap();
        assert_eq!(preview.orientation(), Orientation::Vertical);
        assert_eq!(
            preview.cells(),
            &[Cell::new(4, 7), Cell::new(5, 7), Cell::new(6, 7)]
        );
        let preview = session.on_toggle_orientation().unwrap().unwrap();
        assert_eq!(preview.orientation(), Orientation::Horizontal);
        assert_eq!(
            preview.cells(),
            &[Cell::new(4, 7), Cell::new(4, 8), Cell::new(4, 9)]
        );
    }

    #[test]
    fn toggle_into_the_edge_drops_the_preview() {
        let mut session = PlacementSession::begin(Side::Player, &small_fleet(), 10).unwrap();
        assert!(session.on_reference_cell_entered(player(9, 2)).unwrap().is_some());
        // vertical would leave the board
        assert_eq!(session.on_toggle_orientation(), Ok(None));
        assert_eq!(session.preview(), None);
        assert_eq!(session.orientation(), Orientation::Vertical);
        // nothing left to rotate
        assert_eq!(session.on_toggle_orientation(), Ok(None));
        assert_eq!(session.orientation(), Orientation::Vertical);
    }

    #[test]
    fn toggle_without_a_preview_keeps_the_orientation() {
        let mut session = PlacementSession::begin(Side::Player, &small_fleet(), 10).unwrap();
        assert_eq!(session.on_toggle_orientation(), Ok(None));
        assert_eq!(session.orientation(), Orientation::Horizontal);
        let preview = session.on_reference_cell_entered(player(2, 2)).unwrap().unwrap();
        assert_eq!(
            preview.cells(),
            &[Cell::new(2, 2), Cell::new(2, 3), Cell::new(2, 4)]
        );

        // no fit at the right edge, so no preview to rotate either
        assert_eq!(session.on_reference_cell_entered(player(4, 9)), Ok(None));
        assert_eq!(session.on_toggle_orientation(), Ok(None));
        assert_eq!(session.orientation(), Orientation::Horizontal);
    }

    #[test]
    fn orientation_carries_over_to_the_next_ship() {
        let mut session = PlacementSession::begin(Side::Player, &small_fleet(), 10).unwrap();
        session.on_reference_cell_entered(player(1, 1)).unwrap();
        session.on_toggle_orientation().unwrap();
        session.on_confirm().unwrap();
        let preview = session.on_reference_cell_entered(player(8, 8)).unwrap().unwrap();
        assert_eq!(preview.orientation(), Orientation::Vertical);
    }

    #[test]
    fn rejects_foreign_and_out_of_range_cells() {
        let mut session = PlacementSession::begin(Side::Player, &small_fleet(), 10).unwrap();
        let enemy = CellId::new(Side::Enemy, Cell::new(1, 1));
        assert_eq!(
            session.on_reference_cell_entered(enemy),
            Err(SessionError::ForeignCell {
                id: enemy,
                expected: Side::Player
            })
        );
        assert!(matches!(
            session.on_reference_cell_entered(player(11, 1)),
            Err(SessionError::OutOfBounds(_))
        ));
        // errors do not leave the session busy
        assert_eq!(session.state(), SessionState::AwaitingInput);
    }

    #[test]
    fn confirm_without_preview_commits_nothing() {
        let mut session = PlacementSession::begin(Side::Player, &small_fleet(), 10).unwrap();
        assert_eq!(session.on_confirm(), Ok(false));
        assert_eq!(session.board().occupied_count(), 0);
    }

    #[test]
    fn busy_session_drops_events() {
        let mut session = PlacementSession::begin(Side::Player, &small_fleet(), 10).unwrap();
        session.on_reference_cell_entered(player(3, 3)).unwrap();
        session.state = SessionState::Busy;

        assert_eq!(session.on_reference_cell_entered(player(6, 6)), Ok(None));
        assert_eq!(session.on_toggle_orientation(), Ok(None));
        assert_eq!(session.on_reference_cell_left(), Ok(()));
        assert_eq!(session.on_confirm(), Ok(false));

        assert_eq!(session.state(), SessionState::Busy);
        assert_eq!(session.orientation(), Orientation::Horizontal);
        assert_eq!(session.preview().unwrap().cells()[0], Cell::new(3, 3));
        assert_eq!(session.board().occupied_count(), 0);
    }

    #[test]
    fn complete_session_drops_events() {
        let config = FleetConfig::new(vec![ShipClass::new("patrol", 1, 1)]).unwrap();
        let mut session = PlacementSession::begin(Side::Player, &config, 4).unwrap();
        session.on_reference_cell_entered(player(2, 2)).unwrap();
        assert_eq!(session.on_confirm(), Ok(true));
        let occupied = session.board().occupied_count();

        assert_eq!(session.on_reference_cell_entered(player(4, 4)), Ok(None));
        assert_eq!(session.on_toggle_orientation(), Ok(None));
        assert_eq!(session.on_confirm(), Ok(false));
        assert_eq!(session.state(), SessionState::Complete);
        assert_eq!(session.orientation(), Orientation::Horizontal);
        assert_eq!(session.board().occupied_count(), occupied);
    }

    #[test]
    fn begin_validates_the_board() {
        assert_eq!(
            PlacementSession::begin(Side::Player, &small_fleet(), 0).unwrap_err(),
            SessionError::Config(FleetConfigError::TooLong {
                kind: "destroyer".into(),
                length: 3,
                size: 0
            })
        );
        assert!(PlacementSession::begin(Side::Enemy, &FleetConfig::standard(), 4).is_ok());
    }
}
