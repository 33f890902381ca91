//! Game session: the move coordinator.
//!
//! A [`GameSession`] is an explicit session object with no process-wide
//! state, so several sessions can coexist and tests can drive them
//! independently. The session is the sole mutator of the board and the
//! turn reference; the rules module only ever sees snapshots.

use crate::board::{Board, Mark, Outcome};
use crate::error::MoveError;
use crate::player::Player;
use crate::port::{GameReport, Presenter};
use crate::rules;
use tracing::{debug, info, instrument, warn};

/// One complete game from start to reset.
///
/// Owns the 3x3 board, both player identities, the turn reference, and
/// the current outcome. Moves arrive one at a time and are processed to
/// completion; there is no background work and no shared state.
pub struct GameSession {
    board: Board,
    player_x: Player,
    player_o: Player,
    to_move: Mark,
    outcome: Outcome,
    presenter: Option<Box<dyn Presenter>>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("player_x", &self.player_x)
            .field("player_o", &self.player_o)
            .field("to_move", &self.to_move)
            .field("outcome", &self.outcome)
            .field("presenter", &self.presenter.is_some())
            .finish()
    }
}

impl GameSession {
    /// Creates a session for two named players. X moves first.
    ///
    /// Empty names default to the mark symbols, matching the welcome
    /// screen's behavior when a field is left blank.
    #[instrument]
    pub fn new(x_name: &str, o_name: &str) -> Self {
        info!(x_name, o_name, "Creating game session");
        Self {
            board: Board::new(),
            player_x: Player::new(x_name, Mark::X),
            player_o: Player::new(o_name, Mark::O),
            to_move: Mark::X,
            outcome: Outcome::InProgress,
            presenter: None,
        }
    }

    /// Attaches the display collaborator and pushes the current board
    /// to it immediately.
    pub fn attach_presenter(&mut self, mut presenter: Box<dyn Presenter>) {
        presenter.board_changed(&self.board.snapshot());
        self.presenter = Some(presenter);
    }

    /// Processes one proposed move at `(row, col)` for the player whose
    /// turn it is.
    ///
    /// On success the cell is claimed, the turn swaps to the other
    /// player, and the outcome is re-evaluated; the presenter receives
    /// the new snapshot, plus an end-of-game report when the outcome
    /// turned terminal. Returns the outcome after the move.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] when the session already holds a terminal
    /// outcome, [`MoveError::OutOfRange`] and [`MoveError::CellOccupied`]
    /// straight from the board. Rejected moves change nothing: not the
    /// board, not the turn, not the outcome.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<Outcome, MoveError> {
        if self.outcome.is_terminal() {
            warn!(outcome = %self.outcome, "Move rejected: game is over");
            return Err(MoveError::GameOver);
        }

        let mark = self.to_move;
        if let Err(e) = self.board.place(row, col, mark) {
            debug!(error = %e, "Move rejected");
            return Err(e);
        }

        self.switch_turn();
        self.outcome = rules::evaluate(&self.board.snapshot());
        debug!(outcome = %self.outcome, "Move accepted");

        let snapshot = self.board.snapshot();
        if let Some(presenter) = self.presenter.as_mut() {
            presenter.board_changed(&snapshot);
        }

        if self.outcome.is_terminal() {
            let report = self.report();
            info!(headline = %report.headline(), "Game ended");
            if let Some(presenter) = self.presenter.as_mut() {
                presenter.game_ended(&report);
            }
        }

        Ok(self.outcome)
    }

    /// Starts the session over: empty board, X to move, outcome back to
    /// in-progress. Player identities are untouched.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game session");
        self.board.clear();
        self.to_move = Mark::X;
        self.outcome = Outcome::InProgress;

        let snapshot = self.board.snapshot();
        if let Some(presenter) = self.presenter.as_mut() {
            presenter.board_changed(&snapshot);
        }
    }

    /// Swaps the turn reference. Calling twice restores the original.
    fn switch_turn(&mut self) {
        self.to_move = self.to_move.opponent();
    }

    /// Returns the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a read-only copy of the grid for rendering.
    pub fn snapshot(&self) -> Board {
        self.board.snapshot()
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the mark that moves next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the player owning the given mark.
    pub fn player(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.to_move)
    }

    /// Returns the winning player once the outcome is a win.
    pub fn winner(&self) -> Option<&Player> {
        self.outcome.winner().map(|mark| self.player(mark))
    }

    /// Builds the end-of-game summary for the presenter.
    pub fn report(&self) -> GameReport {
        GameReport::new(self.outcome, self.winner().cloned(), self.board.snapshot())
    }
}
