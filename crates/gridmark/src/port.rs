//! Presentation port.
//!
//! The engine pushes state to the display layer through [`Presenter`],
//! so the core carries no dependency on any UI toolkit. Implementations
//! live with the front end (terminal, test recorder, anything else).

use crate::board::{Board, Outcome};
use crate::player::Player;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Collaborator interface implemented by the display layer.
pub trait Presenter {
    /// Called with a fresh snapshot after every accepted mutation
    /// (move or reset).
    fn board_changed(&mut self, board: &Board);

    /// Called once when a move produces a terminal outcome.
    fn game_ended(&mut self, report: &GameReport);
}

/// End-of-game summary handed to the presenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct GameReport {
    outcome: Outcome,
    winner: Option<Player>,
    board: Board,
}

impl GameReport {
    /// One-line result message naming the winner by display name.
    pub fn headline(&self) -> String {
        match (&self.outcome, &self.winner) {
            (Outcome::Won(_), Some(player)) => format!("{} wins!", player.name()),
            (Outcome::Won(mark), None) => format!("{mark} wins!"),
            (Outcome::Draw, _) => "It's a draw!".to_string(),
            (Outcome::InProgress, _) => "Game in progress".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    #[test]
    fn headline_names_the_winner() {
        let report = GameReport::new(
            Outcome::Won(Mark::X),
            Some(Player::new("Ada", Mark::X)),
            Board::new(),
        );
        assert_eq!(report.headline(), "Ada wins!");
    }

    #[test]
    fn headline_announces_a_draw() {
        let report = GameReport::new(Outcome::Draw, None, Board::new());
        assert_eq!(report.headline(), "It's a draw!");
    }
}
