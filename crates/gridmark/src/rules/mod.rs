//! Outcome evaluation.
//!
//! Pure functions over a board snapshot. Evaluation never mutates the
//! board; the session feeds it copies and stores the verdict.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::winning_mark;

use crate::board::{Board, Outcome};
use tracing::instrument;

/// Classifies a board.
///
/// Checks the eight lines first (rows, then columns, then diagonals,
/// each in index order) and returns the first winner found. A full
/// board with no winner is a draw; anything else is still in progress.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = win::winning_mark(board) {
        return Outcome::Won(mark);
    }

    if draw::is_full(board) {
        return Outcome::Draw;
    }

    Outcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    #[test]
    fn empty_board_is_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn completed_row_reports_the_winner() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X).unwrap();
        board.place(0, 1, Mark::X).unwrap();
        board.place(0, 2, Mark::X).unwrap();
        assert_eq!(evaluate(&board), Outcome::Won(Mark::X));
    }

    #[test]
    fn partial_board_is_in_progress() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X).unwrap();
        board.place(1, 1, Mark::O).unwrap();
        assert_eq!(evaluate(&board), Outcome::InProgress);
    }
}
