//! Draw detection.

use crate::board::{Board, Cell};
use tracing::instrument;

/// Checks whether every cell holds a mark.
///
/// A full board is only a draw when no line is complete; the caller
/// checks for a winner first.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().flatten().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::evaluate;
    use super::*;
    use crate::board::{Mark, Outcome};

    #[test]
    fn empty_board_is_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn partial_board_is_not_full() {
        let mut board = Board::new();
        board.place(1, 1, Mark::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn nine_marks_fill_the_board() {
        let mut board = Board::new();
        for row in 0..3 {
            for col in 0..3 {
                board.place(row, col, Mark::X).unwrap();
            }
        }
        assert!(is_full(&board));
    }

    #[test]
    fn full_board_without_winner_is_a_draw() {
        // X O X
        // O X O
        // O X O
        let mut board = Board::new();
        let grid = [
            [Mark::X, Mark::O, Mark::X],
            [Mark::O, Mark::X, Mark::O],
            [Mark::O, Mark::X, Mark::O],
        ];
        for (row, marks) in grid.iter().enumerate() {
            for (col, mark) in marks.iter().enumerate() {
                board.place(row, col, *mark).unwrap();
            }
        }
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn full_board_with_winner_is_not_a_draw() {
        // X X X
        // O O X
        // O X O
        let mut board = Board::new();
        let grid = [
            [Mark::X, Mark::X, Mark::X],
            [Mark::O, Mark::O, Mark::X],
            [Mark::O, Mark::X, Mark::O],
        ];
        for (row, marks) in grid.iter().enumerate() {
            for (col, mark) in marks.iter().enumerate() {
                board.place(row, col, *mark).unwrap();
            }
        }
        assert_eq!(evaluate(&board), Outcome::Won(Mark::X));
    }
}
