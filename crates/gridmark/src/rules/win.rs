//! Win detection.

use crate::board::{Board, Cell, Mark};
use tracing::instrument;

/// The eight lines of the grid as `(row, col)` triples, in scan order:
/// rows 0-2, then columns 0-2, then the two diagonals. At most one mark
/// can complete a line in a legal game, but the fixed order keeps the
/// result deterministic on arbitrary boards.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the mark holding a complete line, scanning in the fixed
/// line order and stopping at the first match.
#[instrument]
pub fn winning_mark(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        if let Some(Cell::Occupied(mark)) = board.get(a.0, a.1)
            && board.get(b.0, b.1) == Some(Cell::Occupied(mark))
            && board.get(c.0, c.1) == Some(Cell::Occupied(mark))
        {
            return Some(mark);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_no_winner() {
        let board = Board::new();
        assert_eq!(winning_mark(&board), None);
    }

    #[test]
    fn top_row_wins() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X).unwrap();
        board.place(0, 1, Mark::X).unwrap();
        board.place(0, 2, Mark::X).unwrap();
        assert_eq!(winning_mark(&board), Some(Mark::X));
    }

    #[test]
    fn middle_column_wins() {
        let mut board = Board::new();
        board.place(0, 1, Mark::O).unwrap();
        board.place(1, 1, Mark::O).unwrap();
        board.place(2, 1, Mark::O).unwrap();
        assert_eq!(winning_mark(&board), Some(Mark::O));
    }

    #[test]
    fn main_diagonal_wins() {
        let mut board = Board::new();
        board.place(0, 0, Mark::O).unwrap();
        board.place(1, 1, Mark::O).unwrap();
        board.place(2, 2, Mark::O).unwrap();
        assert_eq!(winning_mark(&board), Some(Mark::O));
    }

    #[test]
    fn anti_diagonal_wins() {
        let mut board = Board::new();
        board.place(0, 2, Mark::X).unwrap();
        board.place(1, 1, Mark::X).unwrap();
        board.place(2, 0, Mark::X).unwrap();
        assert_eq!(winning_mark(&board), Some(Mark::X));
    }

    #[test]
    fn two_in_a_row_is_not_a_win() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X).unwrap();
        board.place(0, 1, Mark::X).unwrap();
        assert_eq!(winning_mark(&board), None);
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X).unwrap();
        board.place(0, 1, Mark::O).unwrap();
        board.place(0, 2, Mark::X).unwrap();
        assert_eq!(winning_mark(&board), None);
    }

    #[test]
    fn first_line_in_scan_order_wins_on_double_win_board() {
        // Unreachable under legal play, but the scan must stay
        // deterministic: X's row 0 is found before O's row 2.
        let mut board = Board::new();
        for col in 0..3 {
            board.place(0, col, Mark::X).unwrap();
            board.place(2, col, Mark::O).unwrap();
        }
        assert_eq!(winning_mark(&board), Some(Mark::X));
    }
}
