//! Core domain types: marks, cells, the 3x3 board, and game outcomes.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};

/// Board dimension. Rows and columns are indexed `0..SIZE`.
pub const SIZE: usize = 3;

/// The symbol a player places in a cell.
///
/// `X` always takes the first move of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// The first player's mark.
    X,
    /// The second player's mark.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// One square of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Claimed by a mark. Never reverts to empty except through a reset.
    Occupied(Mark),
}

/// 3x3 grid of cells, row-major, rows and columns indexed 0-2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Gets the cell at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Checks whether the cell at `(row, col)` is in range and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] when either index exceeds 2, and
    /// [`MoveError::CellOccupied`] when the cell already holds a mark. The
    /// board is unchanged on error.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), MoveError> {
        match self.get(row, col) {
            None => Err(MoveError::OutOfRange { row, col }),
            Some(Cell::Occupied(_)) => Err(MoveError::CellOccupied { row, col }),
            Some(Cell::Empty) => {
                self.cells[row][col] = Cell::Occupied(mark);
                Ok(())
            }
        }
    }

    /// Sets every cell back to empty.
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; SIZE]; SIZE];
    }

    /// Returns a read-only copy of the grid for evaluation or rendering.
    pub fn snapshot(&self) -> Board {
        *self
    }

    /// Returns all cells as a grid slice.
    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Counts the occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c != Cell::Empty)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Occupied(mark) => write!(f, "{mark}")?,
                }
                if col < SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Classification of a board: ongoing, won, or drawn.
///
/// Terminal variants are absorbing: once a session stores `Won` or `Draw`,
/// no further moves are accepted until a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves are still being accepted.
    InProgress,
    /// The mark completed a line.
    Won(Mark),
    /// The board is full with no winning line.
    Draw,
}

impl Outcome {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "game in progress"),
            Outcome::Won(mark) => write!(f, "{mark} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_on_empty_cell() {
        let mut board = Board::new();
        assert!(board.place(1, 1, Mark::X).is_ok());
        assert_eq!(board.get(1, 1), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn place_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.place(3, 0, Mark::X),
            Err(MoveError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            board.place(0, 7, Mark::O),
            Err(MoveError::OutOfRange { row: 0, col: 7 })
        );
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn place_on_occupied_cell() {
        let mut board = Board::new();
        board.place(0, 2, Mark::X).unwrap();
        assert_eq!(
            board.place(0, 2, Mark::O),
            Err(MoveError::CellOccupied { row: 0, col: 2 })
        );
        // The original mark survives.
        assert_eq!(board.get(0, 2), Some(Cell::Occupied(Mark::X)));
    }

    #[test]
    fn clear_empties_every_cell() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X).unwrap();
        board.place(2, 2, Mark::O).unwrap();
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn snapshot_is_detached() {
        let mut board = Board::new();
        let snapshot = board.snapshot();
        board.place(0, 0, Mark::X).unwrap();
        assert!(snapshot.is_empty(0, 0));
    }

    #[test]
    fn display_renders_grid() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X).unwrap();
        board.place(1, 1, Mark::O).unwrap();
        assert_eq!(board.to_string(), "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.");
    }
}
