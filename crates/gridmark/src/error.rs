//! Error taxonomy for move handling.
//!
//! Every failure is returned to the caller as a value; nothing here
//! panics. All variants are recoverable by submitting a different move
//! or resetting the session.

/// Reasons a proposed move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column lies outside 0-2. The board is untouched.
    #[display("cell ({row}, {col}) is outside the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The targeted cell already holds a mark. The board is untouched.
    #[display("cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game has already ended; no moves are accepted until a reset.
    #[display("game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
