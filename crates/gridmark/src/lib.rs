//! Gridmark, a two-player tic-tac-toe engine.
//!
//! The engine owns everything with actual logic in it: board state,
//! turn alternation, move legality, and outcome detection. Rendering
//! and input are collaborator concerns behind the presentation port,
//! so any front end (the bundled terminal UI, a test harness) can drive
//! a session without the core knowing about it.
//!
//! # Architecture
//!
//! - **Board state** ([`Board`], [`Cell`], [`Mark`]): the 3x3 grid and
//!   its mutation rules.
//! - **Rules** ([`rules`]): pure outcome evaluation over snapshots.
//! - **Session** ([`GameSession`]): the move coordinator. Validates,
//!   mutates, swaps turns, re-evaluates, and notifies the presenter.
//! - **Port** ([`Presenter`], [`GameReport`]): the interface the
//!   display layer implements.
//!
//! # Example
//!
//! ```
//! use gridmark::{GameSession, Mark, Outcome};
//!
//! # fn main() -> Result<(), gridmark::MoveError> {
//! let mut session = GameSession::new("Ada", "Grace");
//! session.make_move(0, 0)?; // Ada, X
//! session.make_move(1, 1)?; // Grace, O
//! session.make_move(0, 1)?;
//! session.make_move(2, 2)?;
//! let outcome = session.make_move(0, 2)?; // completes the top row
//! assert_eq!(outcome, Outcome::Won(Mark::X));
//! assert_eq!(session.winner().map(|p| p.name().as_str()), Some("Ada"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod player;
mod port;
pub mod rules;
mod session;

pub use board::{Board, Cell, Mark, Outcome, SIZE};
pub use error::MoveError;
pub use player::Player;
pub use port::{GameReport, Presenter};
pub use session::GameSession;
