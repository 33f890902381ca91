//! Front-end implementation of the engine's presentation port.
//!
//! The session pushes snapshots and the end-of-game report through
//! [`gridmark::Presenter`]; this module routes them into a shared feed
//! that the game screen reads every frame.

use gridmark::{Board, GameReport, Presenter};
use std::cell::RefCell;
use std::rc::Rc;

/// State pushed out of the engine.
#[derive(Debug, Default)]
pub struct UiFeed {
    board: Board,
    report: Option<GameReport>,
}

impl UiFeed {
    /// The latest board snapshot.
    pub fn board(&self) -> Board {
        self.board
    }

    /// The end-of-game report, once the session reaches one.
    pub fn report(&self) -> Option<&GameReport> {
        self.report.as_ref()
    }
}

/// Presenter writing every notification into the shared feed.
pub struct FeedPresenter(Rc<RefCell<UiFeed>>);

impl FeedPresenter {
    /// Creates a presenter backed by `feed`.
    pub fn new(feed: Rc<RefCell<UiFeed>>) -> Self {
        Self(feed)
    }
}

impl Presenter for FeedPresenter {
    fn board_changed(&mut self, board: &Board) {
        let mut feed = self.0.borrow_mut();
        feed.board = *board;
        // An empty snapshot follows a reset; the old result is stale.
        if board.occupied_count() == 0 {
            feed.report = None;
        }
    }

    fn game_ended(&mut self, report: &GameReport) {
        self.0.borrow_mut().report = Some(report.clone());
    }
}
