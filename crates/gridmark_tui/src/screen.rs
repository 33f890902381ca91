//! Screen trait and transition type for the front-end state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`Controller`](crate::controller::Controller) state machine.
#[derive(Debug, Clone)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Start a game session with the entered player names.
    StartGame {
        /// Display name for the X player; empty means "X".
        player_x: String,
        /// Display name for the O player; empty means "O".
        player_o: String,
    },
    /// Return to the welcome screen to enter new names.
    GoToWelcome,
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen.
///
/// Each screen owns its own state, renders its UI, and handles key
/// events. The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting transition.
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;
}
