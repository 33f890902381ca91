//! Controller driving the welcome/game screen state machine.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::screen::{Screen, ScreenTransition};
use crate::screens::{GameScreen, WelcomeScreen};

/// Active screen in the state machine.
enum ActiveScreen {
    Welcome(WelcomeScreen),
    Game(GameScreen),
}

/// Controller that owns the active screen and the event loop.
pub struct Controller {
    screen: ActiveScreen,
}

impl Controller {
    /// Creates a controller.
    ///
    /// With no preset names the session starts on the welcome screen,
    /// like the original start page; providing either name on the
    /// command line skips straight to the board.
    #[instrument]
    pub fn new(preset_x: Option<String>, preset_o: Option<String>) -> Self {
        let screen = match (preset_x, preset_o) {
            (None, None) => ActiveScreen::Welcome(WelcomeScreen::new()),
            (x, o) => {
                info!("Preset names supplied, skipping welcome screen");
                ActiveScreen::Game(GameScreen::new(
                    x.as_deref().unwrap_or(""),
                    o.as_deref().unwrap_or(""),
                ))
            }
        };
        Self { screen }
    }

    /// Runs the event loop until the user quits.
    ///
    /// Input is processed one event at a time, each to completion,
    /// before the next frame is drawn.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()>
    where
        B::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        loop {
            terminal.draw(|f| match &self.screen {
                ActiveScreen::Welcome(s) => s.render(f),
                ActiveScreen::Game(s) => s.render(f),
            })?;

            // Poll with a short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = match &mut self.screen {
                    ActiveScreen::Welcome(s) => s.handle_key(key),
                    ActiveScreen::Game(s) => s.handle_key(key),
                };

                match transition {
                    ScreenTransition::Stay => {}
                    ScreenTransition::StartGame { player_x, player_o } => {
                        info!(player_x, player_o, "Starting game");
                        self.screen = ActiveScreen::Game(GameScreen::new(&player_x, &player_o));
                    }
                    ScreenTransition::GoToWelcome => {
                        debug!("Returning to welcome screen");
                        self.screen = ActiveScreen::Welcome(WelcomeScreen::new());
                    }
                    ScreenTransition::Quit => {
                        info!("Quitting");
                        return Ok(());
                    }
                }
            }
        }
    }
}
