//! Welcome screen: player name entry.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, instrument};

use crate::screen::{Screen, ScreenTransition};

/// Which name field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Focus {
    #[default]
    PlayerX,
    PlayerO,
}

/// State for the welcome screen: one name field per player.
///
/// Fields left empty fall back to "X" and "O" when the game starts.
#[derive(Debug, Default)]
pub struct WelcomeScreen {
    name_x: String,
    name_o: String,
    focus: Focus,
}

impl WelcomeScreen {
    /// Creates an empty welcome screen.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    fn focused_field(&mut self) -> &mut String {
        match self.focus {
            Focus::PlayerX => &mut self.name_x,
            Focus::PlayerO => &mut self.name_o,
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::PlayerX => Focus::PlayerO,
            Focus::PlayerO => Focus::PlayerX,
        };
    }

    fn field(&self, frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
        let style = if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let input = Paragraph::new(value)
            .style(style)
            .block(Block::default().borders(Borders::ALL).title(title).border_style(border_style));
        frame.render_widget(input, area);
    }
}

impl Screen for WelcomeScreen {
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Welcome to Gridmark")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        self.field(frame, chunks[1], "Player X name", &self.name_x, self.focus == Focus::PlayerX);
        self.field(frame, chunks[2], "Player O name", &self.name_o, self.focus == Focus::PlayerO);

        let hint = Paragraph::new("Leave a field empty to play as \"X\" or \"O\"")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[3]);

        let help = Paragraph::new("Tab: switch field | Enter: start | Esc: quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[5]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Char(c) => {
                self.focused_field().push(c);
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.focused_field().pop();
                ScreenTransition::Stay
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                self.toggle_focus();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                debug!(name_x = %self.name_x, name_o = %self.name_o, "Names confirmed");
                ScreenTransition::StartGame {
                    player_x: self.name_x.clone(),
                    player_o: self.name_o.clone(),
                }
            }
            KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_fills_the_focused_field() {
        let mut screen = WelcomeScreen::new();
        screen.handle_key(key(KeyCode::Char('A')));
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Char('B')));
        assert_eq!(screen.name_x, "A");
        assert_eq!(screen.name_o, "B");
    }

    #[test]
    fn enter_starts_the_game_with_entered_names() {
        let mut screen = WelcomeScreen::new();
        screen.handle_key(key(KeyCode::Char('A')));
        match screen.handle_key(key(KeyCode::Enter)) {
            ScreenTransition::StartGame { player_x, player_o } => {
                assert_eq!(player_x, "A");
                assert_eq!(player_o, "");
            }
            other => panic!("unexpected transition: {other:?}"),
        }
    }
}
