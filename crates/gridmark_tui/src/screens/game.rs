//! Game screen: the board grid, status line, and restart flow.

use crossterm::event::{KeyCode, KeyEvent};
use gridmark::{Board, Cell, GameSession, Mark, Outcome, SIZE};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, instrument};

use crate::feed::{FeedPresenter, UiFeed};
use crate::screen::{Screen, ScreenTransition};

/// State for the game screen.
///
/// Owns the engine session; the board it draws comes from the feed the
/// session publishes snapshots into, never from reaching around the
/// presentation port.
pub struct GameScreen {
    session: GameSession,
    feed: Rc<RefCell<UiFeed>>,
    cursor: (usize, usize),
    status: String,
}

impl GameScreen {
    /// Creates a session for the named players and hooks up the feed.
    #[instrument]
    pub fn new(name_x: &str, name_o: &str) -> Self {
        let feed = Rc::new(RefCell::new(UiFeed::default()));
        let mut session = GameSession::new(name_x, name_o);
        session.attach_presenter(Box::new(FeedPresenter::new(Rc::clone(&feed))));
        let status = format!("{} to move", session.current_player().name());
        Self {
            session,
            feed,
            cursor: (1, 1),
            status,
        }
    }

    /// Submits a move and refreshes the status line.
    fn try_move(&mut self, row: usize, col: usize) {
        debug!(row, col, "Submitting move");
        match self.session.make_move(row, col) {
            Ok(Outcome::InProgress) => {
                self.status = format!("{} to move", self.session.current_player().name());
            }
            Ok(_) => {
                // The session pushed the report through the port.
                let headline = self
                    .feed
                    .borrow()
                    .report()
                    .map(|r| r.headline())
                    .unwrap_or_default();
                self.status = format!("{headline} Press 'r' for a rematch.");
            }
            Err(e) => {
                // The engine ignored the input; the message is advisory.
                self.status = format!("Ignored: {e}");
            }
        }
    }

    /// Same players, fresh board.
    fn restart(&mut self) {
        info!("Restarting game");
        self.session.reset();
        self.status = format!("New game. {} to move", self.session.current_player().name());
    }

    fn move_cursor(&mut self, key: KeyCode) {
        let (row, col) = self.cursor;
        self.cursor = match key {
            KeyCode::Up => (row.saturating_sub(1), col),
            KeyCode::Down => ((row + 1).min(SIZE - 1), col),
            KeyCode::Left => (row, col.saturating_sub(1)),
            KeyCode::Right => (row, (col + 1).min(SIZE - 1)),
            _ => (row, col),
        };
    }

    fn draw_board(&self, frame: &mut Frame, area: Rect, board: &Board) {
        let board_area = center_rect(area, 40, 11);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(board_area);

        self.draw_row(frame, rows[0], board, 0);
        draw_separator(frame, rows[1]);
        self.draw_row(frame, rows[2], board, 1);
        draw_separator(frame, rows[3]);
        self.draw_row(frame, rows[4], board, 2);
    }

    fn draw_row(&self, frame: &mut Frame, area: Rect, board: &Board, row: usize) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(area);

        self.draw_cell(frame, cols[0], board, row, 0);
        draw_separator_vertical(frame, cols[1]);
        self.draw_cell(frame, cols[2], board, row, 1);
        draw_separator_vertical(frame, cols[3]);
        self.draw_cell(frame, cols[4], board, row, 2);
    }

    fn draw_cell(&self, frame: &mut Frame, area: Rect, board: &Board, row: usize, col: usize) {
        let (symbol, base_style) = match board.get(row, col) {
            Some(Cell::Occupied(Mark::X)) => (
                " X ",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Some(Cell::Occupied(Mark::O)) => (
                " O ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            _ => ("   ", Style::default().fg(Color::DarkGray)),
        };

        let style = if (row, col) == self.cursor {
            base_style.bg(Color::White).fg(Color::Black)
        } else {
            base_style
        };

        let paragraph =
            Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

impl Screen for GameScreen {
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(11),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let matchup = format!(
            "{}  vs  {}",
            self.session.player(Mark::X),
            self.session.player(Mark::O),
        );
        let title = Paragraph::new(matchup)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Gridmark"));
        frame.render_widget(title, chunks[0]);

        // Render from the snapshot the session pushed through the port.
        let board = self.feed.borrow().board();
        self.draw_board(frame, chunks[1], &board);

        let status = Paragraph::new(self.status.as_str())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[2]);

        let help = Paragraph::new(
            "Arrows: select | Enter/1-9: place | r: restart | w: new players | q: quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            KeyCode::Char('w') | KeyCode::Char('W') => ScreenTransition::GoToWelcome,
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.restart();
                ScreenTransition::Stay
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.move_cursor(key.code);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let (row, col) = self.cursor;
                self.try_move(row, col);
                ScreenTransition::Stay
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // 1-9 address the grid row-major, 1 = top-left.
                if let Some(digit) = c.to_digit(10)
                    && (1..=9).contains(&digit)
                {
                    let pos = digit as usize - 1;
                    self.try_move(pos / SIZE, pos % SIZE);
                }
                ScreenTransition::Stay
            }
            _ => ScreenTransition::Stay,
        }
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
