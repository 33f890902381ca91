//! Terminal front end for gridmark.
//!
//! Reproduces the original flow: a welcome screen collecting two player
//! names, the game board, a result message, and a restart. All engine
//! logic lives in the `gridmark` crate; this binary only renders and
//! translates key presses into moves.

#![warn(missing_docs)]

mod controller;
mod feed;
mod screen;
mod screens;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use controller::Controller;

/// Two-player tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "gridmark_tui")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Preset name for player X; skips the welcome screen
    #[arg(long)]
    player_x: Option<String>,

    /// Preset name for player O; skips the welcome screen
    #[arg(long)]
    player_o: Option<String>,

    /// Log file path (logs never go to the terminal itself)
    #[arg(long, default_value = "gridmark_tui.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so output never corrupts the alternate screen.
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting gridmark TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = Controller::new(cli.player_x, cli.player_o);
    let res = controller.run(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}
