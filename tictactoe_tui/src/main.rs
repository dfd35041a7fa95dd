//! Terminal UI for local two-player tic-tac-toe.
//!
//! The UI is a thin presenter over [`tictactoe_core::Engine`]: each input
//! event is forwarded to the engine, then the full state is re-read and
//! re-rendered. One event is processed to completion before the next is
//! read, so there is no concurrent access to the game.

#![warn(missing_docs)]

mod app;
mod input;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;

/// Local two-player tic-tac-toe in the terminal.
#[derive(Debug, Parser)]
#[command(name = "tictactoe", version, about)]
struct Cli {
    /// Write logs to this file (the terminal itself belongs to the UI).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let log_file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::sync::Arc::new(log_file))
            .with_ansi(false)
            .init();
    }

    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new());

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        eprintln!("Error: {err:?}");
    }

    res
}

/// Draws the UI and processes input events until the user quits.
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if !app.handle_key(key.code) {
                info!("User quit");
                return Ok(());
            }
        }
    }
}
