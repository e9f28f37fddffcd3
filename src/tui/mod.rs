//! Terminal display/input layer.
//!
//! The TUI owns presentation only: it renders the session and forwards
//! key events to [`App`]. All game semantics live in the session and
//! the engine.

mod app;
mod input;
mod ui;

pub use app::{App, NameEntry, NameField, Screen, Transition};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::session::GameSession;

/// Runs the interactive client until the user quits.
///
/// Sets up the terminal, drives the event loop, and restores the
/// terminal on exit even when the loop errors.
#[instrument(skip(session))]
pub fn run(session: GameSession) -> Result<()> {
    info!("Starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_event_loop(&mut terminal, App::new(session));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref err) = res {
        error!(error = ?err, "Event loop error");
    }
    res
}

/// Draw-and-poll loop: one key event processed at a time.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll with a short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            if app.handle_key(key) == Transition::Quit {
                info!("User quit");
                return Ok(());
            }
        }
    }
}
