//! Application state for the terminal client.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, instrument};

use crate::game::{Cell, MoveOutcome};
use crate::session::{GameSession, PlayerNames};

use super::input::move_cursor;

/// Which name field has input focus on the name entry screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    /// Editing the X player's name.
    X,
    /// Editing the O player's name.
    O,
}

/// State of the name entry screen.
#[derive(Debug, Clone)]
pub struct NameEntry {
    /// Input buffer for the X player's name.
    pub x_input: String,
    /// Input buffer for the O player's name.
    pub o_input: String,
    /// Focused field.
    pub focus: NameField,
    /// True at session start, when there is no game to cancel back to.
    pub first_time: bool,
}

impl NameEntry {
    fn at_session_start() -> Self {
        Self {
            x_input: String::new(),
            o_input: String::new(),
            focus: NameField::X,
            first_time: true,
        }
    }

    fn prefilled(names: &PlayerNames) -> Self {
        Self {
            x_input: names.x.clone(),
            o_input: names.o.clone(),
            focus: NameField::X,
            first_time: false,
        }
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            NameField::X => &mut self.x_input,
            NameField::O => &mut self.o_input,
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            NameField::X => NameField::O,
            NameField::O => NameField::X,
        };
    }
}

/// Screen currently shown.
#[derive(Debug, Clone)]
pub enum Screen {
    /// Collecting or editing player names.
    NameEntry(NameEntry),
    /// Playing the game.
    Playing,
}

/// Result of handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running.
    Stay,
    /// Exit the application cleanly.
    Quit,
}

/// Main application state: the session plus presentation state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    screen: Screen,
    cursor: Cell,
    status: String,
}

impl App {
    /// Creates the app, opening on the name entry screen.
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            screen: Screen::NameEntry(NameEntry::at_session_start()),
            cursor: Cell::Center,
            status: String::new(),
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Returns the board cursor.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Returns the status line text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Handles a key press and returns the resulting transition.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Transition {
        match &mut self.screen {
            Screen::NameEntry(_) => self.handle_name_entry_key(key),
            Screen::Playing => self.handle_playing_key(key),
        }
    }

    fn handle_name_entry_key(&mut self, key: KeyEvent) -> Transition {
        let Screen::NameEntry(entry) = &mut self.screen else {
            return Transition::Stay;
        };

        match key.code {
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => entry.toggle_focus(),
            KeyCode::Backspace => {
                entry.focused_input().pop();
            }
            KeyCode::Char(c) => {
                let input = entry.focused_input();
                if input.len() < 24 {
                    input.push(c);
                }
            }
            KeyCode::Enter => {
                let names = PlayerNames::new(entry.x_input.clone(), entry.o_input.clone());
                self.session.set_names(names);
                self.status = format!("{}'s turn", self.active_name());
                self.screen = Screen::Playing;
            }
            KeyCode::Esc => {
                if entry.first_time {
                    // Nothing to cancel back to; start with defaults.
                    self.session.set_names(PlayerNames::default());
                }
                self.status = format!("{}'s turn", self.active_name());
                self.screen = Screen::Playing;
            }
            _ => {}
        }

        Transition::Stay
    }

    fn handle_playing_key(&mut self, key: KeyEvent) -> Transition {
        match key.code {
            KeyCode::Char('q') => return Transition::Quit,
            KeyCode::Char('r') => {
                self.session.restart();
                self.status = format!("Board cleared. {}'s turn", self.active_name());
            }
            KeyCode::Char('n') => {
                self.screen = Screen::NameEntry(NameEntry::prefilled(self.session.names()));
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key.code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_at(self.cursor.index());
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10)
                    && digit >= 1
                {
                    self.place_at(digit as usize - 1);
                }
            }
            _ => {}
        }

        Transition::Stay
    }

    /// Plays a move through the session and updates the status line.
    ///
    /// Rejected moves are dropped silently; the display simply doesn't
    /// change.
    fn place_at(&mut self, index: usize) {
        match self.session.play(index) {
            Ok(MoveOutcome::Continue { next }) => {
                self.status = format!("{}'s turn", self.session.names().name_of(next));
            }
            Ok(MoveOutcome::Won(mark)) => {
                self.status = format!(
                    "{} wins! New round: {}'s turn",
                    self.session.names().name_of(mark),
                    self.active_name()
                );
            }
            Ok(MoveOutcome::Draw) => {
                self.status = format!("It's a draw! New round: {}'s turn", self.active_name());
            }
            Err(rejected) => {
                debug!(%rejected, "Move ignored");
            }
        }
    }

    fn active_name(&self) -> &str {
        self.session.names().name_of(self.session.active_mark())
    }
}
