//! Stateless rendering for the terminal client.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::game::{Board, Cell, Mark, Square};
use crate::score::Outcome;
use crate::session::GameSession;

use super::app::{App, NameEntry, NameField, Screen};

/// Renders the current screen.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen() {
        Screen::NameEntry(entry) => draw_name_entry(frame, entry),
        Screen::Playing => draw_game(frame, app),
    }
}

fn draw_name_entry(frame: &mut Frame, entry: &NameEntry) {
    let area = center_rect(frame.area(), 46, 14);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // X name field
            Constraint::Length(3), // O name field
            Constraint::Length(3), // Hint
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe - Player Names")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_name_field(
        frame,
        chunks[1],
        "Player X",
        &entry.x_input,
        entry.focus == NameField::X,
    );
    draw_name_field(
        frame,
        chunks[2],
        "Player O",
        &entry.o_input,
        entry.focus == NameField::O,
    );

    let hint = Paragraph::new("Tab: switch field   Enter: start   Esc: skip")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[3]);
}

fn draw_name_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let text = if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    };
    let field = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(label));
    frame.render_widget(field, area);
}

fn draw_game(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(4), // Scores
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app.session().state().board(), app.cursor());

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    draw_scores(frame, chunks[3], app.session());

    let help = Paragraph::new("arrows: move   enter/1-9: place   r: restart   n: names   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_scores(frame: &mut Frame, area: Rect, session: &GameSession) {
    let names = session.names();
    let scores = session.scores();
    let active = session.active_mark();

    let mark_style = |mark: Mark| {
        if mark == active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{} (X): {}", names.x, scores.get(Outcome::X)),
            mark_style(Mark::X),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} (O): {}", names.o, scores.get(Outcome::O)),
            mark_style(Mark::O),
        ),
        Span::raw("   "),
        Span::raw(format!("Draws: {}", scores.get(Outcome::Draw))),
    ]);

    let panel = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(panel, area);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Cell) {
    // Center the board
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

    draw_row(
        frame,
        rows[0],
        board,
        cursor,
        &[Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    );
    draw_separator(frame, rows[1]);
    draw_row(
        frame,
        rows[2],
        board,
        cursor,
        &[Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    );
    draw_separator(frame, rows[3]);
    draw_row(
        frame,
        rows[4],
        board,
        cursor,
        &[Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    );
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Cell, cells: &[Cell; 3]) {
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

    draw_cell(frame, cols[0], board, cursor, cells[0]);
    draw_separator_vertical(frame, cols[1]);
    draw_cell(frame, cols[2], board, cursor, cells[1]);
    draw_separator_vertical(frame, cols[3]);
    draw_cell(frame, cols[4], board, cursor, cells[2]);
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Cell, cell: Cell) {
    let (symbol, base_style) = match board.get(cell) {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if cell == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─────────────────────────────────────────")
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
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
