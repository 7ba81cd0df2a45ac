use crate::game::{Snapshot, Status};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{board_lines, player_color};

/// Draw one full frame from `snapshot`. Nothing is cached between frames.
pub fn render(
    frame: &mut Frame,
    snapshot: &Snapshot,
    selected_column: usize,
    highlight_last_move: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Status
            Constraint::Min(10),    // Board
            Constraint::Length(3),  // Error banner
            Constraint::Length(3),  // Controls
        ])
        .split(frame.area());

    render_header(frame, snapshot, chunks[0]);
    render_board(frame, snapshot, selected_column, highlight_last_move, chunks[1]);
    render_error(frame, snapshot, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn status_color(snapshot: &Snapshot) -> Color {
    match snapshot.status {
        Status::Draw => Color::White,
        Status::InProgress => player_color(snapshot.turn),
        won => won.winner().map_or(Color::White, player_color),
    }
}

fn render_header(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let header = Paragraph::new(snapshot.status.message(snapshot.turn))
        .style(
            Style::default()
                .fg(status_color(snapshot))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect 4"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    snapshot: &Snapshot,
    selected_column: usize,
    highlight_last_move: bool,
    area: Rect,
) {
    let last_move = snapshot.last_move.filter(|_| highlight_last_move);
    let lines = board_lines(&snapshot.board, selected_column, last_move);
    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_error(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let text = snapshot
        .error_message()
        .map(|msg| format!("Oops! {msg}"))
        .unwrap_or_default();
    let banner = Paragraph::new(text)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(banner, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("1-7: Drop  |  ←/→ Enter: Drop at cursor  |  U: Undo  |  R: Restart  |  Q: Quit");
    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
