use crate::game::{Board, Cell, MoveRecord, Player, COLS, ROWS};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

/// Build the board as text lines: column labels 1-7, the framed grid with the
/// top row first, and a cursor marker under `selected_column`.
pub fn board_lines(
    board: &Board,
    selected_column: usize,
    last_move: Option<MoveRecord>,
) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(ROWS + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::styled(label, Style::default().fg(Color::Gray)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔═════════════════════╗"));

    for row in (0..ROWS).rev() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..COLS {
            let is_last = last_move.is_some_and(|m| m.row == row && m.column == col);
            row_spans.push(cell_span(board.get(row, col), is_last));
        }
        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚═════════════════════╝"));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

fn cell_span(cell: Cell, is_last: bool) -> Span<'static> {
    match cell {
        Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(player) if is_last => Span::styled(
            " ◉ ",
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(player) => Span::styled(" ● ", Style::default().fg(player_color(player))),
    }
}
