use crate::game::{col_row, Cell, GameState, LastMove, Player, ALL_LINES, COLUMNS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[allow(clippy::too_many_arguments)]
pub fn render(
    frame: &mut Frame,
    state: &GameState,
    selected_column: usize,
    falling: Option<(LastMove, f64)>,
    message: &Option<String>,
    mode: &str,
    cursor: usize,
    history_len: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, state, mode, cursor, history_len, chunks[0]);
    render_board(frame, state, selected_column, falling, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(
    frame: &mut Frame,
    state: &GameState,
    mode: &str,
    cursor: usize,
    history_len: usize,
    area: ratatui::layout::Rect,
) {
    let (player_name, color) = match state.turn() {
        Player::Red => ("Red", Color::Red),
        Player::Yellow => ("Yellow", Color::Yellow),
    };

    let status = if state.finished() {
        format!("Game Over  |  {mode}  |  move {cursor}/{}", history_len - 1)
    } else {
        format!(
            "Current Player: {player_name}  |  {mode}  |  move {cursor}/{}",
            history_len - 1
        )
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

/// Row the falling token is drawn on for the given progress, interpolating
/// from just above the board down to its landing row.
fn falling_row(landing_row: usize, progress: f64) -> Option<usize> {
    let start = ROWS as f64; // one row above the top
    let end = landing_row as f64;
    let pos = start + (end - start) * progress;
    let row = pos.round() as isize;
    (row >= 0 && row < ROWS as isize).then_some(row as usize)
}

fn render_board(
    frame: &mut Frame,
    state: &GameState,
    selected_column: usize,
    falling: Option<(LastMove, f64)>,
    area: ratatui::layout::Rect,
) {
    // The four cells to pulse once the game is won.
    let winning_cells: Vec<(usize, usize)> = state
        .winning_line()
        .map(|idx| ALL_LINES[idx].iter().map(|&i| col_row(i)).collect())
        .unwrap_or_default();

    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLUMNS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    // Top border
    lines.push(Line::from("  ╔══════════════════════╗"));

    // Board rows, top row of the screen is row ROWS-1
    for screen_row in 0..ROWS {
        let row = ROWS - 1 - screen_row;
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLUMNS {
            let mut cell = state.cell(col, row);

            // While the drop animation runs the landing cell is shown at the
            // interpolated row instead of its final one.
            if let Some((mv, progress)) = falling {
                if col == mv.column {
                    if row == mv.row {
                        cell = Cell::Empty;
                    }
                    if falling_row(mv.row, progress) == Some(row) {
                        cell = mv.player.to_cell();
                    }
                }
            }

            let (symbol, mut style) = match cell {
                Cell::Empty => (" . ", Style::default().fg(Color::DarkGray)),
                Cell::Red => (" ● ", Style::default().fg(Color::Red)),
                Cell::Yellow => (" ● ", Style::default().fg(Color::Yellow)),
            };
            if winning_cells.contains(&(col, row)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from("  ╚══════════════════════╝"));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")]; // Align with board (3 chars to match "  ║")
    for col in 0..COLUMNS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line1 = Line::from("←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit");
    let line2 = Line::from("U: Undo  |  Y: Redo  |  A: Autopilot");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falling_token_starts_above_the_board() {
        // Progress 0 puts the token at the virtual row above the top edge,
        // which is not drawn.
        assert_eq!(falling_row(0, 0.0), None);
    }

    #[test]
    fn falling_token_lands_on_its_row() {
        assert_eq!(falling_row(0, 1.0), Some(0));
        assert_eq!(falling_row(4, 1.0), Some(4));
    }

    #[test]
    fn falling_token_descends_monotonically() {
        let mut last = ROWS as isize;
        for step in 0..=10 {
            let progress = step as f64 / 10.0;
            if let Some(row) = falling_row(2, progress) {
                assert!((row as isize) <= last);
                last = row as isize;
            }
        }
        assert_eq!(last, 2);
    }
}
