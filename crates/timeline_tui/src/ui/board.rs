//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use timeline_tictactoe::{Board, GameState, Player, Position, Square};

/// Renders the board at the current step, highlighting a winning line.
pub fn render_board(f: &mut Frame, area: Rect, game: &GameState) {
    let board = game.board();
    let line = game.winning_line();
    let open = game.open_squares();
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

    let cells = Cells { board, line, open: &open };
    render_row(f, rows[0], &cells, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], &cells, 3);
    render_separator(f, rows[3]);
    render_row(f, rows[4], &cells, 6);
}

/// What a square needs to know to draw itself.
struct Cells<'a> {
    board: &'a Board,
    line: Option<[Position; 3]>,
    open: &'a [Position],
}

fn render_row(f: &mut Frame, area: Rect, cells: &Cells, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (col, index) in [(0, start), (2, start + 1), (4, start + 2)] {
        if let Some(pos) = Position::from_index(index) {
            render_square(f, cols[col], cells, pos);
        }
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_square(f: &mut Frame, area: Rect, cells: &Cells, pos: Position) {
    let (text, mut style) = match cells.board.get(pos) {
        // Only squares that can still be played get their key number.
        Square::Empty if cells.open.contains(&pos) => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if cells.line.is_some_and(|l| l.contains(&pos)) {
        style = style.bg(Color::Yellow);
    }
    // Vertically center the mark in its 3-line cell.
    let paragraph = Paragraph::new(format!("\n{}", text))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn board_text(game: &GameState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 11)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_board(f, area, game);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn play(cells: &[usize]) -> GameState {
        cells
            .iter()
            .fold(GameState::starting_with(Player::X), |g, &c| g.apply_move(c))
    }

    #[test]
    fn test_open_squares_show_key_numbers() {
        let text = board_text(&play(&[0, 4]));
        assert!(text.contains('X') && text.contains('O'));
        for digit in ['2', '3', '4', '6', '7', '8', '9'] {
            assert!(text.contains(digit), "missing {digit}");
        }
        assert!(!text.contains('1') && !text.contains('5'));
    }

    #[test]
    fn test_won_board_hides_key_numbers() {
        let text = board_text(&play(&[0, 1, 3, 4, 6]));
        assert!(!text.chars().any(|c| c.is_ascii_digit()));
    }
}
