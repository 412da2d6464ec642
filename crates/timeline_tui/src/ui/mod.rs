//! Screen layout.

mod board;
mod moves;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders},
};

/// Draws the whole screen.
pub fn draw(f: &mut Frame, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(f.area());

    let board_block = Block::default().borders(Borders::ALL).title("Timeline Tic-Tac-Toe");
    let board_area = board_block.inner(columns[0]);
    f.render_widget(board_block, columns[0]);

    board::render_board(f, board_area, app.game());
    moves::render_panel(f, columns[1], app);
}
