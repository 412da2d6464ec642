//! Move list and status panel.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use timeline_tictactoe::{DisplayOrder, GameStatus, MoveListEntry};

const HELP: &str = "1-9 play  ↑/↓ select  Enter jump  v reverse  r reset  q quit";

/// Renders the status line, key help and the move list.
pub fn render_panel(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    render_status(f, chunks[0], app);
    render_moves(f, chunks[1], app);

    let help = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let status = app.game().status();
    let color = match status {
        GameStatus::Won { .. } => Color::Green,
        GameStatus::Draw => Color::Yellow,
        GameStatus::InProgress { .. } => Color::White,
    };
    let paragraph = Paragraph::new(status.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(paragraph, area);
}

fn render_moves(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app.move_list().iter().map(entry_item).collect();
    let title = match app.game().display_order() {
        DisplayOrder::Ascending => "Moves (oldest first)",
        DisplayOrder::Descending => "Moves (newest first)",
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.cursor()));
    f.render_stateful_widget(list, area, &mut state);
}

fn entry_item(entry: &MoveListEntry) -> ListItem<'static> {
    let style = if entry.selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    ListItem::new(Line::styled(entry.to_string(), style))
}
