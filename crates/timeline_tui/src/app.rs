//! Application state and key handling.

use crate::config::TuiConfig;
use crossterm::event::KeyCode;
use timeline_tictactoe::{DisplayOrder, FirstPlayer, GameState, MoveListEntry};
use tracing::{debug, info, warn};

/// Main application state.
pub struct App {
    game: GameState,
    source: Box<dyn FirstPlayer>,
    /// Row of the move list under the cursor, in display order.
    cursor: usize,
    should_quit: bool,
}

impl App {
    /// Creates the app described by `config`.
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_source(config.first_player().source(), *config.display_order())
    }

    /// Creates an app drawing opening players from `source`.
    pub fn with_source(mut source: Box<dyn FirstPlayer>, order: DisplayOrder) -> Self {
        let mut game = GameState::new_game(&mut source);
        if order == DisplayOrder::Descending {
            game = game.reverse_display_order();
        }
        let mut app = Self {
            game,
            source,
            cursor: 0,
            should_quit: false,
        };
        app.follow_current_step();
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Move list row under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Move list rows in display order.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        self.game.move_list()
    }

    /// Dispatches one key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c @ '1'..='9') => {
                let cell = c as usize - '1' as usize;
                self.play(cell);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.game.history().len() - 1;
                self.cursor = (self.cursor + 1).min(last);
            }
            KeyCode::Enter => self.jump_to_cursor(),
            KeyCode::Char('v') => self.reverse(),
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    /// Plays at `cell`; illegal moves change nothing.
    pub fn play(&mut self, cell: usize) {
        debug!(cell, "Making move");
        match self.game.try_apply_move(cell) {
            Ok(game) => {
                self.game = game;
                self.follow_current_step();
            }
            Err(e) => debug!(error = %e, "Ignoring illegal move"),
        }
    }

    /// Jumps to the step of the row under the cursor.
    fn jump_to_cursor(&mut self) {
        let Some(entry) = self.move_list().get(self.cursor).cloned() else {
            return;
        };
        match self.game.clone().jump_to(entry.step) {
            Ok(game) => self.game = game,
            Err(e) => warn!(error = %e, "Jump rejected"),
        }
    }

    /// Flips the move list order, keeping the cursor on the same step.
    fn reverse(&mut self) {
        self.game = self.game.clone().reverse_display_order();
        self.cursor = self.game.history().len() - 1 - self.cursor;
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game = self.game.clone().reset(&mut self.source);
        self.follow_current_step();
    }

    fn follow_current_step(&mut self) {
        if let Some(row) = self.move_list().iter().position(|e| e.selected) {
            self.cursor = row;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timeline_tictactoe::{Fixed, Player, Position, Square};

    fn app(order: DisplayOrder) -> App {
        App::with_source(Box::new(Fixed(Player::X)), order)
    }

    fn press(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_digits_play_cells() {
        let mut app = app(DisplayOrder::Ascending);
        press(&mut app, "15");
        assert_eq!(app.game().board().get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(app.game().board().get(Position::Center), Square::Occupied(Player::O));
        assert_eq!(app.cursor(), 2);
    }

    #[test]
    fn test_enter_jumps_to_cursor_row() {
        let mut app = app(DisplayOrder::Ascending);
        press(&mut app, "159");
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().step(), 1);
        assert_eq!(app.game().status_text(), "Next player: O");

        // Branch from step 1.
        press(&mut app, "3");
        assert_eq!(app.game().history().len(), 3);
        assert!(app.game().board().is_empty(Position::Center));
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut app = app(DisplayOrder::Ascending);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.cursor(), 0);
        press(&mut app, "1");
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.cursor(), 1);
    }

    #[test]
    fn test_reverse_keeps_cursor_on_step() {
        let mut app = app(DisplayOrder::Ascending);
        press(&mut app, "12");
        assert_eq!(app.cursor(), 2);
        press(&mut app, "v");
        assert_eq!(app.game().display_order(), DisplayOrder::Descending);
        assert_eq!(app.cursor(), 0);
        assert_eq!(app.move_list()[app.cursor()].step, 2);
    }

    #[test]
    fn test_descending_start_and_restart() {
        let mut app = app(DisplayOrder::Descending);
        press(&mut app, "123");
        assert_eq!(app.cursor(), 0);
        press(&mut app, "r");
        assert_eq!(app.game().history().len(), 1);
        assert_eq!(app.game().display_order(), DisplayOrder::Descending);
        assert_eq!(app.game().to_move(), Player::X);
    }

    #[test]
    fn test_illegal_move_keeps_cursor() {
        let mut app = app(DisplayOrder::Ascending);
        press(&mut app, "123");
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.cursor(), 1);

        let before = app.game().clone();
        press(&mut app, "1");
        assert_eq!(app.cursor(), 1);
        assert_eq!(app.game(), &before);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app(DisplayOrder::Ascending);
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }
}
