//! Derived game status.

use super::position::Position;
use super::rules;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Phase of the game at the current snapshot, recomputed on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves can still be made.
    InProgress {
        /// Player to move.
        to_move: Player,
    },
    /// A line was completed.
    Won {
        /// Owner of the line.
        winner: Player,
        /// Squares of the line.
        line: [Position; 3],
    },
    /// Board full with no line.
    Draw,
}

impl GameStatus {
    /// Derives the status of `board` with `to_move` next.
    ///
    /// A win beats a full board.
    pub fn of(board: &Board, to_move: Player) -> Self {
        let eval = rules::evaluate(board);
        if let (Some(winner), Some(line)) = (eval.winner, eval.line) {
            GameStatus::Won { winner, line }
        } else if rules::is_draw(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress { to_move }
        }
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { to_move } => write!(f, "Next player: {}", to_move),
            GameStatus::Won { winner, .. } => write!(f, "Winner: {}", winner),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (pos, ch) in Position::ALL.iter().zip(rows.concat().chars()) {
            match ch {
                'X' => board.set(*pos, Square::Occupied(Player::X)),
                'O' => board.set(*pos, Square::Occupied(Player::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_in_progress() {
        let status = GameStatus::of(&Board::new(), Player::O);
        assert_eq!(status, GameStatus::InProgress { to_move: Player::O });
        assert_eq!(status.to_string(), "Next player: O");
        assert!(!status.is_over());
    }

    #[test]
    fn test_full_board_with_line_is_a_win() {
        let status = GameStatus::of(&board_from(["XXX", "OOX", "XOO"]), Player::O);
        assert_eq!(status.winner(), Some(Player::X));
        assert_eq!(status.to_string(), "Winner: X");
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        let status = GameStatus::of(&board_from(["XOX", "OXX", "OXO"]), Player::O);
        assert_eq!(status, GameStatus::Draw);
        assert_eq!(status.to_string(), "Draw");
        assert!(status.is_over());
    }

    #[test]
    fn test_status_serializes() {
        let json = serde_json::to_string(&GameStatus::Draw).unwrap();
        assert_eq!(json, "\"Draw\"");
    }
}
