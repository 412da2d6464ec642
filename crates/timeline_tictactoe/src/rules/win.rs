//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Winning lines in priority order: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Outcome of scanning a board for three in a row.
///
/// `winner` and `line` are either both present or both absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Evaluation {
    /// Player holding the first complete line, if any.
    pub winner: Option<Player>,
    /// The squares of that line.
    pub line: Option<[Position; 3]>,
}

/// Scans the board for the first complete line.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    for line in LINES {
        let [a, b, c] = line;
        if let Square::Occupied(player) = board.get(a)
            && board.get(b) == Square::Occupied(player)
            && board.get(c) == Square::Occupied(player)
        {
            return Evaluation {
                winner: Some(player),
                line: Some(line),
            };
        }
    }

    Evaluation::default()
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).winner
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for (pos, player) in marks {
            board.set(*pos, Square::Occupied(*player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), Evaluation::default());
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_from(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        let eval = evaluate(&board);
        assert_eq!(eval.winner, Some(Player::X));
        assert_eq!(eval.line, Some(LINES[0]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_from(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        assert_eq!(check_winner(&board), Some(Player::O));
        assert_eq!(
            evaluate(&board).line,
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_from(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_rows_take_priority_over_columns() {
        // X holds both the top row and the left column.
        let board = board_from(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        assert_eq!(evaluate(&board).line, Some(LINES[0]));
    }

    #[test]
    fn test_evaluate_matches_brute_force_on_every_board() {
        let cells = [Square::Empty, Square::Occupied(Player::X), Square::Occupied(Player::O)];
        for code in 0..3usize.pow(9) {
            let mut squares = [Square::Empty; 9];
            let mut rest = code;
            for square in squares.iter_mut() {
                *square = cells[rest % 3];
                rest /= 3;
            }
            let board = Board::from_squares(squares);

            let first_complete = LINES.iter().copied().find(|line| {
                let owner = board.get(line[0]);
                owner != Square::Empty && line.iter().all(|p| board.get(*p) == owner)
            });
            let eval = evaluate(&board);
            assert_eq!(eval.line, first_complete);
            match (eval.winner, eval.line) {
                (Some(player), Some(line)) => {
                    assert!(line.iter().all(|p| board.get(*p) == Square::Occupied(player)));
                }
                (None, None) => {}
                other => panic!("winner and line disagree: {:?}", other),
            }
        }
    }
}
