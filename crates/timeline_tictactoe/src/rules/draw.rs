//! Draw detection logic for tic-tac-toe.

use crate::{Board, Square};

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board counts as a draw.
///
/// This says nothing about a winner: a full board can also hold a
/// completed line, and callers must check for a win first.
pub fn is_draw(board: &Board) -> bool {
    is_full(board)
}
