//! Errors raised by game transitions.

use super::position::Position;
use super::types::Player;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Cell index outside 0-8.
    #[display("Cell index {} is off the board", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The current snapshot already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(#[error(not(source))] Player),
}

/// Misuse of the navigation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Jump target beyond the recorded history.
    #[display("Step {} is out of range for a history of {} snapshots", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
