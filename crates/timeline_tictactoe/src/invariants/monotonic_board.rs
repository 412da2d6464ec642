//! Monotonic board invariant: each snapshot adds exactly one mark.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: Boards only grow, one mark per step.
///
/// Every snapshot after the first keeps all marks of its predecessor and
/// fills exactly one more square, the one recorded as its location.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().snapshots().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(placed) = after.position() else {
                return false;
            };

            let mut added = 0;
            for (old, new) in before
                .board()
                .squares()
                .iter()
                .zip(after.board().squares())
            {
                match (old, new) {
                    (Square::Empty, Square::Empty) => {}
                    (Square::Empty, Square::Occupied(_)) => added += 1,
                    (old, new) if old == new => {}
                    _ => return false,
                }
            }

            added == 1 && before.board().is_empty(placed) && !after.board().is_empty(placed)
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark at its recorded location"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{History, Snapshot};
    use crate::{Board, Location, Player, Position};

    #[test]
    fn test_played_game_holds() {
        let game = GameState::starting_with(Player::O)
            .apply_move(4)
            .apply_move(0)
            .apply_move(8);
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut game = GameState::starting_with(Player::X);
        let first = Snapshot::initial().after(Position::Center, Player::X);
        let overwrite = first.after(Position::Center, Player::O);
        game.history = History::from_snapshots(vec![Snapshot::initial(), first, overwrite]);
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_location_violates() {
        let mut game = GameState::starting_with(Player::X);
        let board = Board::new().with_mark(Position::TopLeft, Player::X);
        let mislabeled = Snapshot::forged(board, Some(Location { row: 2, col: 2 }));
        game.history = History::from_snapshots(vec![Snapshot::initial(), mislabeled]);
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
