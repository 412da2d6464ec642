//! Alternating turn invariant: marks and turn follow step parity.

use super::super::GameState;
use super::Invariant;

/// Invariant: Players alternate from the starting player.
///
/// The mark placed at step `i` belongs to the player whose turn it was at
/// step `i - 1`, and the player to move matches the current step's parity.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let marks_alternate = game
            .history()
            .snapshots()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snapshot)| {
                snapshot
                    .position()
                    .and_then(|pos| snapshot.board().get(pos).player())
                    == Some(game.turn_at(step - 1))
            });

        marks_alternate && game.to_move() == game.turn_at(game.step())
    }

    fn description() -> &'static str {
        "Players alternate turns from the starting player"
    }
}
