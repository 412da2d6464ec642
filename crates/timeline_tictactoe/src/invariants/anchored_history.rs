//! Anchored history invariant: step 0 is the empty board and the step pointer is valid.

use super::super::history::Snapshot;
use super::super::GameState;
use super::Invariant;

/// Invariant: History starts at the empty board and the step points into it.
///
/// The history is never empty, its first snapshot has no play, and the
/// current step is a valid index.
pub struct AnchoredHistoryInvariant;

impl Invariant<GameState> for AnchoredHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        let snapshots = game.history().snapshots();

        match snapshots.first() {
            Some(first) if *first == Snapshot::initial() => game.step() < snapshots.len(),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "History starts at the empty board and the step is in range"
    }
}
