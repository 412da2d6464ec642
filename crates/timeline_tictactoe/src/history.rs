//! Linear move history with branch-on-write.
//!
//! Step 0 always holds the empty board. Playing from an earlier step
//! drops every later snapshot before the new one is appended.

use super::position::Position;
use super::types::{Board, Location, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One board state in the history, with the play that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board after the play.
    board: Board,
    /// Where the play landed; `None` for the opening snapshot.
    location: Option<Location>,
}

impl Snapshot {
    /// The opening snapshot: empty board, no play.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            location: None,
        }
    }

    /// Snapshot produced by `player` marking `pos` on top of `self`.
    pub fn after(&self, pos: Position, player: Player) -> Self {
        Self {
            board: self.board.with_mark(pos, player),
            location: Some(Location::from(pos)),
        }
    }

    /// Position of the play, if any.
    pub fn position(&self) -> Option<Position> {
        self.location
            .and_then(|loc| Position::from_index(loc.row * 3 + loc.col))
    }

    #[cfg(test)]
    pub(crate) fn forged(board: Board, location: Option<Location>) -> Self {
        Self { board, location }
    }
}

/// Ordered, never-empty sequence of snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

#[allow(clippy::len_without_is_empty)]
impl History {
    /// History holding only the opening snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    #[cfg(test)]
    pub(crate) fn from_snapshots(snapshots: Vec<Snapshot>) -> Self {
        Self { snapshots }
    }

    /// Number of snapshots; always at least 1.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Index of the newest snapshot.
    pub fn last_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Keeps steps `0..=step`, appends `snapshot`, returns its step.
    ///
    /// `step` must be a valid index.
    #[instrument(skip(self, snapshot), fields(len = self.snapshots.len()))]
    pub fn branch(&mut self, step: usize, snapshot: Snapshot) -> usize {
        let discarded = self.snapshots.len().saturating_sub(step + 1);
        if discarded > 0 {
            debug!(discarded, "Truncating future history");
        }
        self.snapshots.truncate(step + 1);
        self.snapshots.push(snapshot);
        self.last_step()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
