//! Time-travel game state.
//!
//! Every transition consumes the state and returns the next one. Win, draw
//! and turn are derived from the snapshot at the current step rather than
//! stored, so jumping around the history never leaves stale status behind.

use super::error::{GameError, MoveError};
use super::first_player::FirstPlayer;
use super::history::{History, Snapshot};
use super::invariants::{InvariantSet, TimelineInvariants};
use super::move_list::{DisplayOrder, MoveListEntry};
use super::position::Position;
use super::rules;
use super::status::GameStatus;
use super::types::{Board, Player};
use tracing::{debug, info, instrument};

/// History, step pointer, turn and list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) step: usize,
    pub(crate) starting_player: Player,
    pub(crate) to_move: Player,
    pub(crate) order: DisplayOrder,
}

impl GameState {
    /// Starts a game with an empty board, the opener drawn from `source`.
    #[instrument(skip(source))]
    pub fn new_game<S: FirstPlayer + ?Sized>(source: &mut S) -> Self {
        let starting_player = source.first_player();
        info!(%starting_player, "Starting new game");
        Self::starting_with(starting_player)
    }

    /// Starts a game where `starting_player` moves first.
    pub fn starting_with(starting_player: Player) -> Self {
        Self {
            history: History::new(),
            step: 0,
            starting_player,
            to_move: starting_player,
            order: DisplayOrder::default(),
        }
    }

    /// Plays the player to move at `cell_index`.
    ///
    /// Illegal moves are ignored: the state comes back unchanged.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move))]
    pub fn apply_move(self, cell_index: usize) -> Self {
        match self.try_apply_move(cell_index) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, "Ignoring illegal move");
                self
            }
        }
    }

    /// Plays the player to move at `cell_index`, reporting why a move is illegal.
    ///
    /// From an earlier step this drops every later snapshot first.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` for indices past 8, `GameOver` if the current snapshot
    /// is already won, `SquareOccupied` if the cell is taken.
    pub fn try_apply_move(&self, cell_index: usize) -> Result<Self, MoveError> {
        let pos = Position::from_index(cell_index).ok_or(MoveError::OutOfBounds(cell_index))?;
        let current = self.current();

        if let Some(winner) = rules::check_winner(current.board()) {
            return Err(MoveError::GameOver(winner));
        }
        if !current.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let snapshot = current.after(pos, self.to_move);
        let mut next = self.clone();
        next.step = next.history.branch(self.step, snapshot);
        next.to_move = self.to_move.opponent();
        debug!(position = %pos, step = next.step, "Move applied");

        next.debug_check();
        Ok(next)
    }

    /// Moves the step pointer to `step`, recomputing whose turn it is.
    ///
    /// # Errors
    ///
    /// `StepOutOfRange` if `step` is past the last snapshot.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(self, step: usize) -> Result<Self, GameError> {
        if step >= self.history.len() {
            return Err(GameError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        let to_move = self.turn_at(step);
        let next = Self {
            step,
            to_move,
            ..self
        };
        debug!(to_move = %next.to_move, "Jumped");
        next.debug_check();
        Ok(next)
    }

    /// Flips the move list between ascending and descending.
    #[instrument(skip(self))]
    pub fn reverse_display_order(self) -> Self {
        let order = self.order.reversed();
        debug!(?order, "Display order changed");
        Self { order, ..self }
    }

    /// Throws the history away and starts over.
    ///
    /// The list order survives the reset.
    #[instrument(skip(self, source))]
    pub fn reset<S: FirstPlayer + ?Sized>(self, source: &mut S) -> Self {
        Self {
            order: self.order,
            ..Self::new_game(source)
        }
    }

    /// Player to move at `step` in this game.
    pub fn turn_at(&self, step: usize) -> Player {
        if step % 2 == 0 {
            self.starting_player
        } else {
            self.starting_player.opponent()
        }
    }

    /// Status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.board(), self.to_move)
    }

    /// Status line: "Winner: X", "Draw" or "Next player: O".
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// Squares to highlight, when the current snapshot is won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::evaluate(self.board()).line
    }

    /// Squares the player to move may take; none once the snapshot is won.
    pub fn open_squares(&self) -> Vec<Position> {
        if self.status().is_over() {
            Vec::new()
        } else {
            Position::valid_moves(self.board())
        }
    }

    /// Move list rows in display order.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        let mut entries: Vec<MoveListEntry> = self
            .history
            .snapshots()
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveListEntry {
                step,
                location: *snapshot.location(),
                selected: step == self.step,
            })
            .collect();
        if self.order == DisplayOrder::Descending {
            entries.reverse();
        }
        entries
    }

    /// Full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Snapshot at the current step.
    pub fn current(&self) -> &Snapshot {
        &self.history.snapshots()[self.step]
    }

    /// Board at the current step.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Player who opened the game.
    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// Order of the move list.
    pub fn display_order(&self) -> DisplayOrder {
        self.order
    }

    fn debug_check(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = TimelineInvariants::check_all(self)
        {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("Invariant violation: {}", descriptions);
        }
    }
}
