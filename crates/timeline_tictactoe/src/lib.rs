//! Timeline tic-tac-toe - game core with time travel
//!
//! A pure, synchronous state machine for a 3x3 game whose every position
//! is kept in a linear history that can be revisited and branched from.
//!
//! # Architecture
//!
//! - **Rules**: pure evaluation of a single board (winner, line, draw)
//! - **GameState**: history, step pointer, turn, list order; all transitions
//!   consume the state and return the next one
//! - **FirstPlayer**: injected source for the opening player
//! - **Invariants**: properties checked after every transition in debug builds
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{Fixed, GameState, Player};
//!
//! let game = GameState::new_game(&mut Fixed(Player::X))
//!     .apply_move(0)
//!     .apply_move(1)
//!     .apply_move(3)
//!     .apply_move(4)
//!     .apply_move(6);
//! assert_eq!(game.status_text(), "Winner: X");
//!
//! let rewound = game.jump_to(0).unwrap();
//! assert_eq!(rewound.status_text(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod first_player;
mod game;
mod history;
pub mod invariants;
mod move_list;
mod position;
pub mod rules;
mod status;
mod types;

pub use error::{GameError, MoveError};
pub use first_player::{FirstPlayer, FirstPlayerMode, Fixed, RandomFirst};
pub use game::GameState;
pub use history::{History, Snapshot};
pub use move_list::{DisplayOrder, MoveListEntry};
pub use position::Position;
pub use rules::Evaluation;
pub use status::GameStatus;
pub use types::{Board, Location, Player, Square};
