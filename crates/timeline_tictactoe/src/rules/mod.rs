//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board snapshot. Rules are separated
//! from history bookkeeping so any snapshot can be judged on its own.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, evaluate, Evaluation, LINES};
