//! Game rules.
//!
//! - `engine`: the `RulesEngine` trait the search is generic over, and
//!   `Outcome`
//! - `tictactoe`: the 3×3 rules as pure free functions, plus the
//!   `TicTacToe` engine that exposes them through the trait
//!
//! The search calls into `RulesEngine` but never interprets boards directly.

pub mod engine;
pub mod tictactoe;

pub use engine::{MoveList, Outcome, RulesEngine};
pub use tictactoe::{
    active_player, apply_move, initial_state, is_terminal, legal_moves, outcome, utility, winner,
    TicTacToe, LINES,
};
