//! # rust-ttt
//!
//! An exact minimax engine for 3×3 tic-tac-toe.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: `Board` is `Copy`. Every operation that produces a
//!    position returns a new board; nothing mutates a board it was handed.
//!
//! 2. **Exact Search**: minimax runs to terminal positions and scores them
//!    with the exact utility (+1 X wins, -1 O wins, 0 draw). No heuristics.
//!
//! 3. **Deterministic**: ties between equally good moves go to the lowest
//!    (row, col). Optional pruning and memoization never change a result.
//!
//! ## Example
//!
//! ```
//! use rust_ttt::{apply_move, best_move, initial_state, is_terminal, utility};
//!
//! let mut board = initial_state();
//! while !is_terminal(&board) {
//!     let mv = best_move(&board).unwrap().unwrap();
//!     board = apply_move(&board, mv).unwrap();
//! }
//! assert_eq!(utility(&board).unwrap(), 0);
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, cells, moves, the board, errors, RNG
//! - `rules`: `RulesEngine` trait and the tic-tac-toe rules
//! - `search`: Minimax with optional alpha-beta and transposition table
//! - `play`: Move policies, game records, game and match runner

pub mod core;
pub mod play;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, EngineError, GameRng, Move, MoveRecord, MoveRejection, Player, Result,
};

pub use crate::rules::{
    active_player, apply_move, initial_state, is_terminal, legal_moves, outcome, utility, winner,
    MoveList, Outcome, RulesEngine, TicTacToe,
};

pub use crate::search::{best_move, evaluate, Minimax, SearchConfig, SearchStats};

pub use crate::play::{
    play_game, play_match, self_play, FirstAvailablePolicy, GameRecord, MatchSummary,
    MinimaxPolicy, MovePolicy, RandomPolicy,
};
