//! Adversarial search for rust-ttt.
//!
//! ## Overview
//!
//! `Minimax` performs exhaustive minimax over any `RulesEngine`, scoring
//! terminal positions with the engine's exact utility:
//!
//! - **Exact**: no heuristic evaluation and no depth limit
//! - **Deterministic**: ties go to the first move in `legal_moves` order
//! - **Optional optimizations**: alpha-beta pruning and a transposition
//!   table, neither of which changes any result
//!
//! ## Usage
//!
//! ```rust
//! use rust_ttt::rules::{initial_state, TicTacToe};
//! use rust_ttt::search::{Minimax, SearchConfig};
//!
//! let mut search = Minimax::new(TicTacToe, SearchConfig::fast());
//!
//! // Perfect play from the empty board is a draw.
//! assert_eq!(search.evaluate(&initial_state()).unwrap(), 0);
//!
//! let mv = search.best_move(&initial_state()).unwrap();
//! assert!(mv.is_some());
//! println!("visited {} positions", search.stats().nodes_visited);
//! ```

pub mod config;
pub mod minimax;
pub mod stats;
pub mod table;

// Re-export main types
pub use config::SearchConfig;
pub use minimax::{best_move, evaluate, Minimax};
pub use stats::SearchStats;
pub use table::TranspositionTable;
