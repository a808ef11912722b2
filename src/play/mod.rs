//! Playing whole games.
//!
//! ## Overview
//!
//! - **MovePolicy**: picks the move for the side to play (optimal, random,
//!   first-available)
//! - **GameRecord**: the moves and result of one game, serializable
//! - **Runner**: `play_game`, `self_play` and `play_match`
//!
//! ## Usage
//!
//! ```rust
//! use rust_ttt::play::{play_match, MinimaxPolicy, RandomPolicy};
//! use rust_ttt::core::Player;
//!
//! let mut optimal = MinimaxPolicy::default();
//! let mut random = RandomPolicy::new(42);
//!
//! let summary = play_match(5, &mut optimal, &mut random).unwrap();
//! assert_eq!(summary.losses(Player::X), 0);
//! ```

pub mod policy;
pub mod record;
pub mod runner;

// Re-export main types
pub use policy::{FirstAvailablePolicy, MinimaxPolicy, MovePolicy, RandomPolicy};
pub use record::GameRecord;
pub use runner::{play_game, play_match, self_play, MatchSummary};
