//! Core value types: players, cells, moves, the board, errors and RNG.
//!
//! Everything here is plain data with value semantics. Game rules live in
//! `rules`; search lives in `search`.

pub mod action;
pub mod cell;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, MoveRecord};
pub use cell::Cell;
pub use error::{EngineError, MoveRejection, Result};
pub use player::Player;
pub use rng::GameRng;
pub use state::{Board, BOARD_SIZE, CELL_COUNT};
