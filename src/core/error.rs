//! Engine error types.

use derive_more::{Display, Error};

use super::action::Move;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum MoveRejection {
    /// Row or column outside `0..3`.
    #[display("coordinates are out of bounds")]
    OutOfBounds,
    /// The target cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
}

/// Errors raised by the rules and the search.
///
/// `InvalidMove` is always recoverable by the caller (reject the input and
/// ask again). `InvalidState` signals a broken precondition in the caller.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// `apply_move` was given an off-board or occupied coordinate.
    #[display("invalid move {mv}: {reason}")]
    InvalidMove { mv: Move, reason: MoveRejection },

    /// An operation was called on a state that violates its precondition.
    #[display("invalid state: {reason}")]
    InvalidState { reason: String },

    /// Board notation could not be parsed.
    #[display("cannot parse board {input:?}: {reason}")]
    ParseBoard { input: String, reason: String },
}

impl EngineError {
    pub(crate) fn invalid_move(mv: Move, reason: MoveRejection) -> Self {
        Self::InvalidMove { mv, reason }
    }

    pub(crate) fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }

    pub(crate) fn parse_board(input: &str, reason: impl Into<String>) -> Self {
        Self::ParseBoard {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether the caller can recover by choosing different input.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InvalidState { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
