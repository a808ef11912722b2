//! Rules engine trait and game outcomes.
//!
//! The search is written against `RulesEngine` rather than a concrete
//! board so that it only depends on the operations it needs:
//! - Whose turn it is
//! - What moves are legal and what they produce
//! - When the game is over and what it is worth

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Player, Result};

/// Inline move list. Nine slots covers every tic-tac-toe position.
pub type MoveList<M> = SmallVec<[M; 9]>;

/// Status of a game, derived from its state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Win(Player),
    /// Board full, no line.
    Draw,
    /// Game continues.
    InProgress,
}

impl Outcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, Outcome::Win(p) if *p == player)
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Utility from X's perspective, `None` while the game is in progress.
    #[must_use]
    pub fn utility(&self) -> Option<i8> {
        match self {
            Outcome::Win(p) => Some(p.win_utility()),
            Outcome::Draw => Some(0),
            Outcome::InProgress => None,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(p) => write!(f, "{p} wins"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::InProgress => write!(f, "in progress"),
        }
    }
}

/// Rules of a two-player, zero-sum, perfect-information game.
///
/// ## Implementation Notes
///
/// - Every method is a pure function of its arguments.
/// - `apply_move` returns a new state and must leave its input untouched.
/// - `utility` is only defined on terminal states; implementations return
///   `EngineError::InvalidState` otherwise.
/// - A non-terminal state must have at least one legal move.
pub trait RulesEngine {
    /// Game position. Hashable so positions can key a transposition table;
    /// `Display` is used when positions are logged.
    type State: Clone + Eq + Hash + Debug + Display;

    /// A move on some position.
    type Move: Copy + Eq + Debug;

    /// The starting position.
    fn initial_state(&self) -> Self::State;

    /// The player to move in `state`.
    fn active_player(&self, state: &Self::State) -> Player;

    /// Every legal move in `state`.
    ///
    /// Only meaningful on non-terminal states. Callers must not depend on
    /// ordering beyond set equality, except that the search breaks ties by it.
    fn legal_moves(&self, state: &Self::State) -> MoveList<Self::Move>;

    /// The position produced by the active player making `mv`.
    fn apply_move(&self, state: &Self::State, mv: Self::Move) -> Result<Self::State>;

    /// The player who has won, if any.
    fn winner(&self, state: &Self::State) -> Option<Player>;

    /// Whether the game is over.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// +1 if X won, -1 if O won, 0 for a draw.
    fn utility(&self, state: &Self::State) -> Result<i8>;

    // === Convenience Methods ===

    /// Outcome of `state`.
    fn outcome(&self, state: &Self::State) -> Outcome {
        match self.winner(state) {
            Some(player) => Outcome::Win(player),
            None if self.is_terminal(state) => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_winner() {
        let result = Outcome::Win(Player::O);
        assert!(!result.is_winner(Player::X));
        assert!(result.is_winner(Player::O));

        assert!(!Outcome::Draw.is_winner(Player::X));
        assert!(!Outcome::InProgress.is_winner(Player::O));
    }

    #[test]
    fn test_outcome_utility() {
        assert_eq!(Outcome::Win(Player::X).utility(), Some(1));
        assert_eq!(Outcome::Win(Player::O).utility(), Some(-1));
        assert_eq!(Outcome::Draw.utility(), Some(0));
        assert_eq!(Outcome::InProgress.utility(), None);
    }

    #[test]
    fn test_outcome_is_terminal() {
        assert!(Outcome::Win(Player::X).is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert!(!Outcome::InProgress.is_terminal());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Win(Player::X).to_string(), "X wins");
        assert_eq!(Outcome::Draw.to_string(), "draw");
    }
}
