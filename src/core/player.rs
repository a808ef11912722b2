//! The two sides of the game.
//!
//! X always moves first. Utilities are scored from X's point of view, so X
//! is the maximizing side of the search and O the minimizing side.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first; maximizes utility.
    X,
    /// Moves second; minimizes utility.
    O,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// 0-based turn-order index (X = 0, O = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }

    /// Whether this player maximizes utility.
    #[must_use]
    pub const fn is_maximizing(self) -> bool {
        matches!(self, Player::X)
    }

    /// Whether `candidate` is strictly better than `current` for this player.
    ///
    /// ```
    /// use rust_ttt::core::Player;
    ///
    /// assert!(Player::X.prefers(1, 0));
    /// assert!(Player::O.prefers(-1, 0));
    /// assert!(!Player::O.prefers(0, 0));
    /// ```
    #[must_use]
    pub fn prefers(self, candidate: i8, current: i8) -> bool {
        match self {
            Player::X => candidate > current,
            Player::O => candidate < current,
        }
    }

    /// The utility this player scores by winning.
    #[must_use]
    pub const fn win_utility(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }

    /// Single-character symbol used in board notation.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Player::X.opponent().opponent(), Player::X);
    }

    #[test]
    fn test_index_follows_turn_order() {
        for (i, player) in Player::ALL.iter().enumerate() {
            assert_eq!(player.index(), i);
        }
    }

    #[test]
    fn test_prefers() {
        assert!(Player::X.prefers(0, -1));
        assert!(!Player::X.prefers(-1, 0));
        assert!(Player::O.prefers(0, 1));
        assert!(!Player::O.prefers(1, 0));
        assert!(!Player::X.prefers(1, 1));
    }

    #[test]
    fn test_win_utility() {
        assert_eq!(Player::X.win_utility(), 1);
        assert_eq!(Player::O.win_utility(), -1);
        assert!(Player::X.is_maximizing());
        assert!(!Player::O.is_maximizing());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::X), "X");
        assert_eq!(format!("{}", Player::O), "O");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Player::O).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Player::O);
    }
}
