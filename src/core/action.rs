//! Moves and move history.
//!
//! A `Move` is a bare coordinate pair. It only becomes meaningful against a
//! specific board, which is why construction is unchecked: bounds and
//! occupancy are validated by `rules::apply_move`.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::state::BOARD_SIZE;

/// A (row, col) coordinate identifying an action on some board.
///
/// ## Example
///
/// ```
/// use rust_ttt::core::Move;
///
/// let center = Move::new(1, 1);
/// assert!(center.in_bounds());
/// assert_eq!(center.index(), 4);
///
/// assert!(!Move::new(3, 0).in_bounds());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Row, top to bottom.
    pub row: usize,
    /// Column, left to right.
    pub col: usize,
}

impl Move {
    /// Every on-board coordinate in row-major order.
    pub const ALL: [Move; 9] = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(1, 2),
        Move::new(2, 0),
        Move::new(2, 1),
        Move::new(2, 2),
    ];

    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether both coordinates lie in `0..3`.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Row-major index (0-8). Only meaningful for in-bounds moves.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Inverse of [`Move::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < BOARD_SIZE * BOARD_SIZE {
            Some(Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A move as it was played, for game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// Where they moved.
    pub mv: Move,

    /// 0-based ply at which the move was played.
    pub ply: usize,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: Player, mv: Move, ply: usize) -> Self {
        Self { player, mv, ply }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        for (i, mv) in Move::ALL.iter().enumerate() {
            assert_eq!(mv.index(), i);
            assert_eq!(Move::from_index(i), Some(*mv));
            assert!(mv.in_bounds());
        }
        assert_eq!(Move::from_index(9), None);
    }

    #[test]
    fn test_out_of_bounds() {
        assert!(!Move::new(0, 3).in_bounds());
        assert!(!Move::new(3, 0).in_bounds());
        assert!(!Move::new(usize::MAX, 1).in_bounds());
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut moves = vec![Move::new(2, 0), Move::new(0, 2), Move::new(1, 1)];
        moves.sort();
        assert_eq!(moves, vec![Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Move::new(0, 2)), "(0, 2)");
    }

    #[test]
    fn test_move_record() {
        let record = MoveRecord::new(Player::O, Move::new(1, 2), 3);

        assert_eq!(record.player, Player::O);
        assert_eq!(record.mv, Move::new(1, 2));
        assert_eq!(record.ply, 3);
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(Player::X, Move::new(2, 1), 0);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
