//! Game records.
//!
//! A `GameRecord` holds the starting board, every move in order, and the
//! position and outcome the game ended in. Records serialize with serde and
//! have a compact bincode form for storage.

use serde::{Deserialize, Serialize};

use crate::core::{Board, EngineError, MoveRecord, Player, Result};
use crate::rules::{active_player, apply_move, outcome, Outcome};

/// A complete (or stopped) game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Board the game started from.
    pub start: Board,

    /// Moves in the order they were played.
    pub moves: Vec<MoveRecord>,

    /// Board after the last move.
    pub final_board: Board,

    /// Outcome of `final_board`.
    pub outcome: Outcome,
}

impl GameRecord {
    /// An empty record starting at `start`.
    pub fn new(start: Board) -> Self {
        Self {
            start,
            moves: Vec::new(),
            final_board: start,
            outcome: outcome(&start),
        }
    }

    /// Append a move and the board it produced.
    pub fn push(&mut self, record: MoveRecord, board: Board) {
        self.moves.push(record);
        self.final_board = board;
        self.outcome = outcome(&board);
    }

    /// Get the number of moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if no move was played.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves made by one player.
    pub fn player_moves(&self, player: Player) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter().filter(move |r| r.player == player)
    }

    /// Utility of the final board, `None` if the game was stopped early.
    pub fn utility(&self) -> Option<i8> {
        self.outcome.utility()
    }

    /// Re-apply every move from `start` and return the resulting board.
    ///
    /// Fails if a move is illegal or was recorded for the wrong player.
    pub fn replay(&self) -> Result<Board> {
        let mut board = self.start;
        for (ply, record) in self.moves.iter().enumerate() {
            let expected = active_player(&board);
            if record.player != expected || record.ply != ply {
                return Err(EngineError::invalid_state(format!(
                    "ply {ply}: recorded {} at ply {}, expected {expected}",
                    record.player, record.ply
                )));
            }
            board = apply_move(&board, record.mv)?;
        }
        Ok(board)
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Move;

    fn record_of(moves: &[Move]) -> GameRecord {
        let mut record = GameRecord::new(Board::new());
        let mut board = Board::new();
        for (ply, &mv) in moves.iter().enumerate() {
            let player = active_player(&board);
            board = apply_move(&board, mv).unwrap();
            record.push(MoveRecord::new(player, mv, ply), board);
        }
        record
    }

    #[test]
    fn test_new_record() {
        let record = GameRecord::new(Board::new());
        assert!(record.is_empty());
        assert_eq!(record.outcome, Outcome::InProgress);
        assert_eq!(record.utility(), None);
    }

    #[test]
    fn test_push_tracks_outcome() {
        let record = record_of(&[
            Move::new(0, 0),
            Move::new(1, 0),
            Move::new(0, 1),
            Move::new(1, 1),
            Move::new(0, 2),
        ]);

        assert_eq!(record.len(), 5);
        assert_eq!(record.outcome, Outcome::Win(Player::X));
        assert_eq!(record.utility(), Some(1));
        assert_eq!(record.player_moves(Player::X).count(), 3);
        assert_eq!(record.player_moves(Player::O).count(), 2);
    }

    #[test]
    fn test_replay_reproduces_final_board() {
        let record = record_of(&[Move::new(1, 1), Move::new(0, 0), Move::new(2, 2)]);
        assert_eq!(record.replay().unwrap(), record.final_board);
    }

    #[test]
    fn test_replay_rejects_wrong_player() {
        let mut record = record_of(&[Move::new(1, 1), Move::new(0, 0)]);
        record.moves[1].player = Player::X;

        let err = record.replay().unwrap_err();
        assert!(matches!(err, EngineError::InvalidState { .. }));
    }

    #[test]
    fn test_replay_rejects_illegal_move() {
        let mut record = record_of(&[Move::new(1, 1), Move::new(0, 0)]);
        record.moves[1].mv = Move::new(1, 1);

        let err = record.replay().unwrap_err();
        assert!(matches!(err, EngineError::InvalidMove { .. }));
    }

    #[test]
    fn test_bincode_round_trip() {
        let record = record_of(&[Move::new(0, 0), Move::new(2, 2)]);
        let bytes = record.to_bytes().unwrap();
        assert_eq!(GameRecord::from_bytes(&bytes).unwrap(), record);
    }

    #[test]
    fn test_json_round_trip() {
        let record = record_of(&[Move::new(0, 1)]);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: GameRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
