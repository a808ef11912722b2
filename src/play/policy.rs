//! Move policies: who picks the move for the side to play.
//!
//! - `MinimaxPolicy`: optimal play via `Minimax`
//! - `RandomPolicy`: uniform over legal moves, seeded
//! - `FirstAvailablePolicy`: first empty cell in row-major order

use crate::core::{Board, GameRng, Move, Result};
use crate::rules::{is_terminal, legal_moves, TicTacToe};
use crate::search::{Minimax, SearchConfig};

/// Chooses moves for whichever side is to play.
pub trait MovePolicy: Send {
    /// Short name for logs and reports.
    fn name(&self) -> &str;

    /// Pick a move on `board`.
    ///
    /// Returns `Ok(None)` only when the game is over.
    fn choose(&mut self, board: &Board) -> Result<Option<Move>>;
}

/// Optimal play.
///
/// Keeps one searcher for its whole lifetime, so with memoization enabled
/// positions solved in earlier games are answered from the table.
pub struct MinimaxPolicy {
    search: Minimax<TicTacToe>,
}

impl MinimaxPolicy {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            search: Minimax::new(TicTacToe, config),
        }
    }

    /// The underlying searcher (statistics, table size).
    pub fn search(&self) -> &Minimax<TicTacToe> {
        &self.search
    }
}

impl Default for MinimaxPolicy {
    fn default() -> Self {
        Self::new(SearchConfig::fast())
    }
}

impl MovePolicy for MinimaxPolicy {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose(&mut self, board: &Board) -> Result<Option<Move>> {
        self.search.best_move(board)
    }
}

/// Uniformly random legal moves from a seeded `GameRng`.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl MovePolicy for RandomPolicy {
    fn name(&self) -> &str {
        "random"
    }

    fn choose(&mut self, board: &Board) -> Result<Option<Move>> {
        if is_terminal(board) {
            return Ok(None);
        }
        Ok(self.rng.choose(&legal_moves(board)).copied())
    }
}

/// Always takes the first empty cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstAvailablePolicy;

impl MovePolicy for FirstAvailablePolicy {
    fn name(&self) -> &str {
        "first-available"
    }

    fn choose(&mut self, board: &Board) -> Result<Option<Move>> {
        if is_terminal(board) {
            return Ok(None);
        }
        Ok(legal_moves(board).first().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    #[test]
    fn test_minimax_policy_wins_when_possible() {
        let mut policy = MinimaxPolicy::default();
        let mv = policy.choose(&board("XX./OO./...")).unwrap();
        assert_eq!(mv, Some(Move::new(0, 2)));
        assert_eq!(policy.name(), "minimax");
    }

    #[test]
    fn test_random_policy_picks_legal_move() {
        let mut policy = RandomPolicy::new(42);
        let b = board("XOX/.O./X..");

        for _ in 0..20 {
            let mv = policy.choose(&b).unwrap().unwrap();
            assert!(legal_moves(&b).contains(&mv));
        }
    }

    #[test]
    fn test_random_policy_is_seeded() {
        let mut a = RandomPolicy::new(7);
        let mut b = RandomPolicy::new(7);
        let start = Board::new();

        for _ in 0..10 {
            assert_eq!(a.choose(&start).unwrap(), b.choose(&start).unwrap());
        }
    }

    #[test]
    fn test_first_available() {
        let mut policy = FirstAvailablePolicy;
        assert_eq!(
            policy.choose(&board("XO./.../...")).unwrap(),
            Some(Move::new(0, 2))
        );
    }

    #[test]
    fn test_policies_stop_on_terminal() {
        let finished = board("XXX/OO./...");
        assert_eq!(MinimaxPolicy::default().choose(&finished).unwrap(), None);
        assert_eq!(RandomPolicy::new(1).choose(&finished).unwrap(), None);
        assert_eq!(FirstAvailablePolicy.choose(&finished).unwrap(), None);
    }
}
