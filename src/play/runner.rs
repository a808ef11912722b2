//! Game and match runner.
//!
//! Drives two `MovePolicy`s against each other and records what happened.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

use crate::core::{Board, EngineError, Move, MoveRecord, Player, Result};
use crate::rules::{active_player, apply_move, is_terminal, Outcome};

use super::policy::{MinimaxPolicy, MovePolicy};
use super::record::GameRecord;

/// Tally of a series of games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Games played.
    pub games: u32,
    /// Games X won.
    pub x_wins: u32,
    /// Games O won.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl MatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Win(Player::X) => self.x_wins += 1,
            Outcome::Win(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    /// Games won by `player`.
    #[must_use]
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Games lost by `player`.
    #[must_use]
    pub fn losses(&self, player: Player) -> u32 {
        self.wins(player.opponent())
    }
}

/// Play from `start` until the game ends.
///
/// `x` moves whenever X is to play and `o` whenever O is. A policy that
/// returns no move on a live board is an `InvalidState` error.
pub fn play_game(
    start: Board,
    x: &mut dyn MovePolicy,
    o: &mut dyn MovePolicy,
) -> Result<GameRecord> {
    debug!(x = x.name(), o = o.name(), %start, "game started");

    let mut record = GameRecord::new(start);
    let mut board = start;

    while !is_terminal(&board) {
        let player = active_player(&board);
        let mv = match player {
            Player::X => next_move(x, &board)?,
            Player::O => next_move(o, &board)?,
        };

        let next = apply_move(&board, mv)?;
        trace!(%player, %mv, board = %next, "move played");

        record.push(MoveRecord::new(player, mv, record.len()), next);
        board = next;
    }

    debug!(outcome = %record.outcome, plies = record.len(), "game finished");
    Ok(record)
}

fn next_move(policy: &mut dyn MovePolicy, board: &Board) -> Result<Move> {
    policy.choose(board)?.ok_or_else(|| {
        EngineError::invalid_state(format!(
            "{} policy returned no move on live board {board}",
            policy.name()
        ))
    })
}

/// Both sides play optimally from `start`.
///
/// From the empty board this always ends in a draw.
pub fn self_play(start: Board) -> Result<GameRecord> {
    let mut x = MinimaxPolicy::default();
    let mut o = MinimaxPolicy::default();
    play_game(start, &mut x, &mut o)
}

/// Play `games` games from the empty board and tally the outcomes.
///
/// The same policy instances are reused, so seeded random policies keep
/// advancing and memoizing searchers keep their tables.
#[instrument(level = "info", skip(x, o))]
pub fn play_match(
    games: u32,
    x: &mut dyn MovePolicy,
    o: &mut dyn MovePolicy,
) -> Result<MatchSummary> {
    let mut summary = MatchSummary::new();

    for _ in 0..games {
        let record = play_game(Board::new(), x, o)?;
        summary.record(record.outcome);
    }

    info!(
        x = x.name(),
        o = o.name(),
        x_wins = summary.x_wins,
        o_wins = summary.o_wins,
        draws = summary.draws,
        "match finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::policy::FirstAvailablePolicy;

    #[test]
    fn test_summary_record() {
        let mut summary = MatchSummary::new();
        summary.record(Outcome::Win(Player::X));
        summary.record(Outcome::Draw);
        summary.record(Outcome::Win(Player::O));
        summary.record(Outcome::Draw);

        assert_eq!(summary.games, 4);
        assert_eq!(summary.wins(Player::X), 1);
        assert_eq!(summary.losses(Player::X), 1);
        assert_eq!(summary.draws, 2);
    }

    #[test]
    fn test_first_available_game() {
        // X takes (0,0) (0,2) (1,1) (2,0), O takes (0,1) (1,0) (1,2):
        // X completes the anti-diagonal on ply 6.
        let record = play_game(
            Board::new(),
            &mut FirstAvailablePolicy,
            &mut FirstAvailablePolicy,
        )
        .unwrap();

        assert_eq!(record.outcome, Outcome::Win(Player::X));
        assert_eq!(record.final_board.to_string(), "XOX/OXO/X..");
        assert_eq!(record.moves[0].mv, Move::new(0, 0));
        assert_eq!(record.replay().unwrap(), record.final_board);
    }

    #[test]
    fn test_game_from_terminal_board_is_empty() {
        let finished: Board = "XXX/OO./...".parse().unwrap();
        let record = play_game(
            finished,
            &mut FirstAvailablePolicy,
            &mut FirstAvailablePolicy,
        )
        .unwrap();

        assert!(record.is_empty());
        assert_eq!(record.outcome, Outcome::Win(Player::X));
    }
}
