//! Tic-tac-toe rules.
//!
//! The free functions are the rules themselves; `TicTacToe` plugs them into
//! the `RulesEngine` seam the search is generic over.

use tracing::debug;

use crate::core::{Board, Cell, EngineError, Move, MoveRejection, Player, Result};

use super::engine::{MoveList, Outcome, RulesEngine};

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// The all-empty starting board.
#[must_use]
pub fn initial_state() -> Board {
    Board::new()
}

/// Whose turn it is.
///
/// X moves whenever both sides have placed the same number of marks.
/// Only meaningful for boards reached by alternating play.
#[must_use]
pub fn active_player(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Every empty cell, in row-major order.
#[must_use]
pub fn legal_moves(board: &Board) -> MoveList<Move> {
    board
        .cells()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(mv, _)| mv)
        .collect()
}

/// The board after the active player marks `mv`.
///
/// The input board is left as it was.
///
/// ```
/// use rust_ttt::core::{Cell, Move};
/// use rust_ttt::rules::{apply_move, initial_state};
///
/// let board = initial_state();
/// let next = apply_move(&board, Move::new(1, 1)).unwrap();
///
/// assert_eq!(next[Move::new(1, 1)], Cell::MarkX);
/// assert!(board.is_empty());
/// assert!(apply_move(&next, Move::new(1, 1)).is_err());
/// ```
pub fn apply_move(board: &Board, mv: Move) -> Result<Board> {
    let cell = board.get(mv).ok_or_else(|| {
        debug!(%mv, "rejected off-board move");
        EngineError::invalid_move(mv, MoveRejection::OutOfBounds)
    })?;

    if !cell.is_empty() {
        debug!(%mv, %board, "rejected move on occupied cell");
        return Err(EngineError::invalid_move(mv, MoveRejection::Occupied));
    }

    Ok(board.with_cell(mv, Cell::of(active_player(board))))
}

/// The owner of a completed line, if any.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let owner = board[a].owner()?;
        (board[b] == board[a] && board[c] == board[a]).then_some(owner)
    })
}

/// Whether the game is over: a line is complete or no cell is free.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// +1 if X won, -1 if O won, 0 for a draw.
///
/// Fails with `InvalidState` if the game is still in progress.
pub fn utility(board: &Board) -> Result<i8> {
    outcome(board).utility().ok_or_else(|| {
        EngineError::invalid_state(format!("utility of non-terminal board {board}"))
    })
}

/// Outcome of the board.
#[must_use]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(player) => Outcome::Win(player),
        None if board.is_full() => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

/// Tic-tac-toe as a `RulesEngine`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TicTacToe;

impl RulesEngine for TicTacToe {
    type State = Board;
    type Move = Move;

    fn initial_state(&self) -> Board {
        initial_state()
    }

    fn active_player(&self, state: &Board) -> Player {
        active_player(state)
    }

    fn legal_moves(&self, state: &Board) -> MoveList<Move> {
        legal_moves(state)
    }

    fn apply_move(&self, state: &Board, mv: Move) -> Result<Board> {
        apply_move(state, mv)
    }

    fn winner(&self, state: &Board) -> Option<Player> {
        winner(state)
    }

    fn is_terminal(&self, state: &Board) -> bool {
        is_terminal(state)
    }

    fn utility(&self, state: &Board) -> Result<i8> {
        utility(state)
    }

    fn outcome(&self, state: &Board) -> Outcome {
        outcome(state)
    }
}
