//! Exhaustive minimax search.
//!
//! X maximizes utility and O minimizes it. The recursion is a single
//! function parameterized by the player to move at each position; terminal
//! positions are scored by the engine's exact utility, so every value the
//! search reports is the game-theoretic value of the position.
//!
//! Ties are broken by move order: among equally good moves the first one
//! `legal_moves` yields wins. For tic-tac-toe that is the lowest
//! (row, col) in row-major order.

use std::time::Instant;

use tracing::{debug, instrument, trace};

use crate::core::{Board, EngineError, Move, Result};
use crate::rules::{RulesEngine, TicTacToe};

use super::config::SearchConfig;
use super::stats::SearchStats;
use super::table::TranspositionTable;

/// Search window strictly wider than the utility range [-1, 1].
const WINDOW_MIN: i8 = -2;
const WINDOW_MAX: i8 = 2;

/// Minimax searcher.
///
/// Generic over the rules engine. Owns its configuration, statistics for the
/// most recent call, and (when memoizing) a transposition table that carries
/// over between calls.
pub struct Minimax<E: RulesEngine> {
    /// The game rules.
    engine: E,

    /// Search configuration.
    config: SearchConfig,

    /// Exact values of positions already solved.
    table: TranspositionTable<E::State>,

    /// Statistics for the last search call.
    stats: SearchStats,
}

impl<E: RulesEngine> Minimax<E> {
    /// Create a new searcher.
    pub fn new(engine: E, config: SearchConfig) -> Self {
        Self {
            engine,
            config,
            table: TranspositionTable::new(),
            stats: SearchStats::default(),
        }
    }

    /// The rules engine being searched.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the most recent `best_move`, `evaluate` or
    /// `scored_moves` call.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Number of positions in the transposition table.
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    pub fn clear_table(&mut self) {
        self.table.clear();
    }

    /// The optimal move for the player to move in `state`.
    ///
    /// Returns `Ok(None)` on terminal states.
    #[instrument(level = "debug", skip_all, fields(state = %state))]
    pub fn best_move(&mut self, state: &E::State) -> Result<Option<E::Move>> {
        let start = Instant::now();
        self.stats.reset();

        let best = self.search_root(state);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        if let Ok(Some((mv, value))) = &best {
            debug!(
                ?mv,
                value,
                nodes = self.stats.nodes_visited,
                time_us = self.stats.time_us,
                "best move found"
            );
        }

        best.map(|found| found.map(|(mv, _)| mv))
    }

    /// The minimax value of `state` from X's perspective.
    ///
    /// Terminal states evaluate to their utility.
    #[instrument(level = "debug", skip_all, fields(state = %state))]
    pub fn evaluate(&mut self, state: &E::State) -> Result<i8> {
        let start = Instant::now();
        self.stats.reset();

        let value = self.value(state, WINDOW_MIN, WINDOW_MAX);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        value
    }

    /// Every legal move of `state` paired with its exact minimax value.
    ///
    /// Empty on terminal states. Moves are in `legal_moves` order.
    #[instrument(level = "debug", skip_all, fields(state = %state))]
    pub fn scored_moves(&mut self, state: &E::State) -> Result<Vec<(E::Move, i8)>> {
        let start = Instant::now();
        self.stats.reset();

        if self.engine.is_terminal(state) {
            self.stats.time_us = start.elapsed().as_micros() as u64;
            return Ok(Vec::new());
        }

        let moves = self.engine.legal_moves(state);
        let mut scored = Vec::with_capacity(moves.len());
        for mv in moves {
            let child = self.engine.apply_move(state, mv)?;
            scored.push((mv, self.value(&child, WINDOW_MIN, WINDOW_MAX)?));
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        Ok(scored)
    }

    /// Root of the search: keeps the move as well as the value.
    fn search_root(&mut self, state: &E::State) -> Result<Option<(E::Move, i8)>> {
        if self.engine.is_terminal(state) {
            debug!("terminal state, no move");
            return Ok(None);
        }

        let player = self.engine.active_player(state);
        let (mut alpha, mut beta) = (WINDOW_MIN, WINDOW_MAX);
        let mut best: Option<(E::Move, i8)> = None;

        for mv in self.engine.legal_moves(state) {
            let child = self.engine.apply_move(state, mv)?;
            let value = self.value(&child, alpha, beta)?;
            trace!(?mv, value, "root move scored");

            // Strict improvement only: the first of several equal moves stays.
            let improves = match best {
                None => true,
                Some((_, current)) => player.prefers(value, current),
            };
            if improves {
                best = Some((mv, value));
                if self.config.pruning {
                    if player.is_maximizing() {
                        alpha = alpha.max(value);
                    } else {
                        beta = beta.min(value);
                    }
                }
            }
        }

        match best {
            Some(found) => Ok(Some(found)),
            None => Err(EngineError::invalid_state(
                "non-terminal state has no legal moves",
            )),
        }
    }

    /// Value of `state` inside the window `(alpha, beta)`.
    ///
    /// Fail-soft: a result `<= alpha` is an upper bound and a result
    /// `>= beta` a lower bound. With pruning off the window never narrows, so
    /// every result is exact.
    fn value(&mut self, state: &E::State, mut alpha: i8, mut beta: i8) -> Result<i8> {
        self.stats.nodes_visited += 1;

        if self.engine.is_terminal(state) {
            self.stats.terminal_nodes += 1;
            return self.engine.utility(state);
        }

        if self.config.memoize {
            if let Some(value) = self.table.get(state) {
                self.stats.table_hits += 1;
                return Ok(value);
            }
        }

        let (alpha_in, beta_in) = (alpha, beta);
        let player = self.engine.active_player(state);
        let mut best: Option<i8> = None;

        for mv in self.engine.legal_moves(state) {
            let child = self.engine.apply_move(state, mv)?;
            let value = self.value(&child, alpha, beta)?;

            best = match best {
                Some(current) if !player.prefers(value, current) => Some(current),
                _ => Some(value),
            };

            if self.config.pruning {
                if player.is_maximizing() {
                    alpha = alpha.max(value);
                } else {
                    beta = beta.min(value);
                }
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }

        let best = best.ok_or_else(|| {
            EngineError::invalid_state("non-terminal state has no legal moves")
        })?;

        // Bounds are not cached; only values strictly inside the window.
        if self.config.memoize && alpha_in < best && best < beta_in {
            self.table.insert(state.clone(), best);
        }

        Ok(best)
    }
}

impl Default for Minimax<TicTacToe> {
    fn default() -> Self {
        Self::new(TicTacToe, SearchConfig::default())
    }
}

/// The optimal move on `board`, or `None` if the game is over.
///
/// Runs plain exhaustive minimax with the default configuration.
///
/// ```
/// use rust_ttt::core::{Board, Move};
/// use rust_ttt::search::best_move;
///
/// let board: Board = "XX./OO./...".parse().unwrap();
/// assert_eq!(best_move(&board).unwrap(), Some(Move::new(0, 2)));
///
/// let finished: Board = "XXX/OO./...".parse().unwrap();
/// assert_eq!(best_move(&finished).unwrap(), None);
/// ```
pub fn best_move(board: &Board) -> Result<Option<Move>> {
    Minimax::default().best_move(board)
}

/// The minimax value of `board` from X's perspective.
pub fn evaluate(board: &Board) -> Result<i8> {
    Minimax::default().evaluate(board)
}
