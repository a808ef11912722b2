//! The 3×3 board.
//!
//! `Board` is a plain `Copy` value. Nothing in the crate mutates a board it
//! was handed: producing a position always yields a fresh value, so boards
//! can be kept, compared, hashed and shared freely.
//!
//! ## Notation
//!
//! `Display` and `FromStr` use a compact row notation, rows separated by `/`:
//!
//! ```
//! use rust_ttt::core::{Board, Cell, Move};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! assert_eq!(board[Move::new(0, 1)], Cell::MarkX);
//! assert_eq!(board.to_string(), "XX./OO./...");
//! ```
//!
//! Indexing with `board[mv]` panics on an off-board `Move`. Coordinates from
//! outside the crate should go through [`Board::get`], which returns `None`.

use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::action::Move;
use super::cell::Cell;
use super::error::EngineError;
use super::player::Player;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A 3×3 grid of cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// The all-empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from its rows, top to bottom.
    #[must_use]
    pub const fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// The rows, top to bottom.
    #[must_use]
    pub const fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// The cell at `mv`, or `None` if the coordinates are off the board.
    #[must_use]
    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.cells.get(mv.row)?.get(mv.col).copied()
    }

    /// A copy of this board with `mv` set to `cell`.
    ///
    /// `mv` must be in bounds; rule checking happens in `rules::apply_move`.
    #[must_use]
    pub(crate) fn with_cell(mut self, mv: Move, cell: Cell) -> Self {
        self.cells[mv.row][mv.col] = cell;
        self
    }

    /// Iterate over `(coordinate, cell)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        Move::ALL.iter().map(move |&mv| (mv, self[mv]))
    }

    /// Number of cells holding `player`'s mark.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        let mark = Cell::of(player);
        self.cells.iter().flatten().filter(|&&c| c == mark).count()
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied_count() == CELL_COUNT
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }
}

impl Index<Move> for Board {
    type Output = Cell;

    /// Panics if `mv` is off the board; use [`Board::get`] for unchecked input.
    fn index(&self, mv: Move) -> &Self::Output {
        &self.cells[mv.row][mv.col]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Parse row notation. `/`, `|` and whitespace are separators and are
    /// skipped; exactly nine cell symbols must remain.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut count = 0;

        for ch in s.chars() {
            if ch == '/' || ch == '|' || ch.is_whitespace() {
                continue;
            }
            let cell = Cell::from_symbol(ch)
                .ok_or_else(|| EngineError::parse_board(s, format!("unexpected symbol {ch:?}")))?;
            let mv = Move::from_index(count)
                .ok_or_else(|| EngineError::parse_board(s, "more than 9 cells"))?;
            board = board.with_cell(mv, cell);
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(EngineError::parse_board(
                s,
                format!("expected 9 cells, found {count}"),
            ));
        }

        Ok(board)
    }
}
