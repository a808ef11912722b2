//! Contents of a single board position.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// One grid position: empty or holding a player's mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark.
    #[default]
    Empty,
    /// X's mark.
    MarkX,
    /// O's mark.
    MarkO,
}

impl Cell {
    /// The mark a player places.
    #[must_use]
    pub const fn of(player: Player) -> Self {
        match player {
            Player::X => Cell::MarkX,
            Player::O => Cell::MarkO,
        }
    }

    /// The player whose mark occupies this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::MarkX => Some(Player::X),
            Cell::MarkO => Some(Player::O),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Notation symbol: `X`, `O` or `.`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::MarkX => 'X',
            Cell::MarkO => 'O',
        }
    }

    /// Parse a notation symbol. `_` and `-` are accepted as empty too.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::MarkX),
            'O' | 'o' => Some(Cell::MarkO),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::of(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_matches_mark() {
        for player in Player::ALL {
            assert_eq!(Cell::of(player).owner(), Some(player));
        }
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::default(), Cell::Empty);
    }

    #[test]
    fn test_symbols() {
        for cell in [Cell::Empty, Cell::MarkX, Cell::MarkO] {
            assert_eq!(Cell::from_symbol(cell.symbol()), Some(cell));
        }
        assert_eq!(Cell::from_symbol('x'), Some(Cell::MarkX));
        assert_eq!(Cell::from_symbol('_'), Some(Cell::Empty));
        assert_eq!(Cell::from_symbol('Z'), None);
    }
}
