use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{CELLS, GLYPH_EMPTY, GLYPH_O, GLYPH_X, N};

/// One of the two sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Player::X => GLYPH_X,
            Player::O => GLYPH_O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

/// Index of a cell, 0-8 in row-major order.
pub type Move = usize;

/// The 3x3 grid.
///
/// `Board` is `Copy`; callers that need a private scratch board for
/// exploration can take one with a plain assignment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: Move) -> Cell {
        self.cells[index]
    }

    /// Indices of all empty cells, in ascending order.
    ///
    /// The search relies on this order for its tie-break: among equally
    /// scored moves the lowest index wins.
    pub fn available_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Put `player`'s mark on `index`. Must be paired with [`Board::clear`]
    /// when used for exploration.
    #[inline]
    pub fn place(&mut self, index: Move, player: Player) {
        debug_assert_eq!(self.cells[index], Cell::Empty, "cell {index} is occupied");
        self.cells[index] = Cell::Occupied(player);
    }

    /// Undo a [`Board::place`].
    #[inline]
    pub fn clear(&mut self, index: Move) {
        self.cells[index] = Cell::Empty;
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Compact one-line notation, e.g. `"XO..X...O"`.
    pub fn to_compact(&self) -> String {
        self.cells.iter().map(|c| cell_glyph(*c, GLYPH_EMPTY)).collect()
    }
}

fn cell_glyph(cell: Cell, empty: char) -> char {
    match cell {
        Cell::Empty => empty,
        Cell::Occupied(p) => p.glyph(),
    }
}

/// Error returned when parsing a [`Board`] from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("expected 9 cells, got {got}")]
    WrongCellCount { got: usize },

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCharacter { character: char, position: usize },
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Accepts `X`/`O` (any case) for marks and `.`, `_`, `-` or space for
    /// empty cells. Row separators (newlines, `|`) are ignored. Spaces count
    /// as empty cells only when they are needed to make up exactly 9 cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let significant: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '|' | '\n' | '\r' | '\t'))
            .collect();
        let chars: Vec<char> = if significant.len() == CELLS {
            significant
        } else {
            significant.into_iter().filter(|c| *c != ' ').collect()
        };

        if chars.len() != CELLS {
            return Err(BoardParseError::WrongCellCount { got: chars.len() });
        }

        let mut board = Board::new();
        for (position, &character) in chars.iter().enumerate() {
            board.cells[position] = match character {
                'X' | 'x' => Cell::Occupied(Player::X),
                'O' | 'o' => Cell::Occupied(Player::O),
                '.' | '_' | '-' | ' ' => Cell::Empty,
                _ => {
                    return Err(BoardParseError::InvalidCharacter {
                        character,
                        position,
                    });
                }
            };
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            if row > 0 {
                writeln!(f, "---|---|---")?;
            }
            let base = row * N;
            writeln!(
                f,
                " {} | {} | {} ",
                cell_glyph(self.cells[base], ' '),
                cell_glyph(self.cells[base + 1], ' '),
                cell_glyph(self.cells[base + 2], ' '),
            )?;
        }
        Ok(())
    }
}
