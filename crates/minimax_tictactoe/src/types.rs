//! Core domain types: marks, cells and the board.

use crate::{BoardParseError, Move, MoveError, Outcome, rules};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// One of the two symbols a side places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X.
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Holds a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
///
/// A plain value: the board knows nothing about turns or sides. Search
/// mutates it in place and undoes every placement before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given move.
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row()][mv.col()]
    }

    /// Places a mark on an empty cell.
    pub fn place(&mut self, mv: Move, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty(mv) {
            return Err(MoveError::Occupied(mv));
        }
        self.put(mv, mark);
        Ok(())
    }

    /// Speculative placement for search; the caller has already
    /// established that the cell is open.
    pub(crate) fn put(&mut self, mv: Move, mark: Mark) {
        debug_assert!(self.is_empty(mv), "speculative placement on {mv}");
        self.cells[mv.row()][mv.col()] = Cell::Occupied(mark);
    }

    /// Resets a cell to empty.
    ///
    /// Only meant for undoing a placement the caller just made.
    pub fn clear(&mut self, mv: Move) {
        self.cells[mv.row()][mv.col()] = Cell::Empty;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Cell::Empty
    }

    /// Returns true if no mark has been placed.
    pub fn is_blank(&self) -> bool {
        Move::ALL.iter().all(|mv| self.is_empty(*mv))
    }

    /// Open cells in row-major order.
    ///
    /// The iterator owns its cells, so the board may be mutated while
    /// walking it.
    pub fn open_moves(&self) -> OpenMoves {
        let mut moves = OpenMoves {
            cells: [Move::CENTER; 9],
            len: 0,
            next: 0,
        };
        for mv in Move::ALL {
            if self.is_empty(mv) {
                moves.cells[moves.len] = mv;
                moves.len += 1;
            }
        }
        moves
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        Move::ALL
            .iter()
            .filter(|mv| self.get(**mv) == Cell::Occupied(mark))
            .count()
    }

    /// Classifies the board.
    pub fn evaluate(&self) -> Outcome {
        if let Some(mark) = rules::winner(self) {
            Outcome::Win(mark)
        } else if rules::is_full(self) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// The mark due to move, assuming X and O alternate from whoever has
    /// more marks (X on an even count).
    pub fn side_to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }
}

/// Row-major iterator over a board's open cells.
#[derive(Debug, Clone, Copy)]
pub struct OpenMoves {
    cells: [Move; 9],
    len: usize,
    next: usize,
}

impl OpenMoves {
    /// Number of cells left to yield.
    pub fn remaining(&self) -> usize {
        self.len - self.next
    }
}

impl Iterator for OpenMoves {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        if self.next >= self.len {
            return None;
        }
        let mv = self.cells[self.next];
        self.next += 1;
        Some(mv)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for OpenMoves {}

impl std::fmt::Display for Board {
    /// Empty cells show their 1-based index so a player can type it.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let mv = Move::at(row, col);
                match self.get(mv) {
                    Cell::Empty => write!(f, "{}", mv.index() + 1)?,
                    Cell::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Reads nine cells in row-major order.
    ///
    /// `X`/`O` are marks; `.`, `_` and digits are empty cells; whitespace,
    /// `|`, `/`, `-` and `+` separate. Accepts the `Display` form.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for character in s.chars() {
            let cell = match character {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '_' | '1'..='9' => Cell::Empty,
                c if c.is_whitespace() || matches!(c, '|' | '/' | '-' | '+') => continue,
                character => {
                    return Err(BoardParseError::Character {
                        character,
                        input: s.to_string(),
                    });
                }
            };
            cells.push(cell);
        }

        if cells.len() != 9 {
            return Err(BoardParseError::Length {
                got: cells.len(),
                input: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (mv, cell) in Move::ALL.into_iter().zip(cells) {
            board.cells[mv.row()][mv.col()] = cell;
        }

        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        if x.abs_diff(o) > 1 {
            return Err(BoardParseError::MarkCounts { x, o });
        }
        Ok(board)
    }
}
