//! Cell coordinates on the 3x3 grid.

use crate::MoveError;
use serde::{Deserialize, Serialize};

const LABELS: [&str; 9] = [
    "Top-left",
    "Top-center",
    "Top-right",
    "Middle-left",
    "Center",
    "Middle-right",
    "Bottom-left",
    "Bottom-center",
    "Bottom-right",
];

/// A (row, column) pair, each in `0..=2`.
///
/// Coordinates are validated on construction, so every `Move` names a
/// real cell. Whether that cell is free is the board's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// The center cell, (1, 1).
    pub const CENTER: Move = Move::at(1, 1);

    /// All nine cells in row-major order.
    pub const ALL: [Move; 9] = [
        Move::at(0, 0),
        Move::at(0, 1),
        Move::at(0, 2),
        Move::at(1, 0),
        Move::at(1, 1),
        Move::at(1, 2),
        Move::at(2, 0),
        Move::at(2, 1),
        Move::at(2, 2),
    ];

    /// Creates a move, rejecting coordinates outside the grid.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row > 2 || col > 2 {
            return Err(MoveError::OutOfRange { row, col });
        }
        Ok(Self::at(row, col))
    }

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row, `0..=2`.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, `0..=2`.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index, `0..=8`.
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Creates a move from its row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable name of the cell.
    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }

    /// Parses player input.
    ///
    /// Accepts a single number `1..=9` (the numbering the board display
    /// uses for empty cells), a `row col` pair in `0..=2`, or a cell label
    /// such as `top-left` (case-insensitive).
    pub fn parse_input(s: &str) -> Option<Self> {
        let s = s.trim();
        let numbers: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .collect();

        match numbers.as_slice() {
            [single] => {
                if let Ok(n) = single.parse::<usize>() {
                    return n.checked_sub(1).and_then(Self::from_index);
                }
            }
            [row, col] => {
                if let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>()) {
                    return Self::new(row, col).ok();
                }
            }
            _ => {}
        }

        let lower = s.to_lowercase().replace(' ', "-");
        Self::ALL
            .into_iter()
            .find(|mv| mv.label().to_lowercase() == lower)
    }
}

impl TryFrom<(usize, usize)> for Move {
    type Error = MoveError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Move> for (usize, usize) {
    fn from(mv: Move) -> Self {
        (mv.row, mv.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
