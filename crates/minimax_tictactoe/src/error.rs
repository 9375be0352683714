//! Error types for the engine.

use crate::{Move, Outcome, Side};
use derive_more::{Display, Error};
use tracing::instrument;

/// A placement that the board refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// Coordinates fall outside the 3x3 grid.
    #[display("Cell ({}, {}) is outside the 3x3 board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Move),
}

impl std::error::Error for MoveError {}

/// The search was asked to move on a board it cannot move on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SearchError {
    /// The board is already terminal; the turn controller should have stopped.
    #[display("Cannot search a finished game ({})", _0)]
    GameOver(Outcome),
}

impl std::error::Error for SearchError {}

/// Error raised by the turn controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TurnError {
    /// The other side is to move.
    #[display("It's not the {} side's turn", _0)]
    WrongTurn(Side),

    /// The game has already ended.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),

    /// The move itself was illegal.
    #[display("{}", _0)]
    Move(MoveError),

    /// The engine refused to search.
    #[display("{}", _0)]
    Search(SearchError),
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::Move(err) => Some(err),
            TurnError::Search(err) => Some(err),
            TurnError::WrongTurn(_) | TurnError::GameOver(_) => None,
        }
    }
}

impl From<MoveError> for TurnError {
    fn from(err: MoveError) -> Self {
        TurnError::Move(err)
    }
}

impl From<SearchError> for TurnError {
    fn from(err: SearchError) -> Self {
        TurnError::Search(err)
    }
}

/// Failure to read a board from its text form.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// Wrong number of cells.
    #[display("Expected 9 cells, found {} in '{}'", got, input)]
    Length {
        /// Cells found.
        got: usize,
        /// Original input.
        input: String,
    },

    /// A character that is neither a mark, an empty marker, nor a separator.
    #[display("Invalid character '{}' in '{}'", character, input)]
    Character {
        /// Offending character.
        character: char,
        /// Original input.
        input: String,
    },

    /// Mark counts that no alternating game can produce.
    #[display("Invalid mark counts: X={}, O={} (must differ by at most one)", x, o)]
    MarkCounts {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}

impl std::error::Error for BoardParseError {}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
