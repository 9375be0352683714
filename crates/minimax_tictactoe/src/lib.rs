//! Minimax tic-tac-toe engine.
//!
//! A UI-agnostic decision engine for the 3x3 game: a plain [`Board`]
//! value, a terminal-state evaluator, and an exhaustive minimax
//! [`Searcher`] with depth-weighted scoring. A [`TurnController`] owns
//! the session state (side assignment, move counter, whose turn) and
//! calls the search synchronously.
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{Board, Mark, Move, ScoreTable, Searcher};
//!
//! let mut board: Board = "XX./O../...".parse().unwrap();
//! let searcher = Searcher::new(ScoreTable::standard(Mark::X));
//! let best = searcher.choose_best_move(&mut board, 3).unwrap();
//! assert_eq!(best, Move::new(0, 2).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod outcome;
mod position;
pub mod rules;
mod score;
mod search;
mod turn;
mod types;

pub use config::{ScoreValues, SessionConfig};
pub use error::{BoardParseError, ConfigError, MoveError, SearchError, TurnError};
pub use outcome::Outcome;
pub use position::Move;
pub use score::{MAX_PLIES, ScoreTable};
pub use search::{ScoredMove, SearchStats, Searcher};
pub use turn::{Side, TurnController};
pub use types::{Board, Cell, Mark, OpenMoves};
