//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::{Board, Move};

/// Checks if every cell holds a mark.
pub fn is_full(board: &Board) -> bool {
    Move::ALL.iter().all(|mv| !board.is_empty(*mv))
}

/// A full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
