//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Move};

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::at(0, 0), Move::at(0, 1), Move::at(0, 2)],
    [Move::at(1, 0), Move::at(1, 1), Move::at(1, 2)],
    [Move::at(2, 0), Move::at(2, 1), Move::at(2, 2)],
    // Columns
    [Move::at(0, 0), Move::at(1, 0), Move::at(2, 0)],
    [Move::at(0, 1), Move::at(1, 1), Move::at(2, 1)],
    [Move::at(0, 2), Move::at(1, 2), Move::at(2, 2)],
    // Diagonals
    [Move::at(0, 0), Move::at(1, 1), Move::at(2, 2)],
    [Move::at(0, 2), Move::at(1, 1), Move::at(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first line (in [`LINES`] order) holding
/// three identical marks, `None` otherwise.
pub fn winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell == board.get(b) && cell == board.get(c) {
            match cell {
                Cell::Occupied(mark) => return Some(mark),
                Cell::Empty => continue,
            }
        }
    }

    None
}

/// Open cells that would complete a line for `mark`, row-major.
pub fn threats(board: &Board, mark: Mark) -> Vec<Move> {
    board
        .open_moves()
        .filter(|mv| {
            let mut probe = *board;
            probe.put(*mv, mark);
            winner(&probe) == Some(mark)
        })
        .collect()
}
