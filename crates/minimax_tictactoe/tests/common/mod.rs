//! Shared helpers for integration tests.

#![allow(dead_code)]

use minimax_tictactoe::{Board, Mark, Move, Outcome, ScoreTable, Searcher};
use std::collections::{HashMap, HashSet};

/// Parses a board, panicking on bad fixtures.
pub fn board(s: &str) -> Board {
    s.parse().expect("valid board fixture")
}

/// Shorthand for a validated move.
pub fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col).expect("valid coordinates")
}

/// Every position reachable from the empty board with X moving first,
/// terminal positions included.
pub fn reachable_positions() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    seen.insert(Board::new());

    while let Some(current) = stack.pop() {
        if current.evaluate().is_terminal() {
            continue;
        }
        let mark = current.side_to_move();
        for cell in current.open_moves() {
            let mut next = current;
            next.place(cell, mark).expect("open cell");
            if seen.insert(next) {
                stack.push(next);
            }
        }
    }

    let mut positions: Vec<Board> = seen.into_iter().collect();
    positions.sort_by_key(|b| b.to_string());
    positions
}

/// Searcher playing the mark due to move on `board`.
pub fn searcher_for(board: &Board) -> Searcher {
    Searcher::new(ScoreTable::standard(board.side_to_move()))
}

/// Marks on the board; the turn controller's move counter for a game
/// that started from empty.
pub fn moves_played(board: &Board) -> usize {
    board.count(Mark::X) + board.count(Mark::O)
}

/// Game-theoretic value for the side to move: 1 win, 0 draw, -1 loss.
///
/// Independent of the engine: plain negamax over cloned boards.
pub fn game_value(board: &Board, memo: &mut HashMap<Board, i32>) -> i32 {
    if let Some(value) = memo.get(board) {
        return *value;
    }
    let mover = board.side_to_move();
    let value = match board.evaluate() {
        Outcome::Win(mark) if mark == mover => 1,
        Outcome::Win(_) => -1,
        Outcome::Draw => 0,
        Outcome::InProgress => board
            .open_moves()
            .map(|cell| {
                let mut next = *board;
                next.place(cell, mover).expect("open cell");
                -game_value(&next, memo)
            })
            .max()
            .expect("in-progress board has open cells"),
    };
    memo.insert(*board, value);
    value
}

/// Plays both sides with the engine until the game ends.
pub fn self_play(mut board: Board, mut moves: usize) -> (Board, Outcome) {
    loop {
        let outcome = board.evaluate();
        if outcome.is_terminal() {
            return (board, outcome);
        }
        let searcher = searcher_for(&board);
        let cell = searcher
            .choose_best_move(&mut board, moves)
            .expect("in-progress board");
        board
            .place(cell, searcher.computer())
            .expect("engine chose an open cell");
        moves += 1;
    }
}
