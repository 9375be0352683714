//! Single-position analysis.

use anyhow::{Context, Result};
use minimax_tictactoe::{Board, Mark, Move, Outcome, ScoreTable, ScoredMove, Searcher, rules};
use serde::Serialize;
use tracing::instrument;

/// Engine view of one position.
#[derive(Debug, Serialize)]
pub struct Analysis {
    board: Board,
    to_move: Mark,
    outcome: Outcome,
    best_move: Option<Move>,
    best_score: Option<i32>,
    threats: Vec<Move>,
    moves: Vec<ScoredMove>,
}

/// Scores every open cell for the mark due to move.
#[instrument]
pub fn analyze(input: &str) -> Result<Analysis> {
    let mut board: Board = input.parse().context("Failed to parse board")?;
    let to_move = board.side_to_move();
    let outcome = board.evaluate();
    let threats = rules::threats(&board, to_move.opponent());

    let mut analysis = Analysis {
        board,
        to_move,
        outcome,
        best_move: None,
        best_score: None,
        threats,
        moves: Vec::new(),
    };
    if outcome.is_terminal() {
        return Ok(analysis);
    }

    let searcher = Searcher::new(ScoreTable::standard(to_move));
    let played = marks_on_board(&board);
    analysis.moves = searcher.score_moves(&mut board)?;
    let best = if played == 0 {
        let opening = searcher.choose_best_move(&mut board, played)?;
        analysis.moves.iter().find(|scored| scored.cell == opening).copied()
    } else {
        Searcher::best_of(&analysis.moves)
    };
    analysis.best_move = best.map(|scored| scored.cell);
    analysis.best_score = best.map(|scored| scored.score);
    Ok(analysis)
}

fn marks_on_board(board: &Board) -> usize {
    board.count(Mark::X) + board.count(Mark::O)
}

/// Prints an analysis for people.
pub fn print(analysis: &Analysis) {
    println!("{}\n", analysis.board);
    if analysis.outcome.is_terminal() {
        println!("Game over: {}", analysis.outcome);
        return;
    }

    println!("{} to move", analysis.to_move);
    if !analysis.threats.is_empty() {
        let cells: Vec<String> = analysis.threats.iter().map(|m| m.to_string()).collect();
        println!("Opponent threatens: {}", cells.join(", "));
    }
    for scored in &analysis.moves {
        println!(
            "  {:<14} {:>4}",
            format!("{} {}", scored.cell, scored.cell.label()),
            scored.score
        );
    }
    if let (Some(best), Some(score)) = (analysis.best_move, analysis.best_score) {
        println!("Best: {} {} (score {})", best, best.label(), score);
    }
}

/// Prints an analysis as JSON.
pub fn print_json(analysis: &Analysis) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(analysis)?);
    Ok(())
}
