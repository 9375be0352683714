//! Interactive game and engine self-play on the terminal.

use anyhow::{Context, Result};
use minimax_tictactoe::{
    Board, Mark, Move, Outcome, ScoreTable, Searcher, SessionConfig, Side, TurnController,
};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Loads the session config, falling back to defaults when the file is absent.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_config(path: &Path, mark: Option<Mark>, computer_first: bool) -> Result<SessionConfig> {
    let config = if path.exists() {
        SessionConfig::from_file(path)?
    } else {
        debug!("No config file, using defaults");
        SessionConfig::default()
    };

    let human_mark = mark.unwrap_or(*config.human_mark());
    let first = if computer_first {
        Side::Computer
    } else {
        *config.first()
    };
    let scores = *config.scores();
    Ok(SessionConfig::new(human_mark, first).with_scores(
        *scores.win(),
        *scores.draw(),
        *scores.loss(),
    ))
}

/// Runs one or more games between the user and the engine.
#[instrument(skip(config))]
pub fn play(config: &SessionConfig) -> Result<()> {
    let mut game = TurnController::new(config)?;
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    println!(
        "You play {}, the engine plays {}.",
        game.mark_of(Side::Human),
        game.mark_of(Side::Computer)
    );

    loop {
        while !game.is_over() {
            match game.to_move() {
                Side::Computer => {
                    let (mv, _) = game.play_computer()?;
                    println!("\nEngine plays {} ({})", mv.label(), mv);
                }
                Side::Human => {
                    println!("\n{}\n", game.board());
                    print!("Your move (1-9, 'row col', or a label): ");
                    std::io::stdout().flush()?;

                    let Some(line) = lines.next() else {
                        info!("Input closed");
                        return Ok(());
                    };
                    let line = line.context("Failed to read move")?;
                    let Some(mv) = Move::parse_input(&line) else {
                        println!("Couldn't read '{}' as a cell.", line.trim());
                        continue;
                    };
                    if let Err(e) = game.play_human(mv) {
                        println!("{}", e);
                    }
                }
            }
        }

        println!("\n{}\n", game.board());
        announce(game.outcome(), game.mark_of(Side::Human));

        print!("Play again? [y/N] ");
        std::io::stdout().flush()?;
        match lines.next() {
            Some(Ok(answer)) if answer.trim().eq_ignore_ascii_case("y") => game.restart(),
            _ => return Ok(()),
        }
    }
}

fn announce(outcome: Outcome, human: Mark) {
    match outcome {
        Outcome::Win(mark) if mark == human => println!("You win!"),
        Outcome::Win(mark) => println!("{} wins", mark),
        Outcome::Draw => println!("It's a draw!"),
        Outcome::InProgress => {}
    }
}

/// Engine against itself, printing each game.
#[instrument]
pub fn self_play(first: Mark, games: usize) -> Result<()> {
    let players = [
        Searcher::new(ScoreTable::standard(first)),
        Searcher::new(ScoreTable::standard(first.opponent())),
    ];

    for game in 1..=games {
        let mut board = Board::new();
        let mut moves_played = 0;

        while !board.evaluate().is_terminal() {
            let searcher = &players[moves_played % 2];
            let mv = searcher.choose_best_move(&mut board, moves_played)?;
            board.place(mv, searcher.computer())?;
            moves_played += 1;
            println!("{} plays {}", searcher.computer(), mv.label());
        }

        let outcome = board.evaluate();
        info!(game, %outcome, moves_played, "Self-play finished");
        println!("\n{}\n\nGame {}: {}\n", board, game, outcome);
    }
    Ok(())
}
