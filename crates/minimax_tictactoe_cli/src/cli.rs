//! Command-line interface for the tic-tac-toe engine.

use clap::{Parser, Subcommand};
use minimax_tictactoe::Mark;

/// ttt - play against or query a perfect tic-tac-toe engine
#[derive(Parser, Debug)]
#[command(name = "ttt")]
#[command(about = "Minimax tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game against the engine on the terminal
    Play {
        /// Mark you play (overrides the config file)
        #[arg(short, long)]
        mark: Option<Mark>,

        /// Let the engine move first (overrides the config file)
        #[arg(long)]
        computer_first: bool,

        /// Path to a session config file
        #[arg(short, long, default_value = "ttt.toml")]
        config: std::path::PathBuf,
    },

    /// Score every move for the side to move on a board
    Analyze {
        /// Board as nine cells, e.g. "XX./O../..." (`.` is empty)
        board: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides
    SelfPlay {
        /// Mark that moves first
        #[arg(long, default_value = "X")]
        first: Mark,

        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: usize,
    },
}
