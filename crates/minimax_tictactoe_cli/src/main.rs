//! ttt - terminal front-end for the minimax tic-tac-toe engine.

#![warn(missing_docs)]

mod analyze;
mod cli;
mod play;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mark,
            computer_first,
            config,
        } => {
            let config = play::load_config(&config, mark, computer_first)?;
            play::play(&config)
        }
        Command::Analyze { board, json } => {
            let analysis = analyze::analyze(&board)?;
            if json {
                analyze::print_json(&analysis)
            } else {
                analyze::print(&analysis);
                Ok(())
            }
        }
        Command::SelfPlay { first, games } => play::self_play(first, games),
    }
}
