//! Turn sequencing around the engine.
//!
//! The controller owns the authoritative board and the session state the
//! engine must not: whose turn it is and how many moves have been made.

use crate::{Board, ConfigError, Mark, Move, Outcome, Searcher, SessionConfig, TurnError};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Who a mark belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    /// The person at the keyboard.
    Human,
    /// The engine.
    Computer,
}

impl Side {
    /// Returns the other side.
    pub fn other(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Alternates a human and the engine over one board.
#[derive(Debug, Clone)]
pub struct TurnController {
    board: Board,
    searcher: Searcher,
    human: Mark,
    first: Side,
    to_move: Side,
    moves_played: usize,
}

impl TurnController {
    /// Starts a session; the score table is fixed here for its lifetime.
    #[instrument(skip(config))]
    pub fn new(config: &SessionConfig) -> Result<Self, ConfigError> {
        let searcher = Searcher::new(config.score_table()?);
        info!(
            human = %config.human_mark(),
            computer = %searcher.computer(),
            first = %config.first(),
            "Session started"
        );
        Ok(Self {
            board: Board::new(),
            searcher,
            human: *config.human_mark(),
            first: *config.first(),
            to_move: *config.first(),
            moves_played: 0,
        })
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The engine in use.
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// Side to move.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Moves applied since the start of the game.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Mark played by `side`.
    pub fn mark_of(&self, side: Side) -> Mark {
        match side {
            Side::Human => self.human,
            Side::Computer => self.human.opponent(),
        }
    }

    /// Current outcome of the board.
    pub fn outcome(&self) -> Outcome {
        self.board.evaluate()
    }

    /// Returns true once the game has a result.
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Applies the human's move.
    #[instrument(skip(self))]
    pub fn play_human(&mut self, mv: Move) -> Result<Outcome, TurnError> {
        self.apply(Side::Human, mv)
    }

    /// Runs the engine synchronously and applies its move.
    #[instrument(skip(self))]
    pub fn play_computer(&mut self) -> Result<(Move, Outcome), TurnError> {
        self.check_turn(Side::Computer)?;
        let mv = self
            .searcher
            .choose_best_move(&mut self.board, self.moves_played)?;
        let outcome = self.apply(Side::Computer, mv)?;
        Ok((mv, outcome))
    }

    /// Clears the board for a new game with the same sides.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.moves_played = 0;
        self.to_move = self.first;
        info!("Game restarted");
    }

    fn check_turn(&self, side: Side) -> Result<(), TurnError> {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            warn!(%outcome, %side, "Move after game over");
            return Err(TurnError::GameOver(outcome));
        }
        if self.to_move != side {
            warn!(%side, to_move = %self.to_move, "Move out of turn");
            return Err(TurnError::WrongTurn(side));
        }
        Ok(())
    }

    fn apply(&mut self, side: Side, mv: Move) -> Result<Outcome, TurnError> {
        self.check_turn(side)?;
        self.board.place(mv, self.mark_of(side))?;
        self.moves_played += 1;
        self.to_move = side.other();

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%outcome, moves = self.moves_played, "Game over");
        }
        Ok(outcome)
    }
}
