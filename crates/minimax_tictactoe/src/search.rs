//! Exhaustive minimax over the 3x3 game tree.
//!
//! The search borrows the caller's board and walks the tree by placing
//! and clearing marks in place. Every placement is undone before the
//! enclosing call returns, so the caller sees the board it passed in.
//! All working state lives on the call stack; independent boards can be
//! searched from different threads.
//!
//! There is no pruning. An alpha-beta window would thread through
//! the shared child-visiting loop as two extra bounds and a break.

use crate::{Board, Mark, Move, ScoreTable, SearchError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A candidate move and its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// The cell played.
    pub cell: Move,
    /// Minimax value after playing it.
    pub score: i32,
}

/// Counters for one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    nodes: u64,
}

impl SearchStats {
    /// Positions evaluated.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// Minimax search for the side the score table maximizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Searcher {
    scores: ScoreTable,
}

impl Searcher {
    /// Creates a searcher playing the table's maximizing mark.
    pub fn new(scores: ScoreTable) -> Self {
        Self { scores }
    }

    /// The score table.
    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    /// The automated side's mark.
    pub fn computer(&self) -> Mark {
        self.scores.maximizer()
    }

    /// The opposing mark.
    pub fn opponent(&self) -> Mark {
        self.scores.maximizer().opponent()
    }

    /// Scores `board` by full-depth minimax.
    ///
    /// Terminal boards score their depth-adjusted table value. Otherwise
    /// the computer's mark is tried on every open cell when `maximizing`,
    /// the opponent's when not, and the max (or min) of the children is
    /// returned.
    pub fn minimax(&self, board: &mut Board, depth: u32, maximizing: bool) -> i32 {
        let mut stats = SearchStats::default();
        self.search(board, depth, maximizing, &mut stats)
    }

    fn search(
        &self,
        board: &mut Board,
        depth: u32,
        maximizing: bool,
        stats: &mut SearchStats,
    ) -> i32 {
        stats.nodes += 1;

        if let Some(score) = self.scores.terminal_score(board.evaluate(), depth) {
            return score;
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        self.visit_children(board, maximizing, depth.saturating_add(1), stats, |_, score| {
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        });
        best
    }

    /// Plays the mover's mark on each open cell in row-major order, scores
    /// the resulting position at `child_depth` with the other side to
    /// move, and undoes the placement before handing the score to `visit`.
    ///
    /// Shared by the recursion and the root scan.
    fn visit_children(
        &self,
        board: &mut Board,
        maximizing: bool,
        child_depth: u32,
        stats: &mut SearchStats,
        mut visit: impl FnMut(Move, i32),
    ) {
        let mark = if maximizing {
            self.computer()
        } else {
            self.opponent()
        };

        for cell in board.open_moves() {
            board.put(cell, mark);
            let score = self.search(board, child_depth, !maximizing, stats);
            board.clear(cell);
            visit(cell, score);
        }
    }

    /// Scores every open cell for the computer, row-major.
    ///
    /// Each candidate is played and the reply is searched at depth 0
    /// with the opponent minimizing.
    #[instrument(skip(self, board), fields(computer = %self.computer()))]
    pub fn score_moves(&self, board: &mut Board) -> Result<Vec<ScoredMove>, SearchError> {
        self.check_in_progress(board)?;

        let mut stats = SearchStats::default();
        let mut scored = Vec::with_capacity(board.open_moves().len());
        self.visit_children(board, true, 0, &mut stats, |cell, score| {
            debug!(index = cell.index(), %cell, score, "Scored candidate");
            scored.push(ScoredMove { cell, score });
        });

        debug!(nodes = stats.nodes(), candidates = scored.len(), "Search complete");
        Ok(scored)
    }

    /// Best achievable score for the computer from `board`.
    #[instrument(skip(self, board))]
    pub fn best_score(&self, board: &mut Board) -> Result<i32, SearchError> {
        let scored = self.score_moves(board)?;
        Self::best_of(&scored)
            .map(|best| best.score)
            .ok_or_else(|| SearchError::GameOver(board.evaluate()))
    }

    /// Chooses the computer's move.
    ///
    /// On the very first move of a game (`moves_played == 0`) the center
    /// is returned without searching. Otherwise the highest-scoring cell
    /// wins, and the earliest in row-major order breaks ties.
    #[instrument(skip(self, board), fields(computer = %self.computer()))]
    pub fn choose_best_move(
        &self,
        board: &mut Board,
        moves_played: usize,
    ) -> Result<Move, SearchError> {
        self.check_in_progress(board)?;

        if moves_played == 0 && board.is_empty(Move::CENTER) {
            info!(cell = %Move::CENTER, "Opening in the center");
            return Ok(Move::CENTER);
        }

        let scored = self.score_moves(board)?;
        let best =
            Self::best_of(&scored).ok_or_else(|| SearchError::GameOver(board.evaluate()))?;
        info!(cell = %best.cell, score = best.score, "Chose move");
        Ok(best.cell)
    }

    /// First candidate with the strictly greatest score.
    ///
    /// `None` only for an empty list, which [`Searcher::score_moves`]
    /// never returns for a board it accepted.
    pub fn best_of(scored: &[ScoredMove]) -> Option<ScoredMove> {
        let mut best: Option<ScoredMove> = None;
        for candidate in scored {
            if best.is_none_or(|b| candidate.score > b.score) {
                best = Some(*candidate);
            }
        }
        best
    }

    fn check_in_progress(&self, board: &Board) -> Result<(), SearchError> {
        let outcome = board.evaluate();
        if outcome.is_terminal() {
            warn!(%outcome, "Search requested on a finished board");
            return Err(SearchError::GameOver(outcome));
        }
        Ok(())
    }
}
