//! Terminal scoring for the search.

use crate::{ConfigError, Mark, Outcome};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Deepest a game can go: nine plies fill the board.
pub const MAX_PLIES: u32 = 9;

/// Maps terminal outcomes to scores for the maximizing side.
///
/// Chosen once per session from the computer's mark and never changed
/// during a search. Classes are separated by more than [`MAX_PLIES`] so
/// the depth penalty can never make a loss outrank a draw or a draw
/// outrank a win. Deserializing goes through [`ScoreTable::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawScoreTable")]
pub struct ScoreTable {
    maximizer: Mark,
    win: i32,
    draw: i32,
    loss: i32,
}

impl ScoreTable {
    /// Creates a table, checking `win > draw > loss` with room for the
    /// depth penalty.
    #[instrument]
    pub fn new(maximizer: Mark, win: i32, draw: i32, loss: i32) -> Result<Self, ConfigError> {
        let ordered = win.checked_sub_unsigned(MAX_PLIES).is_some_and(|w| w > draw)
            && loss.checked_add_unsigned(MAX_PLIES).is_some_and(|l| l < draw);
        if !ordered {
            return Err(ConfigError::new(format!(
                "scores must satisfy win - {MAX_PLIES} > draw > loss + {MAX_PLIES} \
                 (got win={win}, draw={draw}, loss={loss})"
            )));
        }
        Ok(Self {
            maximizer,
            win,
            draw,
            loss,
        })
    }

    /// The +10 / 0 / -10 table for `maximizer`.
    pub fn standard(maximizer: Mark) -> Self {
        Self {
            maximizer,
            win: 10,
            draw: 0,
            loss: -10,
        }
    }

    /// The mark the search maximizes for.
    pub fn maximizer(&self) -> Mark {
        self.maximizer
    }

    /// Score when the maximizer wins.
    pub fn win(&self) -> i32 {
        self.win
    }

    /// Score for a draw.
    pub fn draw(&self) -> i32 {
        self.draw
    }

    /// Score when the maximizer loses.
    pub fn loss(&self) -> i32 {
        self.loss
    }

    /// Score of a line for `mark`.
    pub fn for_mark(&self, mark: Mark) -> i32 {
        if mark == self.maximizer {
            self.win
        } else {
            self.loss
        }
    }

    /// Raw table value of a terminal outcome.
    pub fn score_for(&self, outcome: Outcome) -> Option<i32> {
        match outcome {
            Outcome::Win(mark) => Some(self.for_mark(mark)),
            Outcome::Draw => Some(self.draw),
            Outcome::InProgress => None,
        }
    }

    /// Depth-adjusted value of a terminal outcome reached after `depth`
    /// plies below the root scan.
    ///
    /// Wins lose a point per ply and losses gain one, so the quickest win
    /// and the slowest loss rank highest. Draws are flat.
    pub fn terminal_score(&self, outcome: Outcome, depth: u32) -> Option<i32> {
        match outcome {
            Outcome::Win(mark) if mark == self.maximizer => {
                Some(self.win.saturating_sub_unsigned(depth))
            }
            Outcome::Win(_) => Some(self.loss.saturating_add_unsigned(depth)),
            Outcome::Draw => Some(self.draw),
            Outcome::InProgress => None,
        }
    }
}

/// Wire form of [`ScoreTable`] before validation.
#[derive(Deserialize)]
struct RawScoreTable {
    maximizer: Mark,
    win: i32,
    draw: i32,
    loss: i32,
}

impl TryFrom<RawScoreTable> for ScoreTable {
    type Error = ConfigError;

    fn try_from(raw: RawScoreTable) -> Result<Self, Self::Error> {
        Self::new(raw.maximizer, raw.win, raw.draw, raw.loss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_standard_table_mirrors_by_mark() {
        let x = ScoreTable::standard(Mark::X);
        let o = ScoreTable::standard(Mark::O);
        assert_eq!(x.score_for(Outcome::Win(Mark::X)), Some(10));
        assert_eq!(x.score_for(Outcome::Win(Mark::O)), Some(-10));
        assert_eq!(o.score_for(Outcome::Win(Mark::X)), Some(-10));
        assert_eq!(o.score_for(Outcome::Win(Mark::O)), Some(10));
        assert_eq!(x.score_for(Outcome::Draw), Some(0));
        assert_eq!(x.score_for(Outcome::InProgress), None);
    }

    #[test]
    fn test_depth_penalty_prefers_fast_wins_and_slow_losses() {
        let table = ScoreTable::standard(Mark::X);
        let fast_win = table.terminal_score(Outcome::Win(Mark::X), 0).unwrap();
        let slow_win = table.terminal_score(Outcome::Win(Mark::X), 4).unwrap();
        let fast_loss = table.terminal_score(Outcome::Win(Mark::O), 1).unwrap();
        let slow_loss = table.terminal_score(Outcome::Win(Mark::O), 5).unwrap();
        assert!(fast_win > slow_win);
        assert!(slow_loss > fast_loss);
    }

    #[test]
    fn test_classes_never_reorder() {
        for mark in Mark::iter() {
            let table = ScoreTable::standard(mark);
            let draw = table.terminal_score(Outcome::Draw, MAX_PLIES).unwrap();
            for depth in 0..=MAX_PLIES {
                let win = table.terminal_score(Outcome::Win(mark), depth).unwrap();
                let loss = table
                    .terminal_score(Outcome::Win(mark.opponent()), depth)
                    .unwrap();
                assert!(win > draw && draw > loss, "{mark} at depth {depth}");
            }
        }
    }

    #[test]
    fn test_new_validates_ordering() {
        assert!(ScoreTable::new(Mark::X, 100, 0, -100).is_ok());
        assert!(ScoreTable::new(Mark::X, 0, 0, -10).is_err());
        assert!(ScoreTable::new(Mark::X, 5, 0, -5).is_err());
        assert!(ScoreTable::new(Mark::X, -10, 0, 10).is_err());
        assert!(ScoreTable::new(Mark::X, i32::MIN, 0, i32::MAX).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let table: ScoreTable =
            serde_json::from_str(r#"{"maximizer":"O","win":10,"draw":0,"loss":-10}"#).unwrap();
        assert_eq!(table, ScoreTable::standard(Mark::O));

        let inverted =
            serde_json::from_str::<ScoreTable>(r#"{"maximizer":"X","win":-10,"draw":0,"loss":10}"#);
        assert!(inverted.is_err());

        let overflowing = serde_json::from_str::<ScoreTable>(&format!(
            r#"{{"maximizer":"X","win":{},"draw":0,"loss":{}}}"#,
            i32::MIN,
            i32::MAX
        ));
        assert!(overflowing.is_err());
    }

    #[test]
    fn test_terminal_score_saturates_at_extreme_depth() {
        let table = ScoreTable::new(Mark::X, i32::MAX, 0, i32::MIN).unwrap();
        assert_eq!(
            table.terminal_score(Outcome::Win(Mark::X), u32::MAX),
            Some(i32::MIN)
        );
        assert_eq!(
            table.terminal_score(Outcome::Win(Mark::O), u32::MAX),
            Some(i32::MAX)
        );
        let extreme = ScoreTable::new(Mark::X, i32::MAX, i32::MIN + 10, i32::MIN).unwrap();
        assert_eq!(
            extreme.terminal_score(Outcome::Win(Mark::O), 3),
            Some(i32::MIN + 3)
        );
    }
}
