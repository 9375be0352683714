//! Session configuration.

use crate::{ConfigError, Mark, ScoreTable, Side};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Side assignment and scoring for one game session.
///
/// ```toml
/// human_mark = "O"
/// first = "computer"
///
/// [scores]
/// win = 10
/// draw = 0
/// loss = -10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Mark the human plays; the computer takes the other.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Which side moves first.
    #[serde(default = "default_first")]
    first: Side,

    /// Raw scores from the computer's point of view.
    #[serde(default)]
    scores: ScoreValues,
}

/// Win / draw / loss values before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScoreValues {
    /// Computer wins.
    #[serde(default = "default_win")]
    win: i32,
    /// Draw.
    #[serde(default)]
    draw: i32,
    /// Computer loses.
    #[serde(default = "default_loss")]
    loss: i32,
}

impl Default for ScoreValues {
    fn default() -> Self {
        Self {
            win: default_win(),
            draw: 0,
            loss: default_loss(),
        }
    }
}

fn default_human_mark() -> Mark {
    Mark::X
}

fn default_first() -> Side {
    Side::Human
}

fn default_win() -> i32 {
    10
}

fn default_loss() -> i32 {
    -10
}

impl SessionConfig {
    /// Creates a configuration with the standard scores.
    #[instrument]
    pub fn new(human_mark: Mark, first: Side) -> Self {
        Self {
            human_mark,
            first,
            scores: ScoreValues::default(),
        }
    }

    /// Replaces the raw score values.
    pub fn with_scores(mut self, win: i32, draw: i32, loss: i32) -> Self {
        self.scores = ScoreValues { win, draw, loss };
        self
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(human_mark = %config.human_mark, first = %config.first, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.score_table()?;
        Ok(config)
    }

    /// The computer's mark.
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// Builds the validated score table for the computer's mark.
    #[instrument(skip(self))]
    pub fn score_table(&self) -> Result<ScoreTable, ConfigError> {
        ScoreTable::new(
            self.computer_mark(),
            self.scores.win,
            self.scores.draw,
            self.scores.loss,
        )
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(default_human_mark(), default_first())
    }
}
