//! Score tracker
//!
//! Holds the current score, the best score ever seen and the scores
//! committed this session. Only the high score is read back at startup.

use std::path::PathBuf;

use crate::persistence::{self, Result};
use crate::settings::TrackerConfig;

/// Current score, high score and session history
#[derive(Debug, Clone)]
pub struct ScoreTracker {
    current: u64,
    high: u64,
    history: Vec<u64>,
    config: TrackerConfig,
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreTracker {
    /// Tracker backed by the default `files/` directory
    pub fn new() -> Self {
        Self::with_config(TrackerConfig::default())
    }

    /// Tracker backed by `dir` with the default file names
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::with_config(TrackerConfig::in_dir(dir))
    }

    /// Create a tracker, loading the high score from `config`'s high score file.
    ///
    /// A missing, empty or malformed file means a high score of 0.
    pub fn with_config(config: TrackerConfig) -> Self {
        let path = config.high_score_path();
        let high = match persistence::load_high_score(&path) {
            Ok(high) => {
                log::info!("Loaded high score {} from {}", high, path.display());
                high
            }
            Err(err) => {
                log::debug!("No usable high score, starting from 0 ({err})");
                0
            }
        };

        Self {
            current: 0,
            high,
            history: Vec::new(),
            config,
        }
    }

    pub fn current_score(&self) -> u64 {
        self.current
    }

    /// Set the current score, raising the high score if beaten.
    /// Negative values reset the current score to 0 and leave the high score alone.
    pub fn set_score(&mut self, value: i64) {
        match u64::try_from(value) {
            Ok(score) => {
                self.current = score;
                self.high = self.high.max(score);
            }
            Err(_) => self.current = 0,
        }
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    pub fn high_score(&self) -> u64 {
        self.high
    }

    /// Recorded scores in recording order.
    ///
    /// This is a borrowed view: it cannot be mutated, and recording is
    /// blocked while it is held. Use `to_vec()` for a snapshot.
    pub fn history(&self) -> &[u64] {
        &self.history
    }

    /// Append the current score to the history
    pub fn record_score(&mut self) {
        self.history.push(self.current);
        log::debug!("Recorded game {}: {}", self.history.len(), self.current);
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Write the history and high score files.
    ///
    /// Both writes are attempted even if the first fails. The first error
    /// is returned. In-memory state is never touched.
    pub fn persist(&self) -> Result<()> {
        let history = persistence::save_history(&self.config.scores_path(), &self.history);
        let high = persistence::save_high_score(&self.config.high_score_path(), self.high);

        if let Err(err) = &history {
            log::warn!("Failed to save score history: {err}");
        }
        if let Err(err) = &high {
            log::warn!("Failed to save high score: {err}");
        }
        history?;
        high?;

        log::info!(
            "Scores saved ({} games, high score {})",
            self.history.len(),
            self.high
        );
        Ok(())
    }
}
