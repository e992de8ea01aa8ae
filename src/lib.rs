//! Score Keeper - current score, high score and score history for a game
//!
//! Core modules:
//! - `scores`: The in-memory tracker game logic talks to
//! - `persistence`: Plain text high score and history files
//! - `settings`: Where those files live

pub mod persistence;
pub mod scores;
pub mod settings;

pub use persistence::PersistError;
pub use scores::ScoreTracker;
pub use settings::TrackerConfig;

/// Default file locations, relative to the working directory
pub mod consts {
    pub const DEFAULT_BASE_DIR: &str = "files";
    pub const HIGH_SCORE_FILE: &str = "highscore.txt";
    pub const SCORES_FILE: &str = "scores.txt";
}
