//! Plain text persistence for scores
//!
//! Two files, both fully overwritten on save:
//! - high score: a single `High Score: <n>` line
//! - history: `Scores:` header followed by `game <n>: <score>` lines

pub mod text;

pub use text::{
    format_high_score, format_history, load_high_score, parse_high_score, save_high_score,
    save_history,
};

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing score files
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed high score in {}: {line:?}", .path.display())]
    Malformed { path: PathBuf, line: String },

    #[error("Invalid tracker config in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for persistence operations
pub type Result<T> = std::result::Result<T, PersistError>;
