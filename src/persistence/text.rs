//! Text formats for the high score and history files

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::{PersistError, Result};

/// Prefix written before the high score value
pub const HIGH_SCORE_PREFIX: &str = "High Score: ";
/// First line of the history file
pub const HISTORY_HEADER: &str = "Scores:";

/// Extract the value from a `High Score: <n>` line.
///
/// Splits on the first `": "` rather than trusting a fixed offset, so the
/// label text can vary. Anything that is not a non-negative integer after
/// the delimiter yields `None`.
pub fn parse_high_score(line: &str) -> Option<u64> {
    let (_, value) = line.split_once(": ")?;
    value.trim().parse().ok()
}

pub fn format_high_score(high: u64) -> String {
    format!("{HIGH_SCORE_PREFIX}{high}")
}

/// Render the history file. Game numbers are 1-based positions.
pub fn format_history(history: &[u64]) -> String {
    let mut out = String::with_capacity(HISTORY_HEADER.len() + 1 + history.len() * 16);
    out.push_str(HISTORY_HEADER);
    out.push('\n');
    for (i, score) in history.iter().enumerate() {
        out.push_str(&format!("game {}: {}\n", i + 1, score));
    }
    out
}

/// Read the high score from the first line of `path`
pub fn load_high_score(path: &Path) -> Result<u64> {
    let file = File::open(path).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(|source| PersistError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let line = line.trim_end_matches(['\r', '\n']);

    parse_high_score(line).ok_or_else(|| PersistError::Malformed {
        path: path.to_path_buf(),
        line: line.to_string(),
    })
}

pub fn save_high_score(path: &Path, high: u64) -> Result<()> {
    write_file(path, &format_high_score(high))
}

pub fn save_history(path: &Path, history: &[u64]) -> Result<()> {
    write_file(path, &format_history(history))
}

/// Truncate `path` and write `contents`, surfacing flush errors
fn write_file(path: &Path, contents: &str) -> Result<()> {
    let io_err = |source: std::io::Error| PersistError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    writer.write_all(contents.as_bytes()).map_err(io_err)?;
    writer.flush().map_err(io_err)
}
