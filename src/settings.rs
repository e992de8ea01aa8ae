//! Tracker configuration
//!
//! Where the score files live. Persisted separately as JSON when a caller
//! wants something other than the defaults.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BASE_DIR, HIGH_SCORE_FILE, SCORES_FILE};
use crate::persistence::{PersistError, Result};

/// File locations for a [`ScoreTracker`](crate::ScoreTracker)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Directory holding both files (not created automatically)
    pub base_dir: PathBuf,
    /// High score file name, relative to `base_dir`
    pub high_score_file: String,
    /// Score history file name, relative to `base_dir`
    pub scores_file: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            high_score_file: HIGH_SCORE_FILE.to_string(),
            scores_file: SCORES_FILE.to_string(),
        }
    }
}

impl TrackerConfig {
    /// Default file names under a different directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: dir.into(),
            ..Self::default()
        }
    }

    pub fn high_score_path(&self) -> PathBuf {
        self.base_dir.join(&self.high_score_file)
    }

    pub fn scores_path(&self) -> PathBuf {
        self.base_dir.join(&self.scores_file)
    }

    /// Load config from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| PersistError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(file).map_err(|source| PersistError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded tracker config from {}", path.display());
                config
            }
            Err(err) => {
                log::info!("Using default tracker config ({err})");
                Self::default()
            }
        }
    }

    /// Save config as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let io_err = |source: std::io::Error| PersistError::Io {
            path: path.to_path_buf(),
            source,
        };
        let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|source| {
            PersistError::Config {
                path: path.to_path_buf(),
                source,
            }
        })?;
        writer.flush().map_err(io_err)?;
        log::info!("Tracker config saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::scratch_dir;

    #[test]
    fn test_default_paths() {
        let config = TrackerConfig::default();
        assert_eq!(config.high_score_path(), Path::new("files/highscore.txt"));
        assert_eq!(config.scores_path(), Path::new("files/scores.txt"));
    }

    #[test]
    fn test_in_dir_keeps_file_names() {
        let config = TrackerConfig::in_dir("/tmp/game");
        assert_eq!(config.high_score_path(), Path::new("/tmp/game/highscore.txt"));
        assert_eq!(config.scores_path(), Path::new("/tmp/game/scores.txt"));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: TrackerConfig = serde_json::from_str(r#"{"base_dir": "saves"}"#).unwrap();
        assert_eq!(config.base_dir, PathBuf::from("saves"));
        assert_eq!(config.high_score_file, HIGH_SCORE_FILE);
        assert_eq!(config.scores_file, SCORES_FILE);
    }

    #[test]
    fn test_save_then_load() {
        let dir = scratch_dir("settings_save");
        let path = dir.join("tracker.json");
        let config = TrackerConfig {
            base_dir: dir.clone(),
            high_score_file: "best.txt".to_string(),
            scores_file: "games.txt".to_string(),
        };

        config.save(&path).unwrap();
        assert_eq!(TrackerConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_or_default_on_bad_json() {
        let dir = scratch_dir("settings_bad_json");
        let path = dir.join("tracker.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            TrackerConfig::load(&path),
            Err(PersistError::Config { .. })
        ));
        assert_eq!(TrackerConfig::load_or_default(&path), TrackerConfig::default());
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let dir = scratch_dir("settings_missing");
        let config = TrackerConfig::load_or_default(&dir.join("absent.json"));
        assert_eq!(config, TrackerConfig::default());
    }
}
