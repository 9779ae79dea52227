//! Best-score persistence.
//!
//! The only thing that survives between runs is one integer. It is read once
//! at startup and written only when a finished session beats it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Where the best score lives.
pub trait ScoreStore {
    /// Stored best score; anything missing or unreadable counts as 0.
    fn load(&self) -> u32;

    fn save(&mut self, best_score: u32) -> GameResult<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct ScoreFile {
    best_score: u32,
}

/// JSON file on disk, `{"best_score": N}`. A bare integer is accepted too.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.space_shooter_score.json`, or the working directory without `HOME`.
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".space_shooter_score.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Strict read: `Ok(None)` when the file does not exist yet.
    pub fn read(&self) -> GameResult<Option<u32>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(GameError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if let Ok(score) = contents.trim().parse::<u32>() {
            return Ok(Some(score));
        }

        let file: ScoreFile =
            serde_json::from_str(&contents).map_err(|source| GameError::ScoreFormat {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(file.best_score))
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> u32 {
        match self.read() {
            Ok(Some(score)) => {
                info!("loaded best score {} from {}", score, self.path.display());
                score
            }
            Ok(None) => {
                debug!("no best-score file at {}", self.path.display());
                0
            }
            Err(e) => {
                warn!("{e}; starting from 0");
                0
            }
        }
    }

    fn save(&mut self, best_score: u32) -> GameResult<()> {
        let json = serde_json::to_string_pretty(&ScoreFile { best_score }).map_err(|source| {
            GameError::ScoreFormat {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, json).map_err(|source| GameError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!("saved best score {} to {}", best_score, self.path.display());
        Ok(())
    }
}

/// Keeps the score in memory and counts writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub best_score: u32,
    pub saves: u32,
}

impl MemoryScoreStore {
    pub fn with_best(best_score: u32) -> Self {
        Self {
            best_score,
            saves: 0,
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u32 {
        self.best_score
    }

    fn save(&mut self, best_score: u32) -> GameResult<()> {
        self.best_score = best_score;
        self.saves += 1;
        Ok(())
    }
}
