//! Crate error type.
//!
//! Gameplay never fails; these cover the edges that touch the filesystem:
//! the tuning file and the best-score file.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum GameError {
    /// Reading or writing a file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The tuning file is not valid TOML for [`crate::config::GameConfig`].
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A tuning value is outside the range the simulation supports.
    InvalidConfig {
        /// Name of the field (for logging).
        name: &'static str,
        /// The rejected value, already formatted.
        value: String,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },

    /// The best-score file could not be encoded or decoded.
    ScoreFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Io { path, source } => {
                write!(f, "i/o error on '{}': {}", path.display(), source)
            }
            GameError::ConfigParse { path, source } => {
                write!(f, "failed to parse config '{}': {}", path.display(), source)
            }
            GameError::InvalidConfig {
                name,
                value,
                expected,
            } => write!(
                f,
                "config value '{}' = {} is invalid (expected {})",
                name, value, expected
            ),
            GameError::ScoreFormat { path, source } => write!(
                f,
                "best-score file '{}' is malformed: {}",
                path.display(),
                source
            ),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io { source, .. } => Some(source),
            GameError::ConfigParse { source, .. } => Some(source),
            GameError::ScoreFormat { source, .. } => Some(source),
            GameError::InvalidConfig { .. } => None,
        }
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;
