//! Top score persistence
//!
//! Stored as a single decimal integer in a text file. A missing or corrupt
//! file is not an error: the game simply starts from zero.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::DodgerError;

/// File-backed best score
#[derive(Debug, Clone)]
pub struct TopScoreStore {
    path: PathBuf,
}

impl TopScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored top score, falling back to 0 when absent or unreadable
    pub fn load(&self) -> u64 {
        match fs::read_to_string(&self.path) {
            Ok(text) => match parse_top_score(&text) {
                Some(score) => {
                    log::info!("Loaded top score {} from {}", score, self.path.display());
                    score
                }
                None => {
                    log::warn!(
                        "Top score file {} is corrupt, starting from 0",
                        self.path.display()
                    );
                    0
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No top score found at {}, starting fresh", self.path.display());
                0
            }
            Err(e) => {
                log::warn!(
                    "Could not read top score {}: {}, starting from 0",
                    self.path.display(),
                    e
                );
                0
            }
        }
    }

    /// Overwrite the stored top score
    pub fn save(&self, score: u64) -> Result<(), DodgerError> {
        fs::write(&self.path, score.to_string()).map_err(|e| DodgerError::io(&self.path, e))?;
        log::info!("Top score {} saved to {}", score, self.path.display());
        Ok(())
    }
}

/// Leading decimal integer, ignoring surrounding whitespace
pub fn parse_top_score(text: &str) -> Option<u64> {
    let trimmed = text.trim_start();
    let digits = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .map_or(trimmed, |end| &trimmed[..end]);
    digits.parse().ok()
}
