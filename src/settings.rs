//! Host settings
//!
//! Read from a JSON file; any field left out takes its default.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, TOP_SCORE_FILE};
use crate::error::DodgerError;
use crate::sim::Field;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play-field size in pixels (collision is tested at this resolution)
    pub field_width: u32,
    pub field_height: u32,

    /// Where the best score is kept
    pub top_score_path: PathBuf,

    // === Audio ===
    /// Background music on start
    pub music: bool,
    /// Collision and top-score cues
    pub sound_effects: bool,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            top_score_path: PathBuf::from(TOP_SCORE_FILE),
            music: true,
            sound_effects: true,
            muted: false,
        }
    }
}

impl Settings {
    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }

    pub fn validate(&self) -> Result<(), DodgerError> {
        if self.field_width == 0 || self.field_height == 0 {
            return Err(DodgerError::InvalidSettings(format!(
                "field must be non-empty, got {}x{}",
                self.field_width, self.field_height
            )));
        }
        Ok(())
    }

    pub fn from_json(path: &Path, json: &str) -> Result<Self, DodgerError> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|source| DodgerError::Settings {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from disk. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, DodgerError> {
        match fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json(path, &json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(DodgerError::io(path, e)),
        }
    }

    /// Like [`load`](Self::load) but any failure falls back to the defaults
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("{e}; using default settings");
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), DodgerError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| DodgerError::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|e| DodgerError::io(path, e))?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Effective music toggle (respects mute)
    pub fn effective_music(&self) -> bool {
        self.music && !self.muted
    }

    /// Effective sound effects toggle (respects mute)
    pub fn effective_sound_effects(&self) -> bool {
        self.sound_effects && !self.muted
    }
}
