//! Editor settings

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::history::DEFAULT_HISTORY_LIMIT;
use crate::error::PersistenceError;

/// Project directories used for settings and autosave
pub(crate) fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "aquascape", "aquascape")
}

/// All editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Maximum number of undo entries; older ones are dropped
    pub history_limit: usize,
    /// Horizontal (x and z) offset applied to duplicated objects
    pub duplicate_offset: f64,
    /// Gap left between the floor and a newly placed object
    pub placement_clearance: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            duplicate_offset: 0.25,
            placement_clearance: 0.02,
        }
    }
}

impl EditorSettings {
    /// Settings file path
    pub fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if let Ok(settings) = Self::load_from(&path) {
                return settings;
            }
        }
        Self::default()
    }

    /// Load settings from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, PersistenceError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), PersistenceError> {
        let path = Self::config_path().ok_or(PersistenceError::NoDataDir)?;
        self.save_to(&path)
    }

    /// Save settings to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<(), PersistenceError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
