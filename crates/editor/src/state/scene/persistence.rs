//! Scene export/load and autosave

use std::path::{Path, PathBuf};

use shared::{deserialize_scene, serialize_scene, PlacedObject};

use super::EditorStore;
use crate::error::PersistenceError;
use crate::state::settings::project_dirs;

impl EditorStore {
    /// Serialize the live objects into the versioned scene envelope
    pub fn export_scene_json(&self) -> String {
        serialize_scene(&self.doc.objects)
    }

    /// Replace the document with a parsed scene. Malformed input loads an
    /// empty scene. Returns the number of objects loaded.
    pub fn load_scene_json(&mut self, json: &str) -> usize {
        self.set_objects(deserialize_scene(json));
        self.doc.objects.len()
    }

    /// Get autosave file path
    pub fn autosave_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_dir().join("autosave.json"))
    }

    /// Save scene to autosave file
    pub fn autosave(&self) -> Result<PathBuf, PersistenceError> {
        let path = Self::autosave_path().ok_or(PersistenceError::NoDataDir)?;
        self.autosave_to(&path)?;
        Ok(path)
    }

    /// Save scene to an explicit autosave path
    pub fn autosave_to(&self, path: &Path) -> Result<(), PersistenceError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.export_scene_json())?;
        tracing::info!("Autosaved {} objects to {}", self.doc.objects.len(), path.display());
        Ok(())
    }

    /// Load scene from autosave file
    pub fn load_autosave() -> Option<Vec<PlacedObject>> {
        let path = Self::autosave_path()?;
        Self::load_autosave_from(&path).ok()
    }

    /// Load scene from an explicit autosave path
    pub fn load_autosave_from(path: &Path) -> Result<Vec<PlacedObject>, PersistenceError> {
        let json = std::fs::read_to_string(path)?;
        Ok(deserialize_scene(&json))
    }

    /// Check if autosave file exists
    pub fn has_autosave() -> bool {
        Self::autosave_path().is_some_and(|p| p.exists())
    }
}
