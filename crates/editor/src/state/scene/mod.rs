//! Scene document store
//!
//! This module provides the editor document (placed objects, selection, mode
//! and physics tracking) together with the command history that records every
//! content-changing operation.

mod commands;
mod display;
mod history;
mod mode_ops;
mod object_ops;
mod persistence;
mod selection_ops;
mod transform_ops;

use std::collections::BTreeSet;

use serde::Serialize;
use shared::{EditorMode, ObjectId, PlacedObject, TransformMode};

pub use commands::{RemovedObject, SceneCommand, UiSnapshot};
pub use display::{object_display_name, short_id};

use super::history::History;
use super::selection::SelectionState;
use super::settings::EditorSettings;

/// The editor document
///
/// Only [`EditorStore`] mutates it; every id referenced by the selection or the
/// dynamic set belongs to a live object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorDocument {
    /// Placed objects in insertion order
    pub(crate) objects: Vec<PlacedObject>,
    pub(crate) mode: EditorMode,
    /// Asset instantiated by the next placement click (place mode only)
    pub(crate) selected_asset_type: Option<String>,
    #[serde(flatten)]
    pub(crate) selection: SelectionState,
    pub(crate) transform_mode: TransformMode,
    /// True only while an interactive drag is in progress
    pub(crate) is_transforming: bool,
    /// Objects whose pose is currently owned by the physics simulation
    pub(crate) dynamic_object_ids: BTreeSet<ObjectId>,
}

impl EditorDocument {
    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn selected_asset_type(&self) -> Option<&str> {
        self.selected_asset_type.as_deref()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn transform_mode(&self) -> TransformMode {
        self.transform_mode
    }

    pub fn is_transforming(&self) -> bool {
        self.is_transforming
    }

    pub fn dynamic_object_ids(&self) -> &BTreeSet<ObjectId> {
        &self.dynamic_object_ids
    }

    /// Get an object by ID
    pub fn get(&self, id: &str) -> Option<&PlacedObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.objects.iter().any(|o| o.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut PlacedObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.objects.iter().position(|o| o.id == id)
    }

    pub(crate) fn remove_by_id(&mut self, id: &str) -> Option<PlacedObject> {
        let index = self.index_of(id)?;
        self.dynamic_object_ids.remove(id);
        Some(self.objects.remove(index))
    }

    /// Drop selection and dynamic entries that no longer refer to live objects
    pub(crate) fn prune_stale_ids(&mut self) {
        let live: BTreeSet<&str> = self.objects.iter().map(|o| o.id.as_str()).collect();
        self.selection.retain(|id| live.contains(id.as_str()));
        self.dynamic_object_ids.retain(|id| live.contains(id.as_str()));
    }
}

/// Document store with undo/redo history
#[derive(Debug, Clone)]
pub struct EditorStore {
    pub(crate) doc: EditorDocument,
    pub(crate) history: History<SceneCommand>,
    pub(crate) settings: EditorSettings,
    /// Monotonically increasing version counter for cache invalidation
    pub(crate) version: u64,
}

impl EditorStore {
    /// Empty store with default settings
    pub fn new() -> Self {
        Self::with_settings(EditorSettings::default())
    }

    pub fn with_settings(settings: EditorSettings) -> Self {
        Self {
            doc: EditorDocument::default(),
            history: History::new(settings.history_limit),
            settings,
            version: 0,
        }
    }

    /// Restore the empty initial document and drop all history
    pub fn reset(&mut self) {
        self.doc = EditorDocument::default();
        self.history.clear();
        self.version += 1;
        tracing::info!("Editor reset");
    }

    pub fn document(&self) -> &EditorDocument {
        &self.doc
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Current document version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn objects(&self) -> &[PlacedObject] {
        &self.doc.objects
    }

    pub fn object_count(&self) -> usize {
        self.doc.objects.len()
    }

    /// Get an object by ID
    pub fn get_object(&self, id: &str) -> Option<&PlacedObject> {
        self.doc.get(id)
    }

    pub fn mode(&self) -> EditorMode {
        self.doc.mode
    }

    pub fn selected_asset_type(&self) -> Option<&str> {
        self.doc.selected_asset_type()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.doc.selection
    }

    pub fn selected_ids(&self) -> &[ObjectId] {
        self.doc.selection.all()
    }

    pub fn active_id(&self) -> Option<&ObjectId> {
        self.doc.selection.active()
    }

    /// The active object, if any
    pub fn active_object(&self) -> Option<&PlacedObject> {
        self.active_id().and_then(|id| self.doc.get(id))
    }

    pub fn transform_mode(&self) -> TransformMode {
        self.doc.transform_mode
    }

    pub fn is_transforming(&self) -> bool {
        self.doc.is_transforming
    }

    /// Check whether an object is still under physics simulation
    pub fn is_dynamic(&self, id: &str) -> bool {
        self.doc.dynamic_object_ids.contains(id)
    }

    pub fn dynamic_ids(&self) -> &BTreeSet<ObjectId> {
        &self.doc.dynamic_object_ids
    }

    /// Bump version without recording history
    pub(crate) fn notify_mutated(&mut self) {
        self.version += 1;
    }

    /// Run a command through the history
    pub(crate) fn execute(&mut self, cmd: SceneCommand) {
        self.history.execute(cmd, &mut self.doc);
        self.version += 1;
    }
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new()
    }
}
