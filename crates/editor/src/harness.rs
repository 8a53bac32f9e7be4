//! Headless harness for programmatic scene manipulation.
//!
//! Bundles the document store, the transform session and an asset catalog so
//! hosts (CLI scripts, the browser bridge, tests) can drive the editor the way
//! the interactive UI does.

use shared::{EditorMode, ObjectId, PlacedObject, TransformPatch, Vec3};

use crate::catalog::CatalogMap;
use crate::state::{EditorSettings, EditorStore, TransformSession};

/// Headless editor: store, gesture session and catalog
#[derive(Debug, Clone, Default)]
pub struct EditorHarness {
    pub store: EditorStore,
    pub session: TransformSession,
    pub catalog: CatalogMap,
}

impl EditorHarness {
    /// Create a new empty harness with an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: CatalogMap) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn with_settings(settings: EditorSettings) -> Self {
        Self {
            store: EditorStore::with_settings(settings),
            ..Self::default()
        }
    }

    // ── Scene manipulation ────────────────────────────────────

    /// Arm an asset and click the floor at `point`
    pub fn place(&mut self, asset_type: &str, point: Vec3) -> Option<ObjectId> {
        self.store.select_asset(asset_type);
        self.store.place_selected_asset(&self.catalog, point, 0.0)
    }

    /// Add an object directly, returning its id if it was added
    pub fn add(&mut self, object: PlacedObject) -> Option<ObjectId> {
        let id = object.id.clone();
        self.store.add_object(object).then_some(id)
    }

    /// Change the selection. A drag of an object that stops being active is
    /// cancelled and the object put back where the drag started.
    pub fn select(&mut self, id: Option<&str>, additive: bool) -> bool {
        let changed = self.store.select_object(id, additive);
        self.sync_session();
        changed
    }

    /// Switch editor mode; any drag in progress is cancelled
    pub fn set_mode(&mut self, mode: EditorMode) {
        self.store.set_mode(mode);
        self.sync_session();
    }

    /// Cancel a gesture the store no longer backs (drag flag cleared or a
    /// different object active)
    pub fn sync_session(&mut self) {
        if self.session.is_abandoned(&self.store) {
            self.session.cancel(&mut self.store);
        }
    }

    /// Select `id` and drag it through `steps` live updates as one gesture.
    /// Returns whether the gesture was recorded.
    pub fn drag(&mut self, id: &str, steps: &[TransformPatch], label: &str) -> bool {
        if !self.select(Some(id), false) || !self.session.begin(&mut self.store) {
            return false;
        }
        for patch in steps {
            self.session.update(&mut self.store, patch);
        }
        self.session.end(&mut self.store, label)
    }

    /// Drag `id` straight to `position` in one step
    pub fn move_to(&mut self, id: &str, position: Vec3) -> bool {
        self.drag(id, &[TransformPatch::position(position)], "Move")
    }

    /// Physics settle report at the object's current rotation
    pub fn settle(&mut self, id: &str, position: Vec3) -> bool {
        let Some(rotation) = self.store.get_object(id).map(|o| o.rotation) else {
            return false;
        };
        self.store.settle_object(id, position, rotation)
    }

    /// Settle every dynamic object where it currently is
    pub fn settle_all(&mut self) -> usize {
        let resting: Vec<(ObjectId, Vec3)> = self
            .store
            .objects()
            .iter()
            .filter(|o| self.store.is_dynamic(&o.id))
            .map(|o| (o.id.clone(), o.position))
            .collect();
        resting
            .into_iter()
            .filter(|(id, position)| self.settle(id, *position))
            .count()
    }

    /// Delete by ID
    pub fn delete(&mut self, id: &str) -> bool {
        self.store.remove_object(id)
    }

    pub fn undo(&mut self) -> bool {
        self.session.cancel(&mut self.store);
        self.store.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.session.cancel(&mut self.store);
        self.store.redo()
    }

    /// Reset document, history and any gesture in progress
    pub fn clear(&mut self) {
        self.session = TransformSession::new();
        self.store.reset();
    }

    /// Load a scene (replaces current). Returns the number of objects loaded.
    pub fn load_scene_json(&mut self, json: &str) -> usize {
        self.session = TransformSession::new();
        self.store.load_scene_json(json)
    }

    /// Export the current scene as JSON
    pub fn export_scene_json(&self) -> String {
        self.store.export_scene_json()
    }

    // ── Queries ────────────────────────────────────────────────

    pub fn object_count(&self) -> usize {
        self.store.object_count()
    }

    pub fn dynamic_count(&self) -> usize {
        self.store.dynamic_ids().len()
    }

    pub fn position_of(&self, id: &str) -> Option<Vec3> {
        self.store.get_object(id).map(|o| o.position)
    }
}
