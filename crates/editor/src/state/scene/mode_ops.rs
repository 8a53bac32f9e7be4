//! Editor mode, gizmo and physics-tracking state (never recorded in history)

use shared::{EditorMode, TransformMode};

use super::EditorStore;

impl EditorStore {
    /// Switch between select and place mode
    pub fn set_mode(&mut self, mode: EditorMode) {
        self.doc.mode = mode;
        if mode == EditorMode::Select {
            self.doc.selected_asset_type = None;
        }
        self.doc.is_transforming = false;
        self.notify_mutated();
    }

    /// Arm placement of a catalog asset
    pub fn select_asset(&mut self, asset_type: &str) {
        self.doc.mode = EditorMode::Place;
        self.doc.selected_asset_type = Some(asset_type.to_string());
        self.doc.selection.clear();
        self.doc.is_transforming = false;
        self.notify_mutated();
    }

    pub fn set_transform_mode(&mut self, mode: TransformMode) {
        self.doc.transform_mode = mode;
        self.notify_mutated();
    }

    /// Mark whether a live drag is in progress
    pub fn set_transforming(&mut self, transforming: bool) {
        self.doc.is_transforming = transforming;
        self.notify_mutated();
    }

    /// Hand an object to (or take it from) the physics simulation.
    /// Unknown ids are ignored.
    pub fn set_object_dynamic(&mut self, id: &str, dynamic: bool) -> bool {
        if !self.doc.contains(id) {
            return false;
        }
        let changed = if dynamic {
            self.doc.dynamic_object_ids.insert(id.to_string())
        } else {
            self.doc.dynamic_object_ids.remove(id)
        };
        if changed {
            self.notify_mutated();
        }
        true
    }
}
