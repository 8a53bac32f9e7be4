//! Object CRUD operations

use std::collections::HashSet;

use shared::{EditorMode, ObjectId, PlacedObject, TransformPatch, Vec3};

use super::commands::{RemovedObject, SceneCommand, UiSnapshot};
use super::{EditorDocument, EditorStore};
use crate::catalog::AssetCatalog;
use crate::id::new_id;

impl EditorStore {
    /// Add an object, select it exclusively and hand it to the physics simulation.
    /// Returns false (and records nothing) if the id is already in use.
    pub fn add_object(&mut self, object: PlacedObject) -> bool {
        if self.doc.contains(&object.id) {
            tracing::warn!("Add: object id {} already exists", object.id);
            return false;
        }

        let ui_before = UiSnapshot::capture(&self.doc);
        self.execute(SceneCommand::Place { object, ui_before });
        true
    }

    /// Instantiate the selected asset at a floor point (place-mode click).
    ///
    /// Outside place mode the click deselects instead. Unknown asset types
    /// place nothing.
    pub fn place_selected_asset(
        &mut self,
        catalog: &impl AssetCatalog,
        point: Vec3,
        yaw: f64,
    ) -> Option<ObjectId> {
        let asset_type = match (self.doc.mode, self.doc.selected_asset_type.clone()) {
            (EditorMode::Place, Some(asset_type)) => asset_type,
            _ => {
                self.clear_selection();
                return None;
            }
        };

        let Some(asset) = catalog.lookup(&asset_type) else {
            tracing::warn!("Place: unknown asset type {asset_type}");
            return None;
        };

        let [x, y, z] = point;
        let lift = asset.half_height() + self.settings.placement_clearance;
        let mut object = PlacedObject::new(new_id(), asset_type, [x, y + lift, z]);
        object.rotation = [0.0, yaw, 0.0];

        let id = object.id.clone();
        self.add_object(object).then_some(id)
    }

    /// Remove a single object
    pub fn remove_object(&mut self, id: &str) -> bool {
        self.remove_objects(&[id.to_string()])
    }

    /// Remove every object whose id is in `ids`.
    /// Returns false (and records nothing) if none of them is live.
    pub fn remove_objects(&mut self, ids: &[ObjectId]) -> bool {
        let targets: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let removed: Vec<RemovedObject> = self
            .doc
            .objects
            .iter()
            .enumerate()
            .filter(|(_, o)| targets.contains(o.id.as_str()))
            .map(|(index, o)| RemovedObject {
                index,
                object: o.clone(),
                was_dynamic: self.doc.dynamic_object_ids.contains(&o.id),
            })
            .collect();

        if removed.is_empty() {
            return false;
        }

        let selection_before = self.doc.selection.clone();
        self.execute(SceneCommand::Delete {
            removed,
            selection_before,
        });
        true
    }

    /// Remove all selected objects (Delete key)
    pub fn remove_selected(&mut self) -> bool {
        let ids = self.doc.selection.all().to_vec();
        self.remove_objects(&ids)
    }

    /// Copy the listed objects with fresh ids, offset horizontally, and select
    /// the copies. Returns the new ids in creation order (empty if nothing matched).
    pub fn duplicate_objects(&mut self, ids: &[ObjectId]) -> Vec<ObjectId> {
        let targets: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let offset = self.settings.duplicate_offset;
        let copies: Vec<PlacedObject> = self
            .doc
            .objects
            .iter()
            .filter(|o| targets.contains(o.id.as_str()))
            .map(|o| {
                let [x, y, z] = o.position;
                PlacedObject {
                    id: new_id(),
                    position: [x + offset, y, z + offset],
                    ..o.clone()
                }
            })
            .collect();

        if copies.is_empty() {
            return Vec::new();
        }

        let new_ids = copies.iter().map(|c| c.id.clone()).collect();
        let ui_before = UiSnapshot::capture(&self.doc);
        self.execute(SceneCommand::Duplicate { copies, ui_before });
        new_ids
    }

    /// Duplicate all selected objects
    pub fn duplicate_selected(&mut self) -> Vec<ObjectId> {
        let ids = self.doc.selection.all().to_vec();
        self.duplicate_objects(&ids)
    }

    /// Replace the whole document (external load).
    ///
    /// Selection, mode and physics tracking are reset and history is dropped,
    /// since the previous entries refer to a different set of objects.
    /// Repeated ids keep their first occurrence.
    pub fn set_objects(&mut self, objects: Vec<PlacedObject>) {
        let total = objects.len();
        let mut seen = HashSet::new();
        let objects: Vec<PlacedObject> = objects
            .into_iter()
            .filter(|o| seen.insert(o.id.clone()))
            .collect();
        if objects.len() != total {
            tracing::warn!("Load: dropped {} objects with repeated ids", total - objects.len());
        }

        self.doc = EditorDocument {
            objects,
            transform_mode: self.doc.transform_mode,
            ..EditorDocument::default()
        };
        self.history.clear();
        self.notify_mutated();
        tracing::info!("Loaded {} objects", self.doc.objects.len());
    }

    /// Live, unrecorded transform edit used while dragging
    pub fn update_object(&mut self, id: &str, patch: &TransformPatch) -> bool {
        let Some(obj) = self.doc.get_mut(id) else {
            return false;
        };
        obj.apply_patch(patch);
        self.notify_mutated();
        true
    }
}
