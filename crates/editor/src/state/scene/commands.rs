//! Undoable scene commands
//!
//! Each variant carries the data it needs to apply and revert itself, captured
//! before it first ran. Every command leaves `is_transforming` false on both
//! apply and revert so the transient drag flag never drifts through history.

use std::collections::HashSet;

use shared::{EditorMode, ObjectId, PlacedObject, Transform};

use super::EditorDocument;
use crate::state::history::Reversible;
use crate::state::selection::SelectionState;

/// Selection and mode as they were before a command ran
#[derive(Debug, Clone, PartialEq)]
pub struct UiSnapshot {
    pub selection: SelectionState,
    pub mode: EditorMode,
    pub selected_asset_type: Option<String>,
}

impl UiSnapshot {
    pub fn capture(doc: &EditorDocument) -> Self {
        Self {
            selection: doc.selection.clone(),
            mode: doc.mode,
            selected_asset_type: doc.selected_asset_type.clone(),
        }
    }

    fn restore(&self, doc: &mut EditorDocument) {
        doc.selection = self.selection.clone();
        doc.mode = self.mode;
        doc.selected_asset_type = self.selected_asset_type.clone();
        doc.prune_stale_ids();
    }
}

/// An object removed by a delete, with what is needed to put it back
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedObject {
    /// Index in the object list before removal
    pub index: usize,
    pub object: PlacedObject,
    pub was_dynamic: bool,
}

/// A recorded, reversible document change
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    /// A new object dropped into the scene
    Place {
        object: PlacedObject,
        ui_before: UiSnapshot,
    },
    /// Objects removed from the scene, in ascending original index order
    Delete {
        removed: Vec<RemovedObject>,
        selection_before: SelectionState,
    },
    /// Offset copies appended to the scene
    Duplicate {
        copies: Vec<PlacedObject>,
        ui_before: UiSnapshot,
    },
    /// One completed transform gesture
    Transform {
        id: ObjectId,
        before: Transform,
        after: Transform,
        /// Dynamic flag of the object when the gesture started
        was_dynamic: bool,
        label: String,
    },
}

impl Reversible<EditorDocument> for SceneCommand {
    fn name(&self) -> &str {
        match self {
            SceneCommand::Place { .. } => "Place",
            SceneCommand::Delete { .. } => "Delete",
            SceneCommand::Duplicate { .. } => "Duplicate",
            SceneCommand::Transform { label, .. } => label.as_str(),
        }
    }

    fn apply(&self, doc: &mut EditorDocument) {
        match self {
            SceneCommand::Place { object, .. } => {
                doc.objects.push(object.clone());
                doc.selection.select(object.id.clone());
                doc.mode = EditorMode::Select;
                doc.selected_asset_type = None;
                doc.dynamic_object_ids.insert(object.id.clone());
            }
            SceneCommand::Delete { removed, .. } => {
                let ids: HashSet<&str> = removed.iter().map(|r| r.object.id.as_str()).collect();
                doc.objects.retain(|o| !ids.contains(o.id.as_str()));
                doc.selection.retain(|id| !ids.contains(id.as_str()));
                doc.dynamic_object_ids.retain(|id| !ids.contains(id.as_str()));
            }
            SceneCommand::Duplicate { copies, .. } => {
                doc.objects.extend(copies.iter().cloned());
                doc.selection.set(copies.iter().map(|c| c.id.clone()));
                doc.mode = EditorMode::Select;
                doc.selected_asset_type = None;
                doc.dynamic_object_ids.extend(copies.iter().map(|c| c.id.clone()));
            }
            SceneCommand::Transform { id, after, .. } => {
                if let Some(obj) = doc.get_mut(id) {
                    obj.set_transform(after);
                }
                doc.dynamic_object_ids.remove(id);
            }
        }
        doc.is_transforming = false;
    }

    fn revert(&self, doc: &mut EditorDocument) {
        match self {
            SceneCommand::Place { object, ui_before } => {
                doc.remove_by_id(&object.id);
                ui_before.restore(doc);
            }
            SceneCommand::Delete {
                removed,
                selection_before,
            } => {
                for r in removed {
                    let index = r.index.min(doc.objects.len());
                    doc.objects.insert(index, r.object.clone());
                    if r.was_dynamic {
                        doc.dynamic_object_ids.insert(r.object.id.clone());
                    }
                }
                doc.selection = selection_before.clone();
                doc.prune_stale_ids();
            }
            SceneCommand::Duplicate { copies, ui_before } => {
                for copy in copies {
                    doc.remove_by_id(&copy.id);
                }
                ui_before.restore(doc);
            }
            SceneCommand::Transform {
                id,
                before,
                was_dynamic,
                ..
            } => {
                if let Some(obj) = doc.get_mut(id) {
                    obj.set_transform(before);
                    if *was_dynamic {
                        doc.dynamic_object_ids.insert(id.clone());
                    } else {
                        doc.dynamic_object_ids.remove(id);
                    }
                }
            }
        }
        doc.is_transforming = false;
    }
}
