//! JSON command protocol for hosts driving the editor.
//!
//! Every document, selection, gesture and persistence operation is reachable
//! as a `{"command": "<name>", ...}` object.

use serde::{Deserialize, Serialize};
use shared::{EditorMode, ObjectId, PlacedObject, Transform, TransformMode, TransformPatch, Vec3};

use crate::error::CommandError;
use crate::harness::EditorHarness;
use crate::id::new_id;
use crate::state::object_display_name;

fn default_label() -> String {
    "Transform".to_string()
}

/// A command a host can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum HostCommand {
    /// Restore the empty initial document.
    Reset,
    SetMode {
        mode: EditorMode,
    },
    /// Enter place mode with a catalog asset.
    SelectAsset {
        asset_type: String,
    },
    SetTransformMode {
        mode: TransformMode,
    },
    SetTransforming {
        transforming: bool,
    },
    SetObjectDynamic {
        id: ObjectId,
        dynamic: bool,
    },
    /// Add an object; a fresh id is generated when none is given.
    AddObject {
        #[serde(default)]
        id: Option<ObjectId>,
        asset_type: String,
        position: Vec3,
        #[serde(default)]
        rotation: Option<Vec3>,
        #[serde(default)]
        scale: Option<Vec3>,
    },
    /// Place-mode click on the floor.
    PlaceAt {
        point: Vec3,
        #[serde(default)]
        yaw: f64,
    },
    RemoveObjects {
        ids: Vec<ObjectId>,
    },
    /// Remove all selected objects.
    DeleteSelection,
    DuplicateObjects {
        ids: Vec<ObjectId>,
    },
    DuplicateSelection,
    /// Replace the whole document (not undoable).
    SetObjects {
        objects: Vec<PlacedObject>,
    },
    SelectObject {
        #[serde(default)]
        id: Option<ObjectId>,
        #[serde(default)]
        additive: bool,
    },
    ClearSelection,
    SelectAll,
    /// Live, unrecorded transform edit.
    UpdateObject {
        id: ObjectId,
        #[serde(default)]
        position: Option<Vec3>,
        #[serde(default)]
        rotation: Option<Vec3>,
        #[serde(default)]
        scale: Option<Vec3>,
    },
    /// Record a completed gesture from explicit poses.
    CommitTransform {
        id: ObjectId,
        before: Transform,
        after: Transform,
        #[serde(default = "default_label")]
        label: String,
    },
    /// Start dragging the active object.
    BeginTransform,
    UpdateTransform {
        #[serde(default)]
        position: Option<Vec3>,
        #[serde(default)]
        rotation: Option<Vec3>,
        #[serde(default)]
        scale: Option<Vec3>,
    },
    EndTransform {
        #[serde(default = "default_label")]
        label: String,
    },
    CancelTransform,
    /// Physics reports an object at rest.
    Settle {
        id: ObjectId,
        position: Vec3,
        rotation: Vec3,
    },
    Undo,
    Redo,
    ClearHistory,
    /// List objects and editor state.
    Inspect,
    ExportScene,
    /// Load a serialized scene (replaces the document).
    LoadScene {
        scene_json: String,
    },
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

fn patch(position: Option<Vec3>, rotation: Option<Vec3>, scale: Option<Vec3>) -> TransformPatch {
    TransformPatch {
        position,
        rotation,
        scale,
    }
}

fn inspect(harness: &EditorHarness) -> serde_json::Value {
    let store = &harness.store;
    let objects: Vec<serde_json::Value> = store
        .objects()
        .iter()
        .map(|obj| {
            serde_json::json!({
                "id": obj.id,
                "name": object_display_name(obj, &harness.catalog),
                "asset_type": obj.asset_type,
                "position": obj.position,
                "rotation": obj.rotation,
                "scale": obj.scale,
                "dynamic": store.is_dynamic(&obj.id),
                "selected": store.selection().is_selected(&obj.id),
            })
        })
        .collect();
    serde_json::json!({
        "object_count": objects.len(),
        "objects": objects,
        "mode": store.mode(),
        "selected_asset_type": store.selected_asset_type(),
        "selected_ids": store.selected_ids(),
        "active_id": store.active_id(),
        "transform_mode": store.transform_mode(),
        "is_transforming": store.is_transforming(),
        "dragging": harness.session.is_dragging(),
        "undo_labels": store.undo_labels(),
        "redo_labels": store.redo_labels(),
        "redo_count": store.redo_len(),
        "version": store.version(),
    })
}

/// Execute a single command on the harness.
///
/// A drag the command left without a backing store state (a selection or
/// mode change, an undo) is cancelled afterwards.
pub fn execute_command(harness: &mut EditorHarness, cmd: HostCommand) -> CommandResponse {
    let response = dispatch(harness, cmd);
    harness.sync_session();
    response
}

fn dispatch(harness: &mut EditorHarness, cmd: HostCommand) -> CommandResponse {
    let store = &mut harness.store;
    match cmd {
        HostCommand::Reset => {
            harness.clear();
            CommandResponse::ok()
        }

        HostCommand::SetMode { mode } => {
            store.set_mode(mode);
            CommandResponse::ok()
        }

        HostCommand::SelectAsset { asset_type } => {
            store.select_asset(&asset_type);
            CommandResponse::ok()
        }

        HostCommand::SetTransformMode { mode } => {
            store.set_transform_mode(mode);
            CommandResponse::ok()
        }

        HostCommand::SetTransforming { transforming } => {
            store.set_transforming(transforming);
            CommandResponse::ok()
        }

        HostCommand::SetObjectDynamic { id, dynamic } => {
            let found = store.set_object_dynamic(&id, dynamic);
            CommandResponse::ok_with_data(serde_json::json!({ "found": found }))
        }

        HostCommand::AddObject {
            id,
            asset_type,
            position,
            rotation,
            scale,
        } => {
            let mut object = PlacedObject::new(id.unwrap_or_else(new_id), asset_type, position);
            object.apply_patch(&patch(None, rotation, scale));
            let id = object.id.clone();
            if store.add_object(object) {
                CommandResponse::ok_with_data(serde_json::json!({ "id": id }))
            } else {
                CommandResponse::err(format!("Object id already exists: {id}"))
            }
        }

        HostCommand::PlaceAt { point, yaw } => {
            let id = store.place_selected_asset(&harness.catalog, point, yaw);
            CommandResponse::ok_with_data(serde_json::json!({ "id": id }))
        }

        HostCommand::RemoveObjects { ids } => {
            let removed = store.remove_objects(&ids);
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        HostCommand::DeleteSelection => {
            let removed = store.remove_selected();
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        HostCommand::DuplicateObjects { ids } => {
            let ids = store.duplicate_objects(&ids);
            CommandResponse::ok_with_data(serde_json::json!({ "ids": ids }))
        }

        HostCommand::DuplicateSelection => {
            let ids = store.duplicate_selected();
            CommandResponse::ok_with_data(serde_json::json!({ "ids": ids }))
        }

        HostCommand::SetObjects { objects } => {
            harness.session.cancel(store);
            store.set_objects(objects);
            CommandResponse::ok_with_data(serde_json::json!({ "object_count": store.object_count() }))
        }

        HostCommand::SelectObject { id, additive } => {
            let changed = store.select_object(id.as_deref(), additive);
            CommandResponse::ok_with_data(serde_json::json!({
                "changed": changed,
                "selected": store.selected_ids(),
            }))
        }

        HostCommand::ClearSelection => {
            store.clear_selection();
            CommandResponse::ok()
        }

        HostCommand::SelectAll => {
            store.select_all();
            CommandResponse::ok_with_data(serde_json::json!({ "selected": store.selected_ids() }))
        }

        HostCommand::UpdateObject {
            id,
            position,
            rotation,
            scale,
        } => {
            let found = store.update_object(&id, &patch(position, rotation, scale));
            CommandResponse::ok_with_data(serde_json::json!({ "found": found }))
        }

        HostCommand::CommitTransform {
            id,
            before,
            after,
            label,
        } => {
            let recorded = store.commit_transform(&id, before, after, &label);
            CommandResponse::ok_with_data(serde_json::json!({ "recorded": recorded }))
        }

        HostCommand::BeginTransform => {
            if harness.session.begin(store) {
                CommandResponse::ok_with_data(serde_json::json!({ "id": harness.session.dragged_id() }))
            } else {
                CommandResponse::err("No active object to transform")
            }
        }

        HostCommand::UpdateTransform {
            position,
            rotation,
            scale,
        } => {
            let applied = harness.session.update(store, &patch(position, rotation, scale));
            CommandResponse::ok_with_data(serde_json::json!({ "applied": applied }))
        }

        HostCommand::EndTransform { label } => {
            let recorded = harness.session.end(store, &label);
            CommandResponse::ok_with_data(serde_json::json!({ "recorded": recorded }))
        }

        HostCommand::CancelTransform => {
            harness.session.cancel(store);
            CommandResponse::ok()
        }

        HostCommand::Settle {
            id,
            position,
            rotation,
        } => {
            let settled = store.settle_object(&id, position, rotation);
            CommandResponse::ok_with_data(serde_json::json!({ "settled": settled }))
        }

        HostCommand::Undo => {
            let success = harness.undo();
            CommandResponse::ok_with_data(serde_json::json!({ "undone": success }))
        }

        HostCommand::Redo => {
            let success = harness.redo();
            CommandResponse::ok_with_data(serde_json::json!({ "redone": success }))
        }

        HostCommand::ClearHistory => {
            store.clear_history();
            CommandResponse::ok()
        }

        HostCommand::Inspect => CommandResponse::ok_with_data(inspect(harness)),

        HostCommand::ExportScene => {
            let json = harness.export_scene_json();
            CommandResponse::ok_with_data(serde_json::json!({ "scene_json": json }))
        }

        HostCommand::LoadScene { scene_json } => {
            let count = harness.load_scene_json(&scene_json);
            CommandResponse::ok_with_data(serde_json::json!({ "object_count": count }))
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(harness: &mut EditorHarness, json: &str) -> Result<CommandResponse, CommandError> {
    let cmd: HostCommand = serde_json::from_str(json)?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut EditorHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, CommandError> {
    let cmds: Vec<HostCommand> = serde_json::from_str(json)?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}
