use wasm_bindgen::prelude::*;

use aquascape_editor_lib::catalog::CatalogMap;
use aquascape_editor_lib::command::{execute_json, CommandResponse};
use aquascape_editor_lib::harness::EditorHarness;
use shared::PlacedObject;

/// Editor instance owned by the browser host
#[wasm_bindgen]
pub struct EditorHandle {
    harness: EditorHarness,
}

#[wasm_bindgen]
impl EditorHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> EditorHandle {
        EditorHandle {
            harness: EditorHarness::new(),
        }
    }

    /// Run one JSON command and return the JSON response.
    /// Malformed commands come back as a failed response rather than a throw.
    pub fn execute(&mut self, command_json: &str) -> Result<String, JsError> {
        let response = execute_json(&mut self.harness, command_json).unwrap_or_else(|e| {
            CommandResponse {
                success: false,
                error: Some(e.to_string()),
                data: None,
            }
        });
        if let Some(error) = &response.error {
            web_sys::console::warn_1(&JsValue::from_str(error));
        }
        serde_json::to_string(&response).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Full editor document (objects, selection, mode, dynamic ids)
    pub fn document_json(&self) -> Result<String, JsError> {
        serde_json::to_string(self.harness.store.document())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Versioned scene envelope for persistence
    pub fn scene_json(&self) -> String {
        self.harness.export_scene_json()
    }

    /// Replace the document with a serialized scene; returns the object count
    pub fn load_scene(&mut self, text: &str) -> usize {
        self.harness.load_scene_json(text)
    }

    /// Install the asset catalog used for placement
    pub fn set_catalog(&mut self, catalog_json: &str) -> Result<usize, JsError> {
        let catalog =
            CatalogMap::from_json(catalog_json).map_err(|e| JsError::new(&e.to_string()))?;
        self.harness.catalog = catalog;
        Ok(self.harness.catalog.len())
    }

    pub fn can_undo(&self) -> bool {
        self.harness.store.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.harness.store.can_redo()
    }

    /// Changes on every mutation; hosts re-render when it moves
    pub fn version(&self) -> u64 {
        self.harness.store.version()
    }
}

impl Default for EditorHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap a JSON array of objects in the versioned scene envelope
#[wasm_bindgen]
pub fn serialize_scene(objects_json: &str) -> Result<String, JsError> {
    let objects: Vec<PlacedObject> =
        serde_json::from_str(objects_json).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(shared::serialize_scene(&objects))
}

/// Parse a scene (envelope or bare array) into a JSON array of valid objects
#[wasm_bindgen]
pub fn deserialize_scene(text: &str) -> Result<String, JsError> {
    serde_json::to_string(&shared::deserialize_scene(text)).map_err(|e| JsError::new(&e.to_string()))
}
