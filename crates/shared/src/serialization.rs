//! Scene serialization
//!
//! The persisted form is a versioned envelope `{"version": 1, "objects": [...]}`.
//! Loading is lenient: a bare array of objects is accepted as well, malformed
//! elements are dropped individually, and any unreadable input yields an
//! empty scene instead of an error.

use serde::Serialize;
use serde_json::Value;

use crate::PlacedObject;

/// Version written into every serialized scene
pub const SCENE_FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SceneEnvelopeRef<'a> {
    version: u32,
    objects: &'a [PlacedObject],
}

/// Serialize objects into the versioned envelope
pub fn serialize_scene(objects: &[PlacedObject]) -> String {
    let envelope = SceneEnvelopeRef {
        version: SCENE_FORMAT_VERSION,
        objects,
    };
    serde_json::to_string(&envelope).unwrap_or_default()
}

/// Parse a serialized scene. Never fails: unreadable input gives an empty list.
pub fn deserialize_scene(data: &str) -> Vec<PlacedObject> {
    let parsed: Value = match serde_json::from_str(data) {
        Ok(value) => value,
        Err(_) => return Vec::new(),
    };

    match parsed {
        Value::Array(items) => collect_valid(items),
        Value::Object(mut map) => match map.remove("objects") {
            Some(Value::Array(items)) => collect_valid(items),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn collect_valid(items: Vec<Value>) -> Vec<PlacedObject> {
    items.into_iter().filter_map(parse_object).collect()
}

/// Accepts only JSON objects with string `id`/`assetType` and exact
/// three-number `position`/`rotation`/`scale` arrays.
fn parse_object(value: Value) -> Option<PlacedObject> {
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value).ok()
}
