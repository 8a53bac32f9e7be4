//! Factory functions for creating test data.
//!
//! Provides convenient helpers to construct `PlacedObject`s, transforms and
//! asset catalogs used in tests and by scripted sessions.

use shared::{PlacedObject, Transform, Vec3};

use crate::catalog::{AssetCategory, AssetDefinition, CatalogMap, PlaceableShape};

// ── Object factories ────────────────────────────────────────────

/// Small rock at `[x, 1, 0]`.
pub fn rock(id: &str, x: f64) -> PlacedObject {
    rock_at(id, [x, 1.0, 0.0])
}

/// Small rock at a specific position.
pub fn rock_at(id: &str, position: Vec3) -> PlacedObject {
    PlacedObject::new(id, "rock_small", position)
}

/// Object of any asset type with a full transform.
pub fn object_with(id: &str, asset_type: &str, transform: &Transform) -> PlacedObject {
    let mut obj = PlacedObject::new(id, asset_type, transform.position);
    obj.set_transform(transform);
    obj
}

// ── Catalog factories ───────────────────────────────────────────

/// Minimal asset definition.
pub fn asset(asset_type: &str, shape: PlaceableShape, default_size: Vec3) -> AssetDefinition {
    AssetDefinition {
        asset_type: asset_type.to_string(),
        name: asset_type.to_string(),
        category: AssetCategory::Rocks,
        shape,
        default_size,
        model_url: String::new(),
        thumbnail_url: String::new(),
        color: String::new(),
    }
}

/// Small catalog covering each placeable shape.
pub fn sample_catalog() -> CatalogMap {
    [
        AssetDefinition {
            name: "Small Rock".to_string(),
            ..asset("rock_small", PlaceableShape::Box, [1.1, 1.05, 1.1])
        },
        AssetDefinition {
            name: "Driftwood".to_string(),
            category: AssetCategory::Wood,
            ..asset("driftwood", PlaceableShape::Cylinder, [0.5, 1.05, 0.5])
        },
        AssetDefinition {
            name: "Anubias".to_string(),
            category: AssetCategory::Plants,
            ..asset("anubias", PlaceableShape::Sphere, [1.0, 1.0, 1.0])
        },
        AssetDefinition {
            name: "Heater".to_string(),
            category: AssetCategory::Equipment,
            ..asset("heater", PlaceableShape::Cylinder, [0.32, 1.0, 0.32])
        },
    ]
    .into_iter()
    .collect()
}
