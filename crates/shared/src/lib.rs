use serde::{Deserialize, Serialize};

pub mod serialization;

pub use serialization::{deserialize_scene, serialize_scene, SCENE_FORMAT_VERSION};

/// Unique identifier of a placed object
pub type ObjectId = String;

/// Three-component vector (position, Euler XYZ rotation in radians, or scale)
pub type Vec3 = [f64; 3];

/// Editor interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    /// Manipulate existing objects
    #[default]
    Select,
    /// Next click instantiates the selected asset type
    Place,
}

/// Active gizmo operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

/// Object transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub fn new() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
        }
    }

    /// Identity rotation and scale at the given position
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::new()
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

/// Sparse transform update. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vec3>,
}

impl TransformPatch {
    pub fn position(position: Vec3) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn rotation(rotation: Vec3) -> Self {
        Self {
            rotation: Some(rotation),
            ..Self::default()
        }
    }

    pub fn scale(scale: Vec3) -> Self {
        Self {
            scale: Some(scale),
            ..Self::default()
        }
    }

    /// True when the patch carries no fields
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.rotation.is_none() && self.scale.is_none()
    }
}

impl From<&Transform> for TransformPatch {
    fn from(t: &Transform) -> Self {
        Self {
            position: Some(t.position),
            rotation: Some(t.rotation),
            scale: Some(t.scale),
        }
    }
}

/// An asset instance placed in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedObject {
    pub id: ObjectId,
    /// Key into the asset catalog. Unknown keys are tolerated.
    pub asset_type: String,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl PlacedObject {
    /// Create an object with identity rotation and unit scale
    pub fn new(id: impl Into<ObjectId>, asset_type: impl Into<String>, position: Vec3) -> Self {
        Self {
            id: id.into(),
            asset_type: asset_type.into(),
            position,
            rotation: [0.0; 3],
            scale: [1.0; 3],
        }
    }

    /// Snapshot of position, rotation and scale
    pub fn transform(&self) -> Transform {
        Transform {
            position: self.position,
            rotation: self.rotation,
            scale: self.scale,
        }
    }

    pub fn set_transform(&mut self, transform: &Transform) {
        self.position = transform.position;
        self.rotation = transform.rotation;
        self.scale = transform.scale;
    }

    /// Apply the fields present in `patch`
    pub fn apply_patch(&mut self, patch: &TransformPatch) {
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(scale) = patch.scale {
            self.scale = scale;
        }
    }
}
