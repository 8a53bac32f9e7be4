//! Asset catalog lookup
//!
//! The catalog content lives outside the editor; the document only stores
//! `asset_type` keys. Lookups are used to compute placement geometry, and an
//! unknown key is never an error at the document level.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shared::Vec3;

use crate::error::PersistenceError;

/// Collision/fallback shape of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceableShape {
    #[default]
    Box,
    Sphere,
    Cylinder,
}

/// Catalog grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    Rocks,
    Wood,
    Plants,
    Equipment,
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDefinition {
    #[serde(rename = "type")]
    pub asset_type: String,
    pub name: String,
    pub category: AssetCategory,
    pub shape: PlaceableShape,
    pub default_size: Vec3,
    #[serde(default)]
    pub model_url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub color: String,
}

impl AssetDefinition {
    /// Distance from the object's origin to the bottom of its bounds
    pub fn half_height(&self) -> f64 {
        match self.shape {
            PlaceableShape::Sphere => self.default_size[0] / 2.0,
            PlaceableShape::Box | PlaceableShape::Cylinder => self.default_size[1] / 2.0,
        }
    }
}

/// Read access to asset definitions
pub trait AssetCatalog {
    fn lookup(&self, asset_type: &str) -> Option<&AssetDefinition>;
}

/// Catalog backed by a map, loadable from a JSON array of definitions
#[derive(Debug, Clone, Default)]
pub struct CatalogMap {
    assets: HashMap<String, AssetDefinition>,
}

impl CatalogMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a definition
    pub fn insert(&mut self, asset: AssetDefinition) {
        self.assets.insert(asset.asset_type.clone(), asset);
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Parse a JSON array of definitions
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let assets: Vec<AssetDefinition> = serde_json::from_str(json)?;
        Ok(assets.into_iter().collect())
    }

    /// Load a JSON catalog file
    pub fn load(path: &Path) -> Result<Self, PersistenceError> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }
}

impl FromIterator<AssetDefinition> for CatalogMap {
    fn from_iter<I: IntoIterator<Item = AssetDefinition>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for asset in iter {
            catalog.insert(asset);
        }
        catalog
    }
}

impl AssetCatalog for CatalogMap {
    fn lookup(&self, asset_type: &str) -> Option<&AssetDefinition> {
        self.assets.get(asset_type)
    }
}
