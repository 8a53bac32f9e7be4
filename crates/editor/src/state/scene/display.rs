//! Display helper functions for placed objects

use shared::PlacedObject;

use crate::catalog::AssetCatalog;

/// Get display name for an object: catalog name, or the raw asset type when
/// the catalog does not know it
pub fn object_display_name(object: &PlacedObject, catalog: &impl AssetCatalog) -> String {
    let name = catalog
        .lookup(&object.asset_type)
        .map_or(object.asset_type.as_str(), |asset| asset.name.as_str());
    format!("{} ({})", name, short_id(&object.id))
}

/// Get shortened ID (first 8 characters)
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}
