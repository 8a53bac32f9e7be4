use serde::Serialize;
use shared::ObjectId;

/// Object selection state (supports multi-select)
///
/// The active object is always one of the selected ids, and is present
/// exactly when the selection is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    /// Selected object IDs (in order of selection)
    #[serde(rename = "selectedObjectIds")]
    selected: Vec<ObjectId>,
    /// Object whose properties are shown in detail
    #[serde(rename = "activeObjectId")]
    active: Option<ObjectId>,
}

impl SelectionState {
    /// All selected objects
    pub fn all(&self) -> &[ObjectId] {
        &self.selected
    }

    /// Active object
    pub fn active(&self) -> Option<&ObjectId> {
        self.active.as_ref()
    }

    /// Check if an object is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Number of selected objects
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Select a single object (clears previous selection)
    pub fn select(&mut self, id: ObjectId) {
        self.selected.clear();
        self.selected.push(id.clone());
        self.active = Some(id);
    }

    /// Toggle selection (Shift+click behavior)
    ///
    /// An added id becomes active. Removing the active id hands the role to
    /// the most recently selected remaining id.
    pub fn toggle(&mut self, id: ObjectId) {
        if let Some(pos) = self.selected.iter().position(|s| s == &id) {
            self.selected.remove(pos);
            if self.active.as_ref() == Some(&id) {
                self.active = self.selected.last().cloned();
            }
        } else {
            self.selected.push(id.clone());
            self.active = Some(id);
        }
    }

    /// Replace the selection with `ids` (duplicates dropped); the last one becomes active
    pub fn set(&mut self, ids: impl IntoIterator<Item = ObjectId>) {
        self.selected.clear();
        for id in ids {
            if !self.selected.contains(&id) {
                self.selected.push(id);
            }
        }
        self.active = self.selected.last().cloned();
    }

    /// Keep only ids matching `keep`, reassigning the active id if it was dropped
    pub fn retain(&mut self, mut keep: impl FnMut(&ObjectId) -> bool) {
        self.selected.retain(|id| keep(id));
        let active_kept = self
            .active
            .as_ref()
            .is_some_and(|a| self.selected.contains(a));
        if !active_kept {
            self.active = self.selected.last().cloned();
        }
    }

    /// Clear all selection
    pub fn clear(&mut self) {
        self.selected.clear();
        self.active = None;
    }
}
