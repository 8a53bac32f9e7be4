//! Selection operations

use shared::ObjectId;

use super::EditorStore;

impl EditorStore {
    /// Click selection.
    ///
    /// Non-additive: select exactly `id`, or clear the selection for `None`.
    /// Additive (Shift+click): toggle `id`. Ids that are not live are ignored.
    pub fn select_object(&mut self, id: Option<&str>, additive: bool) -> bool {
        let Some(id) = id else {
            if additive {
                return false;
            }
            self.clear_selection();
            return true;
        };

        if !self.doc.contains(id) {
            return false;
        }
        let previous = self.doc.selection.active().cloned();
        if additive {
            self.doc.selection.toggle(id.to_string());
        } else {
            self.doc.selection.select(id.to_string());
        }
        self.selection_changed(previous);
        true
    }

    /// Clear all selection
    pub fn clear_selection(&mut self) {
        let previous = self.doc.selection.active().cloned();
        self.doc.selection.clear();
        self.selection_changed(previous);
    }

    /// Select every object in document order; the last one becomes active
    pub fn select_all(&mut self) {
        let previous = self.doc.selection.active().cloned();
        let ids: Vec<_> = self.doc.objects.iter().map(|o| o.id.clone()).collect();
        self.doc.selection.set(ids);
        self.selection_changed(previous);
    }

    /// A new active object ends any drag of the previous one
    fn selection_changed(&mut self, previous_active: Option<ObjectId>) {
        if self.doc.selection.active() != previous_active.as_ref() {
            self.doc.is_transforming = false;
        }
        self.notify_mutated();
    }
}
