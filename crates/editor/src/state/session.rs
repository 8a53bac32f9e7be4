//! Transform gesture coordinator
//!
//! A gesture runs from gizmo mouse-down to mouse-up. While it is in progress
//! the dragged object is edited live through [`EditorStore::update_object`];
//! only the completed gesture is recorded, as a single transform command.

use shared::{EditorMode, ObjectId, Transform, TransformPatch};

use super::scene::EditorStore;

/// Pose and physics state captured when a gesture started
#[derive(Debug, Clone, PartialEq)]
struct Gesture {
    id: ObjectId,
    before: Transform,
    was_dynamic: bool,
}

/// Idle/dragging state machine for interactive transforms
#[derive(Debug, Clone, Default)]
pub struct TransformSession {
    gesture: Option<Gesture>,
}

impl TransformSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Object being dragged, if any
    pub fn dragged_id(&self) -> Option<&str> {
        self.gesture.as_ref().map(|g| g.id.as_str())
    }

    /// Start dragging the active object.
    ///
    /// Requires select mode and a live active object. Calling this while a
    /// gesture is in progress restarts it from the current pose.
    pub fn begin(&mut self, store: &mut EditorStore) -> bool {
        if store.mode() != EditorMode::Select {
            return false;
        }
        let Some(obj) = store.active_object() else {
            return false;
        };

        let gesture = Gesture {
            id: obj.id.clone(),
            before: obj.transform(),
            was_dynamic: store.is_dynamic(&obj.id),
        };
        tracing::debug!("Begin transform of {}", gesture.id);
        self.gesture = Some(gesture);
        store.set_transforming(true);
        true
    }

    /// True when the store moved on without this gesture: the drag flag was
    /// cleared or a different object became active.
    pub fn is_abandoned(&self, store: &EditorStore) -> bool {
        match &self.gesture {
            Some(gesture) => {
                !store.is_transforming() || store.active_id() != Some(&gesture.id)
            }
            None => false,
        }
    }

    /// Live update while dragging (not recorded). An abandoned gesture is
    /// dropped and the update refused.
    pub fn update(&mut self, store: &mut EditorStore, patch: &TransformPatch) -> bool {
        if self.is_abandoned(store) {
            self.gesture = None;
            return false;
        }
        match &self.gesture {
            Some(gesture) => store.update_object(&gesture.id, patch),
            None => false,
        }
    }

    /// Finish the gesture and record it. Returns whether a command was recorded.
    /// An abandoned gesture records nothing.
    pub fn end(&mut self, store: &mut EditorStore, label: &str) -> bool {
        let mut recorded = false;
        if self.is_abandoned(store) {
            self.gesture = None;
        }
        if let Some(gesture) = self.gesture.take() {
            let after = store.get_object(&gesture.id).map(|o| o.transform());
            if let Some(after) = after {
                recorded = store.commit_gesture(
                    &gesture.id,
                    gesture.before,
                    after,
                    label,
                    gesture.was_dynamic,
                );
            }
        }
        if store.is_transforming() {
            store.set_transforming(false);
        }
        recorded
    }

    /// Abandon the gesture and put the object back where it started
    pub fn cancel(&mut self, store: &mut EditorStore) {
        if let Some(gesture) = self.gesture.take() {
            store.update_object(&gesture.id, &TransformPatch::from(&gesture.before));
            tracing::debug!("Cancelled transform of {}", gesture.id);
        }
        if store.is_transforming() {
            store.set_transforming(false);
        }
    }
}
