//! Transform commit and physics settle

use shared::{Transform, Vec3};

use super::commands::SceneCommand;
use super::EditorStore;

impl EditorStore {
    /// Record one completed transform gesture.
    ///
    /// `before` is the pose captured when the gesture started and `after` the
    /// pose it ended at. Nothing is recorded when the poses are equal or the
    /// object no longer exists. The drag flag is cleared either way.
    pub fn commit_transform(
        &mut self,
        id: &str,
        before: Transform,
        after: Transform,
        label: &str,
    ) -> bool {
        let was_dynamic = self.is_dynamic(id);
        self.commit_gesture(id, before, after, label, was_dynamic)
    }

    /// Same as [`commit_transform`](Self::commit_transform) with the dynamic
    /// flag captured at gesture start
    pub(crate) fn commit_gesture(
        &mut self,
        id: &str,
        before: Transform,
        after: Transform,
        label: &str,
        was_dynamic: bool,
    ) -> bool {
        if before == after || !self.doc.contains(id) {
            if self.doc.is_transforming {
                self.doc.is_transforming = false;
                self.notify_mutated();
            }
            return false;
        }

        self.execute(SceneCommand::Transform {
            id: id.to_string(),
            before,
            after,
            was_dynamic,
            label: label.to_string(),
        });
        true
    }

    /// Physics reports that an object came to rest.
    ///
    /// The pose is applied directly and the object leaves the simulation; this
    /// is not an undoable action. Late reports for removed objects are ignored.
    pub fn settle_object(&mut self, id: &str, position: Vec3, rotation: Vec3) -> bool {
        let Some(obj) = self.doc.get_mut(id) else {
            tracing::debug!("Settle for missing object {id} ignored");
            return false;
        };
        obj.position = position;
        obj.rotation = rotation;
        self.doc.dynamic_object_ids.remove(id);
        self.notify_mutated();
        true
    }
}
