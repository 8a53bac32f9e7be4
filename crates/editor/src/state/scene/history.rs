//! Undo/redo functionality

use super::EditorStore;
use crate::state::history::Reversible;

impl EditorStore {
    /// Undo last change. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.doc);
        if undone {
            self.version += 1;
        }
        undone
    }

    /// Redo last undone change. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.doc);
        if redone {
            self.version += 1;
        }
        redone
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Drop both stacks; the document is untouched
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn undo_len(&self) -> usize {
        self.history.undo_len()
    }

    pub fn redo_len(&self) -> usize {
        self.history.redo_len()
    }

    /// Labels of recorded commands, oldest first
    pub fn undo_labels(&self) -> Vec<String> {
        self.history
            .undo_entries()
            .map(|cmd| cmd.name().to_string())
            .collect()
    }

    /// Labels of undone commands, next to redo first
    pub fn redo_labels(&self) -> Vec<String> {
        self.history
            .redo_entries()
            .rev()
            .map(|cmd| cmd.name().to_string())
            .collect()
    }
}
