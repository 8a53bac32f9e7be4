//! Generic command history
//!
//! A command is a reversible mutation of some state `S`. The history applies
//! commands, keeps them on a bounded undo stack and replays them on undo/redo.
//! Commands carry everything they restore as data captured before they first
//! ran, so undo never derives the previous state from the current one.

use std::collections::VecDeque;

/// Default number of undo entries kept
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// A reversible mutation of `S`
pub trait Reversible<S> {
    /// Label shown in history listings
    fn name(&self) -> &str;

    /// Apply the mutation
    fn apply(&self, state: &mut S);

    /// Undo the mutation
    fn revert(&self, state: &mut S);
}

/// Bounded undo/redo stacks
#[derive(Debug, Clone)]
pub struct History<C> {
    undo_stack: VecDeque<C>,
    redo_stack: Vec<C>,
    limit: usize,
}

impl<C> History<C> {
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Apply `cmd`, record it and drop the redo stack.
    /// The oldest entries are discarded once the limit is exceeded.
    pub fn execute<S>(&mut self, cmd: C, state: &mut S)
    where
        C: Reversible<S>,
    {
        cmd.apply(state);
        tracing::debug!("Executed '{}'", cmd.name());
        self.undo_stack.push_back(cmd);
        self.redo_stack.clear();
        while self.undo_stack.len() > self.limit {
            self.undo_stack.pop_front();
        }
    }

    /// Revert the most recent command. Returns false if there was nothing to undo.
    pub fn undo<S>(&mut self, state: &mut S) -> bool
    where
        C: Reversible<S>,
    {
        let Some(cmd) = self.undo_stack.pop_back() else {
            return false;
        };
        cmd.revert(state);
        tracing::debug!("Undid '{}'", cmd.name());
        self.redo_stack.push(cmd);
        true
    }

    /// Re-apply the most recently undone command. Returns false if there was nothing to redo.
    pub fn redo<S>(&mut self, state: &mut S) -> bool
    where
        C: Reversible<S>,
    {
        let Some(cmd) = self.redo_stack.pop() else {
            return false;
        };
        cmd.apply(state);
        tracing::debug!("Redid '{}'", cmd.name());
        self.undo_stack.push_back(cmd);
        true
    }

    /// Empty both stacks without touching any state
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Recorded commands, oldest first
    pub fn undo_entries(&self) -> impl Iterator<Item = &C> {
        self.undo_stack.iter()
    }

    /// Undone commands, next-to-redo last
    pub fn redo_entries(&self) -> impl DoubleEndedIterator<Item = &C> {
        self.redo_stack.iter()
    }
}

impl<C> Default for History<C> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Adds `delta` to a counter
    struct Add {
        label: String,
        delta: i64,
    }

    impl Add {
        fn new(delta: i64) -> Self {
            Self {
                label: format!("add {delta}"),
                delta,
            }
        }
    }

    impl Reversible<i64> for Add {
        fn name(&self) -> &str {
            &self.label
        }

        fn apply(&self, state: &mut i64) {
            *state += self.delta;
        }

        fn revert(&self, state: &mut i64) {
            *state -= self.delta;
        }
    }

    #[test]
    fn test_execute_applies_and_records() {
        let mut h = History::new(10);
        let mut value = 0;
        h.execute(Add::new(5), &mut value);
        assert_eq!(value, 5);
        assert_eq!(h.undo_len(), 1);
        assert!(h.can_undo());
        assert!(!h.can_redo());
    }

    #[test]
    fn test_undo_redo_cycle() {
        let mut h = History::new(10);
        let mut value = 0;
        h.execute(Add::new(2), &mut value);
        h.execute(Add::new(3), &mut value);

        assert!(h.undo(&mut value));
        assert_eq!(value, 2);
        assert!(h.undo(&mut value));
        assert_eq!(value, 0);
        assert!(!h.undo(&mut value));

        assert!(h.redo(&mut value));
        assert!(h.redo(&mut value));
        assert_eq!(value, 5);
        assert!(!h.redo(&mut value));
    }

    #[test]
    fn test_new_action_clears_redo() {
        let mut h = History::new(10);
        let mut value = 0;
        h.execute(Add::new(1), &mut value);
        h.execute(Add::new(1), &mut value);
        h.undo(&mut value);
        assert_eq!(h.redo_len(), 1);

        h.execute(Add::new(10), &mut value);
        assert_eq!(h.redo_len(), 0);
        assert_eq!(value, 11);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut h = History::new(3);
        let mut value = 0;
        for delta in [1, 10, 100, 1000, 10000] {
            h.execute(Add::new(delta), &mut value);
        }
        assert_eq!(h.undo_len(), 3);
        let names: Vec<&str> = h.undo_entries().map(|c| c.name()).collect();
        assert_eq!(names, vec!["add 100", "add 1000", "add 10000"]);

        while h.undo(&mut value) {}
        // The two oldest commands are unrecoverable
        assert_eq!(value, 11);
    }

    #[test]
    fn test_zero_limit_records_nothing() {
        let mut h = History::new(0);
        let mut value = 0;
        h.execute(Add::new(4), &mut value);
        assert_eq!(value, 4);
        assert!(!h.can_undo());
    }

    #[test]
    fn test_clear_keeps_state() {
        let mut h = History::new(10);
        let mut value = 0;
        h.execute(Add::new(4), &mut value);
        h.execute(Add::new(4), &mut value);
        h.undo(&mut value);
        h.clear();
        assert_eq!(value, 4);
        assert!(!h.can_undo());
        assert!(!h.can_redo());
    }

    #[test]
    fn test_default_limit() {
        let h: History<Add> = History::default();
        assert_eq!(h.limit(), DEFAULT_HISTORY_LIMIT);
    }
}
