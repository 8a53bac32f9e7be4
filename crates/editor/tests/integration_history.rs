//! Integration tests for undo/redo behavior of the document store.
//!
//! Covers selection invariants, apply/revert symmetry, the history bound and
//! full place/transform/delete sessions replayed through undo and redo.

use std::collections::HashSet;

use aquascape_editor_lib::fixtures::{rock, rock_at};
use aquascape_editor_lib::state::{
    EditorSettings, EditorStore, TransformSession, DEFAULT_HISTORY_LIMIT,
};
use shared::{EditorMode, ObjectId, Transform, TransformPatch};

fn assert_invariants(store: &EditorStore) {
    let live: HashSet<&str> = store.objects().iter().map(|o| o.id.as_str()).collect();
    assert_eq!(live.len(), store.object_count(), "object ids must be unique");

    let selected = store.selected_ids();
    let distinct: HashSet<&ObjectId> = selected.iter().collect();
    assert_eq!(distinct.len(), selected.len(), "selection has duplicates");
    for id in selected {
        assert!(live.contains(id.as_str()), "selected id {id} is not live");
    }
    match store.active_id() {
        Some(active) => assert!(selected.contains(active)),
        None => assert!(selected.is_empty()),
    }
    for id in store.dynamic_ids() {
        assert!(live.contains(id.as_str()), "dynamic id {id} is not live");
    }
}

/// Small deterministic generator for operation sequences
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }
}

#[test]
fn test_selection_invariant_under_mixed_operations() {
    let mut store = EditorStore::new();
    let mut session = TransformSession::new();
    let mut rng = Lcg(7);
    let mut next_id = 0;

    for _ in 0..800 {
        let ids: Vec<ObjectId> = store.objects().iter().map(|o| o.id.clone()).collect();
        let pick = |rng: &mut Lcg| -> Option<ObjectId> {
            (!ids.is_empty()).then(|| ids[rng.next(ids.len())].clone())
        };
        match rng.next(15) {
            0 | 1 => {
                next_id += 1;
                store.add_object(rock(&format!("o{next_id}"), next_id as f64));
            }
            2 => {
                let id = pick(&mut rng);
                store.select_object(id.as_deref(), false);
            }
            3 => {
                let id = pick(&mut rng);
                store.select_object(id.as_deref(), true);
            }
            4 => {
                let targets: Vec<ObjectId> = (0..2).filter_map(|_| pick(&mut rng)).collect();
                store.remove_objects(&targets);
            }
            5 => {
                store.duplicate_selected();
            }
            6 => {
                store.undo();
            }
            7 => {
                store.redo();
            }
            8 => {
                if let Some(id) = pick(&mut rng) {
                    store.settle_object(&id, [0.0, 0.5, 0.0], [0.0; 3]);
                }
            }
            9 => {
                // Reload the scene with one object dropped and one id repeated
                let mut objects = store.objects().to_vec();
                if !objects.is_empty() {
                    let gone = rng.next(objects.len());
                    objects.remove(gone);
                }
                if let Some(first) = objects.first().cloned() {
                    objects.push(first);
                }
                store.set_objects(objects);
                assert!(!store.can_undo());
                assert!(!store.is_transforming());
            }
            10 => match rng.next(3) {
                0 => {
                    store.select_asset("rock_small");
                    assert!(store.selected_ids().is_empty());
                }
                1 => store.set_mode(EditorMode::Place),
                _ => store.set_mode(EditorMode::Select),
            },
            11 => {
                if let Some(id) = pick(&mut rng) {
                    let before = store.get_object(&id).map(|o| o.transform()).unwrap_or_default();
                    let mut after = before.clone();
                    after.position[0] += 0.25;
                    assert!(store.commit_transform(&id, before, after, "Transform"));
                }
            }
            12 => {
                if session.begin(&mut store) {
                    assert_eq!(session.dragged_id(), store.active_id().map(String::as_str));
                }
            }
            13 => {
                let abandoned = session.is_abandoned(&store);
                let dragged = session.dragged_id().map(str::to_string);
                let pose = dragged.as_deref().and_then(|id| store.get_object(id)).cloned();
                let z = rng.next(10) as f64;
                let applied = session.update(&mut store, &TransformPatch::position([0.0, 1.0, z]));
                if abandoned {
                    assert!(!applied);
                    assert!(!session.is_dragging());
                    let after = dragged.as_deref().and_then(|id| store.get_object(id)).cloned();
                    assert_eq!(after, pose, "abandoned drag must not move its object");
                }
            }
            _ => {
                if rng.next(2) == 0 {
                    session.end(&mut store, "Move");
                } else {
                    session.cancel(&mut store);
                }
                assert!(!session.is_dragging());
                assert!(!store.is_transforming());
            }
        }
        assert_invariants(&store);
        if store.is_transforming() {
            assert!(session.is_dragging());
            assert_eq!(session.dragged_id(), store.active_id().map(String::as_str));
        }
    }
}

#[test]
fn test_undo_redo_symmetry_per_command() {
    let mut store = EditorStore::new();
    store.add_object(rock("a", 0.0));
    store.add_object(rock("b", 1.0));
    store.select_object(Some("a"), true);

    let actions: Vec<Box<dyn Fn(&mut EditorStore)>> = vec![
        Box::new(|s: &mut EditorStore| {
            s.add_object(rock("c", 2.0));
        }),
        Box::new(|s: &mut EditorStore| {
            s.remove_objects(&["a".to_string()]);
        }),
        Box::new(|s: &mut EditorStore| {
            s.duplicate_selected();
        }),
        Box::new(|s: &mut EditorStore| {
            let before = s.get_object("b").map(|o| o.transform()).unwrap_or_default();
            s.commit_transform("b", before, Transform::at([4.0, 0.0, 4.0]), "Move");
        }),
    ];

    for action in &actions {
        let before = store.document().clone();
        action(&mut store);
        let after = store.document().clone();
        assert_ne!(before, after);

        assert!(store.undo());
        assert_eq!(store.document(), &before);
        assert!(store.redo());
        assert_eq!(store.document(), &after);
        assert!(store.undo());
    }
}

#[test]
fn test_history_bound_drops_oldest() {
    let mut store = EditorStore::new();
    let extra = 5;
    for i in 0..DEFAULT_HISTORY_LIMIT + extra {
        store.add_object(rock(&format!("r{i}"), i as f64));
    }
    assert_eq!(store.undo_len(), DEFAULT_HISTORY_LIMIT);

    while store.undo() {}
    assert_eq!(store.object_count(), extra);
    assert_eq!(store.objects()[0].id, "r0");
}

#[test]
fn test_custom_history_limit() {
    let mut store = EditorStore::with_settings(EditorSettings {
        history_limit: 2,
        ..EditorSettings::default()
    });
    for i in 0..4 {
        store.add_object(rock(&format!("r{i}"), i as f64));
    }
    assert_eq!(store.undo_labels(), vec!["Place", "Place"]);
}

#[test]
fn test_new_action_after_undo_clears_redo() {
    let mut store = EditorStore::new();
    store.add_object(rock("a", 0.0));
    store.add_object(rock("b", 1.0));
    store.undo();
    assert!(store.can_redo());

    store.duplicate_objects(&["a".to_string()]);
    assert!(!store.can_redo());
    assert_eq!(store.redo_len(), 0);
}

#[test]
fn test_duplicate_pair_scenario() {
    let mut store = EditorStore::new();
    store.add_object(rock_at("A", [0.0, 1.0, 0.0]));
    store.add_object(rock_at("B", [1.0, 1.0, 1.0]));
    store.select_object(Some("A"), false);
    store.select_object(Some("B"), true);
    assert_eq!(store.selected_ids(), ["A".to_string(), "B".to_string()].as_slice());

    let copies = store.duplicate_selected();
    assert_eq!(store.object_count(), 4);
    assert_eq!(copies.len(), 2);
    assert_eq!(store.selected_ids(), copies.as_slice());
    for id in &copies {
        assert!(store.is_dynamic(id));
        assert_ne!(id, "A");
        assert_ne!(id, "B");
    }
    assert_eq!(store.get_object(&copies[1]).unwrap().position, [1.25, 1.0, 1.25]);
}

#[test]
fn test_place_transform_delete_replay() {
    let mut store = EditorStore::new();
    store.add_object(rock_at("A", [0.0, 1.0, 0.0]));
    store.add_object(rock_at("B", [1.0, 1.0, 0.0]));
    store.add_object(rock_at("C", [2.0, 1.0, 0.0]));
    let placed = store.document().clone();

    let before = store.get_object("B").unwrap().transform();
    for step in 1..=10 {
        let z = step as f64 * 0.3;
        store.update_object("B", &TransformPatch::position([1.0, 1.0, z]));
    }
    let after = store.get_object("B").unwrap().transform();
    assert!(store.commit_transform("B", before.clone(), after.clone(), "Move"));
    store.remove_object("A");
    let end_state = store.document().clone();
    assert_eq!(store.undo_len(), 5);

    assert!(store.undo());
    assert!(store.get_object("A").is_some());
    assert_eq!(store.objects()[0].id, "A");

    assert!(store.undo());
    assert_eq!(store.get_object("B").unwrap().transform(), before);
    assert_eq!(store.document(), &placed);

    for _ in 0..3 {
        assert!(store.undo());
    }
    assert_eq!(store.object_count(), 0);
    assert!(!store.undo());

    for _ in 0..5 {
        assert!(store.redo());
    }
    assert!(!store.redo());
    assert_eq!(store.document(), &end_state);
    assert_eq!(store.get_object("B").unwrap().transform(), after);
    assert!(store.get_object("A").is_none());
}

#[test]
fn test_noop_commit_keeps_history() {
    let mut store = EditorStore::new();
    store.add_object(rock("a", 0.0));
    let pose = store.get_object("a").unwrap().transform();
    let len = store.undo_len();
    assert!(!store.commit_transform("a", pose.clone(), pose, "Move"));
    assert_eq!(store.undo_len(), len);
}

#[test]
fn test_undo_place_while_falling_removes_object() {
    let mut store = EditorStore::new();
    store.add_object(rock("a", 0.0));
    store.update_object("a", &TransformPatch::position([0.0, 0.7, 0.0]));
    assert!(store.is_dynamic("a"));

    store.undo();
    assert_eq!(store.object_count(), 0);
    assert!(store.dynamic_ids().is_empty());
    assert!(!store.settle_object("a", [0.0, 0.5, 0.0], [0.0; 3]));
}
