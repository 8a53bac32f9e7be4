//! Integration tests for EditorHarness.
//!
//! Tests the headless harness API the way an interactive session drives it:
//! catalog placement, drags, physics settling and persistence.

use aquascape_editor_lib::fixtures::{rock, sample_catalog};
use aquascape_editor_lib::harness::EditorHarness;
use aquascape_editor_lib::state::object_display_name;
use shared::{EditorMode, TransformPatch};

#[test]
fn test_harness_place_settle_cycle() {
    let mut h = EditorHarness::with_catalog(sample_catalog());
    let rock_id = h.place("rock_small", [0.0, 0.0, 0.0]).unwrap();
    let plant_id = h.place("anubias", [1.0, 0.0, -1.0]).unwrap();
    assert_eq!(h.object_count(), 2);
    assert_eq!(h.dynamic_count(), 2);
    assert_eq!(h.store.mode(), EditorMode::Select);
    assert_eq!(h.store.active_id(), Some(&plant_id));

    assert!(h.settle(&rock_id, [0.0, 0.525, 0.0]));
    assert_eq!(h.dynamic_count(), 1);
    assert_eq!(h.position_of(&rock_id), Some([0.0, 0.525, 0.0]));
    // Settling is not an undoable step
    assert_eq!(h.store.undo_len(), 2);
}

#[test]
fn test_harness_undo_redo_cycle() {
    let mut h = EditorHarness::new();
    h.add(rock("a", 0.0));
    h.add(rock("b", 1.0));
    assert_eq!(h.object_count(), 2);

    assert!(h.undo());
    assert_eq!(h.object_count(), 1);

    assert!(h.undo());
    assert_eq!(h.object_count(), 0);

    assert!(!h.undo()); // nothing to undo
    assert_eq!(h.object_count(), 0);

    assert!(h.redo());
    assert_eq!(h.object_count(), 1);

    assert!(h.redo());
    assert_eq!(h.object_count(), 2);

    assert!(!h.redo()); // nothing to redo
}

#[test]
fn test_harness_drag_many_steps_is_one_undo() {
    let mut h = EditorHarness::new();
    h.add(rock("a", 0.0));
    let steps: Vec<TransformPatch> = (1..=50)
        .map(|i| TransformPatch::position([i as f64 * 0.01, 1.0, 0.0]))
        .collect();
    assert!(h.drag("a", &steps, "Move"));
    assert_eq!(h.store.undo_labels(), vec!["Place", "Move"]);
    assert!(!h.store.is_transforming());

    assert!(h.undo());
    assert_eq!(h.position_of("a"), Some([0.0, 1.0, 0.0]));
}

#[test]
fn test_harness_drag_unknown_object() {
    let mut h = EditorHarness::new();
    assert!(!h.move_to("ghost", [1.0, 1.0, 1.0]));
    assert!(!h.store.is_transforming());
}

#[test]
fn test_harness_undo_mid_drag_cancels_gesture() {
    let mut h = EditorHarness::new();
    h.add(rock("a", 0.0));
    h.store.select_object(Some("a"), false);
    assert!(h.session.begin(&mut h.store));
    h.session.update(&mut h.store, &TransformPatch::position([3.0, 1.0, 3.0]));

    assert!(h.undo());
    assert!(!h.session.is_dragging());
    assert!(!h.store.is_transforming());
    assert_eq!(h.object_count(), 0);
}

#[test]
fn test_harness_delete_selected() {
    let mut h = EditorHarness::new();
    h.add(rock("a", 0.0));
    h.add(rock("b", 1.0));
    h.store.select_all();
    assert!(h.store.remove_selected());
    assert_eq!(h.object_count(), 0);
    assert!(h.undo());
    assert_eq!(h.object_count(), 2);
    assert_eq!(h.store.selected_ids().len(), 2);
}

#[test]
fn test_harness_delete_single() {
    let mut h = EditorHarness::new();
    h.add(rock("a", 0.0));
    h.add(rock("b", 1.0));
    assert!(h.delete("a"));
    assert!(!h.delete("a"));
    assert_eq!(h.object_count(), 1);
}

#[test]
fn test_harness_load_export_json() {
    let mut h = EditorHarness::new();
    h.add(rock("a", 0.0));
    h.add(rock("b", 1.5));
    let json = h.export_scene_json();

    let mut h2 = EditorHarness::new();
    assert_eq!(h2.load_scene_json(&json), 2);
    assert_eq!(h2.store.objects(), h.store.objects());
    assert_eq!(h2.dynamic_count(), 0);
    assert!(h2.store.selected_ids().is_empty());
}

#[test]
fn test_harness_load_legacy_array() {
    let mut h = EditorHarness::new();
    let json = r#"[
        {"id": "a", "assetType": "heater", "position": [0, 0, 0], "rotation": [0, 0, 0], "scale": [1, 1, 1]},
        {"id": "b", "assetType": "heater", "position": [0, 0], "rotation": [0, 0, 0], "scale": [1, 1, 1]}
    ]"#;
    assert_eq!(h.load_scene_json(json), 1);
    assert!(h.store.get_object("a").is_some());
}

#[test]
fn test_harness_display_names() {
    let mut h = EditorHarness::with_catalog(sample_catalog());
    h.add(rock("0123456789", 0.0));
    let obj = h.store.get_object("0123456789").unwrap();
    assert_eq!(object_display_name(obj, &h.catalog), "Small Rock (01234567)");
}
