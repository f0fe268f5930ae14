//! Integration tests for group assembly: supersets, circuits, and the
//! set/rep inheritance rules between group members.

use repscript::{parse, GroupKind, Reps};

#[test]
fn test_superset_both_sides_explicit() {
    let result = parse("4x10 Leg Press ss 4x15 Leg Curls");
    assert!(result.success);
    let workout = result.workout.unwrap();
    assert_eq!(workout.groups.len(), 1);
    let group = &workout.groups[0];
    assert_eq!(group.kind, GroupKind::Superset);
    assert_eq!(group.exercises.len(), 2);
    assert_eq!(group.exercises[0].name, "leg press");
    assert_eq!(group.exercises[1].name, "leg curl");
    // No inheritance needed: both sides state their own sets and reps.
    assert_eq!(group.exercises[0].sets.len(), 4);
    assert_eq!(group.exercises[0].sets[0].reps, Reps::Fixed { count: 10 });
    assert_eq!(group.exercises[1].sets.len(), 4);
    assert_eq!(group.exercises[1].sets[0].reps, Reps::Fixed { count: 15 });
}

#[test]
fn test_superset_full_inheritance() {
    let result = parse("5x5 benchpress ss banded pull aparts");
    assert!(result.success);
    let workout = result.workout.unwrap();
    let group = &workout.groups[0];
    assert_eq!(group.kind, GroupKind::Superset);
    let second = &group.exercises[1];
    assert_eq!(second.name, "band pull apart");
    assert_eq!(second.sets.len(), 5);
    assert!(second.sets.iter().all(|s| s.reps == Reps::Fixed { count: 5 }));
}

#[test]
fn test_superset_count_only_inheritance() {
    // Second member states reps but no set count: only the count inherits.
    let result = parse("4x8 barbell row ss 20 face pulls");
    let workout = result.workout.unwrap();
    let second = &workout.groups[0].exercises[1];
    assert_eq!(second.sets.len(), 4);
    assert!(second.sets.iter().all(|s| s.reps == Reps::Fixed { count: 20 }));
}

#[test]
fn test_superset_inherits_range_verbatim() {
    let result = parse("3x8-12 lat pulldown ss chest fly");
    let workout = result.workout.unwrap();
    let second = &workout.groups[0].exercises[1];
    assert_eq!(second.sets.len(), 3);
    assert!(second
        .sets
        .iter()
        .all(|s| s.reps == Reps::Range { min: 8, max: 12 }));
}

#[test]
fn test_three_way_superset() {
    let result = parse("3x10 squat ss 3x10 lunges ss 3x10 leg extensions");
    let workout = result.workout.unwrap();
    let group = &workout.groups[0];
    assert_eq!(group.kind, GroupKind::Superset);
    assert_eq!(group.exercises.len(), 3);
}

#[test]
fn test_circuit_with_plus() {
    let result = parse("3x10 burpees + 3x15 sit ups + 3x20 mountain climbers");
    let workout = result.workout.unwrap();
    let group = &workout.groups[0];
    assert_eq!(group.kind, GroupKind::Circuit);
    assert_eq!(group.exercises.len(), 3);
}

#[test]
fn test_circuit_members_inherit_too() {
    let result = parse("3x12 kettlebell swings + box jumps");
    let workout = result.workout.unwrap();
    let group = &workout.groups[0];
    assert_eq!(group.kind, GroupKind::Circuit);
    let second = &group.exercises[1];
    assert_eq!(second.sets.len(), 3);
    assert!(second.sets.iter().all(|s| s.reps == Reps::Fixed { count: 12 }));
}

#[test]
fn test_bare_trailing_plus_is_not_a_separator() {
    let result = parse("3x10 burpees +");
    let workout = result.workout.unwrap();
    assert_eq!(workout.groups.len(), 1);
    assert_eq!(workout.groups[0].kind, GroupKind::Single);
    assert_eq!(workout.groups[0].exercises.len(), 1);
}

#[test]
fn test_adjacent_notations_split_without_separator() {
    // A number leading into NxM starts the next exercise, so two notations
    // on one line become two single groups.
    let result = parse("4x10 Leg Press 4x15 Leg Curls");
    let workout = result.workout.unwrap();
    assert_eq!(workout.groups.len(), 2);
    assert_eq!(workout.groups[0].exercises[0].name, "leg press");
    assert_eq!(workout.groups[1].exercises[0].name, "leg curl");
}

#[test]
fn test_groups_preserve_line_order() {
    let result = parse("5x5 Squat\n3x8 Bench\n1x5 deadlift");
    let workout = result.workout.unwrap();
    let names: Vec<&str> = workout
        .groups
        .iter()
        .map(|g| g.exercises[0].name.as_str())
        .collect();
    assert_eq!(names, vec!["squat", "bench press", "deadlift"]);
}

#[test]
fn test_superset_modifiers_stay_per_member() {
    let result = parse("3x8 bench @185lbs ss 3x12 face pulls @30lbs");
    let workout = result.workout.unwrap();
    let group = &workout.groups[0];
    assert_eq!(group.exercises[0].sets[0].weight.as_ref().unwrap().value, 185.0);
    assert_eq!(group.exercises[1].sets[0].weight.as_ref().unwrap().value, 30.0);
}
