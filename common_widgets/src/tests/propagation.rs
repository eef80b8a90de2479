// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use assert_matches::assert_matches;

use crate::assert_debug_panics;
use crate::core::{WidgetId, WidgetTree};
use crate::state::SOURCE_ID_IMPOSED;
use crate::testing::{Record, Recorder, Recording};
use crate::tracing_backend::try_init_test_tracing;
use crate::widgets::Label;

fn is_on(tree: &mut WidgetTree, id: WidgetId, state_name: &str) -> bool {
    tree.widget_mut(id).is_state_on(state_name)
}

// EDGES

#[test]
fn state_on_fires_once_per_transition() {
    let _ = try_init_test_tracing();
    let recording = Recording::default();
    let mut tree = WidgetTree::new();
    let id = tree.add_root(Recorder::new(&recording).with_state("x", false));
    recording.clear();

    let mut widget = tree.widget_mut(id);
    widget.add_binary_state_source("x", "a");
    widget.add_binary_state_source("x", "b");
    widget.add_binary_state_source("x", "a");
    assert_eq!(recording.drain(), [Record::StateOn("x".into())]);

    widget.remove_binary_state_source("x", Some("a"));
    widget.remove_binary_state_source("x", Some("missing"));
    assert!(recording.is_empty());

    widget.remove_binary_state_source("x", Some("b"));
    assert_eq!(recording.drain(), [Record::StateOff("x".into())]);
}

#[test]
fn add_then_remove_restores_state() {
    let mut tree = WidgetTree::new();
    let id = tree.add_root(Recorder::new(&Recording::default()).with_state("x", true));
    let mut widget = tree.widget_mut(id);
    widget.add_binary_state_source("x", "existing");

    widget.add_binary_state_source("x", "foo");
    widget.remove_binary_state_source("x", Some("foo"));
    assert_eq!(widget.binary_state("x").source_count(), 1);
    assert!(widget.is_state_on("x"));

    widget.remove_binary_state_source("x", Some("existing"));
    widget.add_binary_state_source("x", "foo");
    widget.remove_binary_state_source("x", Some("foo"));
    assert_eq!(widget.binary_state("x").source_count(), 0);
    assert!(!widget.is_state_on("x"));
}

#[test]
fn clearing_all_sources_fires_once() {
    let recording = Recording::default();
    let mut tree = WidgetTree::new();
    let id = tree.add_root(Recorder::new(&recording).with_state("x", false));
    let mut widget = tree.widget_mut(id);
    widget
        .add_binary_state_source("x", "a")
        .add_binary_state_source("x", "b");
    recording.clear();

    widget.remove_binary_state_source("x", None);
    assert_eq!(recording.drain(), [Record::StateOff("x".into())]);

    widget.remove_binary_state_source("x", None);
    assert!(recording.is_empty());
}

#[test]
fn registration_is_idempotent() {
    let mut tree = WidgetTree::new();
    let id = tree.add_root(Recorder::new(&Recording::default()).with_state("x", true));
    let mut widget = tree.widget_mut(id);
    widget.add_binary_state_source("x", "foo");

    widget.add_binary_state("x", false);
    assert!(widget.is_state_on("x"));
    assert!(widget.binary_state("x").is_cascading());
}

// CASCADE

#[test]
fn cascade_reaches_whole_subtree() {
    let _ = try_init_test_tracing();
    let mut tree = WidgetTree::new();
    let root = tree.add_root(Recorder::new(&Recording::default()).with_state("x", true));
    let child = tree.add_child(root, Recorder::new(&Recording::default()).with_state("x", true));
    let grandchild =
        tree.add_child(child, Recorder::new(&Recording::default()).with_state("x", true));

    tree.widget_mut(root).add_binary_state_source("x", "foo");
    assert!(is_on(&mut tree, child, "x"));
    assert!(is_on(&mut tree, grandchild, "x"));
    assert!(
        tree.widget_mut(grandchild)
            .binary_state("x")
            .has_source(SOURCE_ID_IMPOSED)
    );

    tree.widget_mut(root).remove_binary_state_source("x", Some("foo"));
    assert!(!is_on(&mut tree, child, "x"));
    assert!(!is_on(&mut tree, grandchild, "x"));
}

#[test]
fn cascade_skips_widgets_without_state() {
    let mut tree = WidgetTree::new();
    let root = tree.add_root(Recorder::new(&Recording::default()).with_state("x", true));
    let label = tree.add_child(root, Label::new("Between"));
    let other = tree.add_child(label, Recorder::new(&Recording::default()).with_state("y", true));
    let leaf = tree.add_child(other, Recorder::new(&Recording::default()).with_state("x", true));

    tree.widget_mut(root).add_binary_state_source("x", "foo");
    assert!(is_on(&mut tree, leaf, "x"));
    assert!(!is_on(&mut tree, other, "y"));
}

#[test]
fn non_cascading_descendant_is_isolated() {
    let recording = Recording::default();
    let mut tree = WidgetTree::new();
    let root = tree.add_root(Recorder::new(&Recording::default()).with_state("x", true));
    let child = tree.add_child(root, Recorder::new(&recording).with_state("x", false));
    recording.clear();

    tree.widget_mut(root).add_binary_state_source("x", "foo");
    assert!(!is_on(&mut tree, child, "x"));
    tree.widget_mut(root).remove_binary_state_source("x", Some("foo"));
    assert!(!is_on(&mut tree, child, "x"));
    assert!(recording.is_empty());
}

#[test]
fn non_cascading_ancestor_still_pushes() {
    // Whether a state cascades is decided by the receiving widget.
    let mut tree = WidgetTree::new();
    let root = tree.add_root(Recorder::new(&Recording::default()).with_state("x", false));
    let child = tree.add_child(root, Recorder::new(&Recording::default()).with_state("x", true));

    tree.widget_mut(root).add_binary_state_source("x", "foo");
    assert!(is_on(&mut tree, child, "x"));
}

#[test]
fn imposed_and_direct_sources_are_independent() {
    let mut tree = WidgetTree::new();
    let root = tree.add_root(Recorder::new(&Recording::default()).with_state("x", true));
    let child = tree.add_child(root, Recorder::new(&Recording::default()).with_state("x", true));

    tree.widget_mut(root).add_binary_state_source("x", "foo");
    tree.widget_mut(child).add_binary_state_source("x", "bar");
    tree.widget_mut(child).remove_binary_state_source("x", Some("bar"));
    assert!(is_on(&mut tree, child, "x"), "imposed source remains");

    tree.widget_mut(child).add_binary_state_source("x", "bar");
    tree.widget_mut(root).remove_binary_state_source("x", Some("foo"));
    assert!(is_on(&mut tree, child, "x"), "direct source remains");
    assert!(
        !tree
            .widget_mut(child)
            .binary_state("x")
            .has_source(SOURCE_ID_IMPOSED)
    );
}

#[test]
fn intermediate_state_change_cascades_independently() {
    let mut tree = WidgetTree::new();
    let root = tree.add_root(Recorder::new(&Recording::default()).with_state("x", true));
    let child = tree.add_child(root, Recorder::new(&Recording::default()).with_state("x", true));
    let leaf = tree.add_child(child, Recorder::new(&Recording::default()).with_state("x", true));

    tree.widget_mut(root).add_binary_state_source("x", "foo");
    tree.widget_mut(child).add_binary_state_source("x", "bar");
    // The child was already on: no new cascade, the leaf keeps the root's imposition.
    tree.widget_mut(root).remove_binary_state_source("x", Some("foo"));

    assert!(is_on(&mut tree, child, "x"));
    assert!(
        !is_on(&mut tree, leaf, "x"),
        "imposition doesn't remember which ancestor imposed it"
    );
}

// IMPOSED SOURCE

#[test]
fn imposed_source_affects_only_self() {
    let recording = Recording::default();
    let mut tree = WidgetTree::new();
    let root = tree.add_root(Recorder::new(&recording).with_state("x", true));
    let child = tree.add_child(root, Recorder::new(&Recording::default()).with_state("x", true));
    recording.clear();

    tree.widget_mut(root).add_imposed_state_source("x");
    assert_eq!(recording.drain(), [Record::StateOn("x".into())]);
    assert!(!is_on(&mut tree, child, "x"));

    tree.widget_mut(root).remove_imposed_state_source("x");
    assert_eq!(recording.drain(), [Record::StateOff("x".into())]);
}

#[test]
fn reserved_source_is_rejected() {
    let mut tree = WidgetTree::new();
    let id = tree.add_root(Recorder::new(&Recording::default()).with_state("x", true));

    assert_debug_panics!(
        tree.widget_mut(id)
            .add_binary_state_source("x", SOURCE_ID_IMPOSED),
        "is reserved"
    );
    assert_debug_panics!(
        tree.widget_mut(id)
            .remove_binary_state_source("x", Some("imposed-by-hand")),
        "is reserved"
    );
}

#[test]
fn imposed_prefix_is_reserved() {
    let mut tree = WidgetTree::new();
    let id = tree.add_root(Recorder::new(&Recording::default()).with_state("x", true));

    // Detaching strips every source with the prefix, so it can't be used by callers.
    assert_debug_panics!(
        tree.widget_mut(id)
            .add_binary_state_source("x", "imposedByUser"),
        "'imposedByUser' is reserved"
    );
    if cfg!(not(debug_assertions)) {
        tree.widget_mut(id)
            .add_binary_state_source("x", "imposedByUser");
    }
    assert!(!is_on(&mut tree, id, "x"));

    tree.widget_mut(id).add_binary_state_source("x", "user-imposed");
    assert!(is_on(&mut tree, id, "x"));
}

#[test]
fn apply_consults_nearest_ancestor_only() {
    let mut tree = WidgetTree::new();
    let grandparent = tree.add_root(Recorder::new(&Recording::default()).with_state("x", true));
    let parent = tree.add_child(
        grandparent,
        Recorder::new(&Recording::default()).with_state("x", false),
    );
    // The parent isn't cascading, so it stays off.
    tree.widget_mut(grandparent)
        .add_binary_state_source("x", "foo");
    let child = tree.add_child(parent, Recorder::new(&Recording::default()).with_state("x", true));

    assert!(!is_on(&mut tree, parent, "x"));
    assert!(!is_on(&mut tree, child, "x"));

    tree.widget_mut(child).apply_imposed_state_source("x");
    assert!(!is_on(&mut tree, child, "x"));

    tree.widget_mut(parent).add_binary_state_source("x", "bar");
    assert!(is_on(&mut tree, child, "x"));
}

// CASCADING FLAG

#[test]
fn turning_cascading_off_drops_imposed_source() {
    let mut tree = WidgetTree::new();
    let root = tree.add_root(Recorder::new(&Recording::default()).with_state("x", true));
    let child = tree.add_child(root, Recorder::new(&Recording::default()).with_state("x", true));
    let leaf = tree.add_child(child, Recorder::new(&Recording::default()).with_state("x", true));
    tree.widget_mut(root).add_binary_state_source("x", "foo");

    tree.widget_mut(child).set_is_cascading("x", false);
    assert!(!is_on(&mut tree, child, "x"));
    assert!(!tree.widget_mut(child).binary_state("x").is_cascading());
    assert!(is_on(&mut tree, leaf, "x"), "descendants are left alone");

    tree.widget_mut(root).remove_binary_state_source("x", Some("foo"));
    tree.widget_mut(root).add_binary_state_source("x", "foo");
    assert!(!is_on(&mut tree, child, "x"));
}

#[test]
fn turning_cascading_on_pulls_from_ancestor() {
    let mut tree = WidgetTree::new();
    let root = tree.add_root(Recorder::new(&Recording::default()).with_state("x", true));
    let child = tree.add_child(root, Recorder::new(&Recording::default()).with_state("x", false));
    tree.widget_mut(root).add_binary_state_source("x", "foo");
    assert!(!is_on(&mut tree, child, "x"));

    tree.widget_mut(child).set_is_cascading("x", true);
    assert!(is_on(&mut tree, child, "x"));

    tree.widget_mut(child).set_is_cascading("x", true);
    assert_eq!(tree.widget_mut(child).binary_state("x").source_count(), 1);
}

// PRECONDITIONS

#[test]
#[should_panic(expected = "binary state 'missing' is not registered")]
fn unregistered_state_panics() {
    let mut tree = WidgetTree::new();
    let id = tree.add_root(Recorder::new(&Recording::default()));
    tree.widget_mut(id).add_binary_state_source("missing", "foo");
}

#[test]
fn registered_state_is_visible_through_tree() {
    let mut tree = WidgetTree::new();
    let id = tree.add_root(Recorder::new(&Recording::default()).with_state("x", true));
    tree.widget_mut(id).add_binary_state_source("x", "foo");

    let states = tree.binary_states(id);
    assert_matches!(states, Some(states) if states.is_state_on("x"));
}
