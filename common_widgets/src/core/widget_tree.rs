// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::collections::VecDeque;

use hashbrown::HashSet;
use tracing::{debug, info_span};
use tree_arena::TreeArena;

use crate::core::{Action, Widget, WidgetId, WidgetMut};
use crate::state::BinaryStateful;

/// An owned tree of widgets.
///
/// Widgets live in an arena, keyed by [`WidgetId`]. Parents list their children by
/// id and children keep the id of their parent, so ancestor and descendant queries
/// are plain arena walks.
///
/// The tree drives the widget lifecycle:
///
/// - [`add_root`](Self::add_root), [`add_child`](Self::add_child) and
///   [`attach`](Self::attach) run [`Widget::after_add`] and resolve binary states
///   against the nearest ancestors.
/// - [`detach`](Self::detach) and [`remove`](Self::remove) run
///   [`Widget::after_remove`] and strip imposed sources.
///
/// A subtree which was detached stays in the arena as a separate root until it is
/// attached again or removed. Widgets inside a detached subtree don't receive
/// lifecycle calls when children are added to them.
#[derive(Debug, Default)]
pub struct WidgetTree {
    pub(crate) arena: TreeArena<Box<dyn Widget>>,
    detached: HashSet<WidgetId>,
    actions: VecDeque<(WidgetId, Action)>,
}

impl WidgetTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    // --- MARK: STRUCTURE

    /// Add a new root widget, and run its add lifecycle.
    pub fn add_root(&mut self, widget: impl Widget) -> WidgetId {
        let id = WidgetId::next();
        self.arena.insert_root(id, Box::new(widget));
        debug!(widget_id = id.trace(), "added root widget");
        self.run_after_add(id);
        id
    }

    /// Add a new widget as the last child of `parent`.
    ///
    /// The add lifecycle runs if `parent` is attached.
    ///
    /// # Panics
    ///
    /// If `parent` isn't in the tree.
    #[track_caller]
    pub fn add_child(&mut self, parent: WidgetId, widget: impl Widget) -> WidgetId {
        assert!(
            self.contains(parent),
            "add_child: parent {parent} not in widget tree"
        );
        let id = WidgetId::next();
        self.arena.insert_child(parent, id, Box::new(widget));
        debug!(
            widget_id = id.trace(),
            parent_id = parent.trace(),
            "added child widget"
        );
        if self.is_attached(id) {
            self.run_after_add(id);
        }
        id
    }

    /// Detach the widget (and its subtree) from its parent.
    ///
    /// Runs the remove lifecycle on the subtree, parents first, if the widget was
    /// attached. The subtree stays in the arena and can be [attached](Self::attach)
    /// again.
    ///
    /// Does nothing if the widget is already the top of a detached subtree.
    ///
    /// # Panics
    ///
    /// If `id` isn't in the tree.
    #[track_caller]
    pub fn detach(&mut self, id: WidgetId) {
        assert!(self.contains(id), "detach: widget {id} not in widget tree");
        if self.detached.contains(&id) {
            return;
        }
        let was_attached = self.is_attached(id);
        self.arena.detach(id);
        self.detached.insert(id);
        debug!(widget_id = id.trace(), "detached widget");
        if was_attached {
            self.run_after_remove(id);
        }
    }

    /// Attach a detached subtree as the last child of `parent`.
    ///
    /// The add lifecycle runs on the subtree, parents first, if `parent` is attached.
    ///
    /// # Panics
    ///
    /// If either widget isn't in the tree, if `id` isn't a detached subtree,
    /// or if `parent` is inside the subtree of `id`.
    #[track_caller]
    pub fn attach(&mut self, id: WidgetId, parent: WidgetId) {
        assert!(
            self.detached.contains(&id),
            "attach: widget {id} is not a detached subtree"
        );
        self.arena.attach(id, parent);
        self.detached.remove(&id);
        debug!(
            widget_id = id.trace(),
            parent_id = parent.trace(),
            "attached widget"
        );
        if self.is_attached(id) {
            self.run_after_add(id);
        }
    }

    /// Remove the widget and its whole subtree.
    ///
    /// If the widget was attached, the remove lifecycle runs first.
    ///
    /// Returns the removed widget, or `None` if `id` isn't in the tree.
    pub fn remove(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        if !self.contains(id) {
            return None;
        }
        self.detach(id);
        self.detached.remove(&id);
        for descendant in self.arena.descendants(id) {
            self.detached.remove(&WidgetId::from_raw(descendant));
        }
        debug!(widget_id = id.trace(), "removed widget");
        self.arena.remove(id)
    }

    // --- MARK: QUERIES

    /// Returns `true` if the widget is in the arena, attached or not.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.arena.contains(id)
    }

    /// Returns `true` if the widget is connected to a root which was never detached.
    pub fn is_attached(&self, id: WidgetId) -> bool {
        self.contains(id)
            && !self
                .arena
                .get_id_path(id)
                .into_iter()
                .any(|node| self.detached.contains(&WidgetId::from_raw(node)))
    }

    /// Shared access to a widget.
    pub fn get(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.arena.get(id).map(|widget| &**widget)
    }

    pub(crate) fn get_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> {
        self.arena.get_mut(id).map(|widget| &mut **widget)
    }

    /// Shared access to a widget of a known type.
    pub fn downcast_ref<W: Widget>(&self, id: WidgetId) -> Option<&W> {
        self.get(id)?.downcast_ref::<W>()
    }

    /// The binary states of a widget.
    ///
    /// Returns `None` if the widget isn't in the tree or isn't stateful.
    pub fn binary_states(&self, id: WidgetId) -> Option<&BinaryStateful> {
        self.get(id)?.binary_states()
    }

    /// Get a mutable handle to a widget.
    ///
    /// # Panics
    ///
    /// If `id` isn't in the tree.
    #[track_caller]
    pub fn widget_mut(&mut self, id: WidgetId) -> WidgetMut<'_> {
        assert!(
            self.contains(id),
            "widget_mut: widget {id} not in widget tree"
        );
        WidgetMut { tree: self, id }
    }

    /// Get a mutable handle to a widget, if it is in the tree.
    pub fn try_widget_mut(&mut self, id: WidgetId) -> Option<WidgetMut<'_>> {
        if !self.contains(id) {
            return None;
        }
        Some(WidgetMut { tree: self, id })
    }

    /// The parent of a widget, or `None` for roots and unknown ids.
    pub fn parent_of(&self, id: WidgetId) -> Option<WidgetId> {
        self.arena.parent_of(id).map(WidgetId::from_raw)
    }

    /// The direct children of a widget, in insertion order.
    pub fn children_of(&self, id: WidgetId) -> Vec<WidgetId> {
        self.arena
            .children_of(id)
            .iter()
            .copied()
            .map(WidgetId::from_raw)
            .collect()
    }

    /// Find the nearest ancestor of `id` matching `predicate`.
    ///
    /// Ancestors are visited closest first; `id` itself isn't considered.
    pub fn ancestor(
        &self,
        id: WidgetId,
        mut predicate: impl FnMut(WidgetId, &dyn Widget) -> bool,
    ) -> Option<WidgetId> {
        self.arena
            .ancestors(id)
            .map(WidgetId::from_raw)
            .find(|&ancestor| {
                self.get(ancestor)
                    .is_some_and(|widget| predicate(ancestor, widget))
            })
    }

    /// All the descendants of `id`, in pre-order.
    ///
    /// This is a snapshot: the result doesn't follow later changes to the tree.
    pub fn all_descendants(&self, id: WidgetId) -> Vec<WidgetId> {
        self.arena
            .descendants(id)
            .into_iter()
            .map(WidgetId::from_raw)
            .collect()
    }

    /// Ids of all roots, including detached subtrees.
    pub fn roots(&self) -> Vec<WidgetId> {
        self.arena
            .roots()
            .iter()
            .copied()
            .map(WidgetId::from_raw)
            .collect()
    }

    // --- MARK: ACTIONS

    pub(crate) fn submit_action(&mut self, source: WidgetId, action: Action) {
        debug!(widget_id = source.trace(), ?action, "submitted action");
        self.actions.push_back((source, action));
    }

    /// Returns the oldest pending action, with the id of the widget which emitted it.
    pub fn pop_action(&mut self) -> Option<(WidgetId, Action)> {
        self.actions.pop_front()
    }

    /// Returns `true` if there are pending actions.
    pub fn has_pending_actions(&self) -> bool {
        !self.actions.is_empty()
    }

    // --- MARK: LIFECYCLE

    fn run_after_add(&mut self, id: WidgetId) {
        let _span = info_span!("after_add", widget_id = id.trace()).entered();
        // Parents first, so that children see resolved ancestors.
        let subtree: Vec<WidgetId> = std::iter::once(id)
            .chain(self.all_descendants(id))
            .collect();
        for widget_id in subtree {
            self.widget_mut(widget_id).run_after_add();
        }
    }

    fn run_after_remove(&mut self, id: WidgetId) {
        let _span = info_span!("after_remove", widget_id = id.trace()).entered();
        let subtree: Vec<WidgetId> = std::iter::once(id)
            .chain(self.all_descendants(id))
            .collect();
        for widget_id in subtree {
            self.widget_mut(widget_id).run_after_remove();
        }
    }
}
