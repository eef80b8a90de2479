// Copyright 2018 the Xilem Authors and the Druid Authors
// SPDX-License-Identifier: Apache-2.0

use crate::core::{Action, Widget, WidgetId, WidgetTree};

/// A rich mutable reference to a [`Widget`] in a [`WidgetTree`].
///
/// All state mutations go through a `WidgetMut`: it has access to the rest of the
/// tree, so a state change on this widget can be propagated to its descendants.
///
/// Binary state operations are defined on `WidgetMut` (see
/// [`add_binary_state_source`](Self::add_binary_state_source)), and behaviors such as
/// [`Disableable`](crate::behaviors::Disableable) are extension traits implemented for it.
/// Widget-specific mutations are associated functions taking `this: &mut WidgetMut<'_>`,
/// e.g. [`Button::click_button`](crate::widgets::Button::click_button).
#[derive(Debug)]
pub struct WidgetMut<'tree> {
    pub(crate) tree: &'tree mut WidgetTree,
    pub(crate) id: WidgetId,
}

impl WidgetMut<'_> {
    /// The id of the widget.
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Shared access to the whole tree.
    pub fn tree(&self) -> &WidgetTree {
        self.tree
    }

    /// Get a `WidgetMut` for the same underlying widget with a shorter lifetime.
    pub fn reborrow_mut(&mut self) -> WidgetMut<'_> {
        WidgetMut {
            tree: &mut *self.tree,
            id: self.id,
        }
    }

    /// Shared access to the widget.
    pub fn widget(&self) -> &dyn Widget {
        self.tree
            .get(self.id)
            .expect("WidgetMut always points to a widget in the tree")
    }

    pub(crate) fn widget_mut(&mut self) -> &mut dyn Widget {
        self.tree
            .get_mut(self.id)
            .expect("WidgetMut always points to a widget in the tree")
    }

    /// Attempt to downcast the widget to a concrete type.
    pub fn downcast<W: Widget>(&self) -> Option<&W> {
        self.widget().downcast_ref::<W>()
    }

    /// Attempt to downcast the widget to a concrete type, mutably.
    pub fn downcast_mut<W: Widget>(&mut self) -> Option<&mut W> {
        self.widget_mut().downcast_mut::<W>()
    }

    /// Queue an action emitted by this widget.
    pub fn submit_action(&mut self, action: Action) {
        self.tree.submit_action(self.id, action);
    }

    /// Returns `true` if the widget has a parent.
    pub fn has_parent(&self) -> bool {
        self.tree.parent_of(self.id).is_some()
    }
}
