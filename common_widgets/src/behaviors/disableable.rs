// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Widgets which can be disabled.
//!
//! The disabled state cascades: disabling a widget disables every descendant which
//! is itself disableable, and widgets added under a disabled parent start disabled.

use crate::core::{CssClasses, WidgetMut};
use crate::state::BinaryStateful;

/// Name of the binary state behind [`Disableable`].
pub const STATE_NAME_DISABLEABLE: &str = "state-disableable";

/// Class held while the widget is enabled.
pub const CLASS_ENABLED: &str = "widget-enabled";
/// Class held while the widget is disabled.
pub const CLASS_DISABLED: &str = "widget-disabled";

/// Register the disabled state. Call when creating the widget.
pub fn init(states: &mut BinaryStateful) {
    states.add_binary_state(STATE_NAME_DISABLEABLE, true);
}

/// Sync the enabled/disabled classes with the state.
///
/// Call from both state hooks; other state names are ignored.
pub fn update_classes(states: &BinaryStateful, classes: &mut CssClasses, state_name: &str) {
    if state_name != STATE_NAME_DISABLEABLE {
        return;
    }
    let is_disabled = states.is_state_on(STATE_NAME_DISABLEABLE);
    classes.toggle(CLASS_ENABLED, !is_disabled);
    classes.toggle(CLASS_DISABLED, is_disabled);
}

/// Disabling and enabling a widget on behalf of named sources.
///
/// A widget is disabled while at least one source disables it, including the source
/// imposed by a disabled ancestor.
pub trait Disableable {
    /// Disable the widget on behalf of `source_id`.
    fn disable_by(&mut self, source_id: &str) -> &mut Self;

    /// Withdraw `source_id`. The widget stays disabled if other sources remain.
    fn enable_by(&mut self, source_id: &str) -> &mut Self;

    /// Withdraw every source, including the one imposed by an ancestor.
    fn force_enable(&mut self) -> &mut Self;

    /// Returns `true` if at least one source disables the widget.
    fn is_disabled(&self) -> bool;
}

impl Disableable for WidgetMut<'_> {
    #[track_caller]
    fn disable_by(&mut self, source_id: &str) -> &mut Self {
        self.add_binary_state_source(STATE_NAME_DISABLEABLE, source_id)
    }

    #[track_caller]
    fn enable_by(&mut self, source_id: &str) -> &mut Self {
        self.remove_binary_state_source(STATE_NAME_DISABLEABLE, Some(source_id))
    }

    #[track_caller]
    fn force_enable(&mut self) -> &mut Self {
        self.remove_binary_state_source(STATE_NAME_DISABLEABLE, None)
    }

    #[track_caller]
    fn is_disabled(&self) -> bool {
        self.is_state_on(STATE_NAME_DISABLEABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WidgetTree;
    use crate::widgets::Panel;

    #[test]
    fn classes_follow_state() {
        let mut tree = WidgetTree::new();
        let panel = tree.add_root(Panel::new());
        let has_class = |tree: &WidgetTree, class: &str| {
            tree.get(panel)
                .and_then(|widget| widget.css_classes())
                .is_some_and(|classes| classes.contains(class))
        };
        assert!(has_class(&tree, CLASS_ENABLED));

        tree.widget_mut(panel).disable_by("foo");
        assert!(has_class(&tree, CLASS_DISABLED));
        assert!(!has_class(&tree, CLASS_ENABLED));

        tree.widget_mut(panel).enable_by("foo");
        assert!(has_class(&tree, CLASS_ENABLED));
        assert!(!has_class(&tree, CLASS_DISABLED));
    }

    #[test]
    fn sources_accumulate() {
        let mut tree = WidgetTree::new();
        let panel = tree.add_root(Panel::new());
        let mut panel = tree.widget_mut(panel);

        panel.disable_by("foo").disable_by("bar");
        panel.enable_by("foo");
        assert!(panel.is_disabled());
        panel.enable_by("bar");
        assert!(!panel.is_disabled());
    }

    #[test]
    fn force_enable_clears_imposed_source() {
        let mut tree = WidgetTree::new();
        let parent = tree.add_root(Panel::new());
        let child = tree.add_child(parent, Panel::new());

        tree.widget_mut(parent).disable_by("foo");
        tree.widget_mut(child).disable_by("bar");
        assert!(tree.widget_mut(child).is_disabled());

        tree.widget_mut(child).force_enable();
        assert!(!tree.widget_mut(child).is_disabled());
        assert!(tree.widget_mut(parent).is_disabled());
    }
}
