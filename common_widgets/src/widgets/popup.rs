// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! A popup widget, which closes when clicked outside.

use hashbrown::HashSet;
use tracing::debug;

use crate::behaviors::disableable;
use crate::core::{Action, CssClasses, Widget, WidgetId, WidgetMut, WidgetTree};
use crate::state::BinaryStateful;

/// A widget which can be opened and closed like a popup.
///
/// A popup is attached under the widget which owns it, and must have a parent
/// before it can be opened. Closing the popup detaches it from the tree.
///
/// Clicks are reported to the popup through [`handle_click`](Self::handle_click).
/// A click is *outside* the popup when its target (or one of the target's
/// ancestors) was marked with [`treat_as_outside`](Self::treat_as_outside), or else
/// when no such widget was marked with [`treat_as_inside`](Self::treat_as_inside)
/// and the target isn't in the popup's subtree.
#[derive(Debug, Clone)]
pub struct Popup {
    is_open: bool,
    inside: HashSet<WidgetId>,
    outside: HashSet<WidgetId>,
    states: BinaryStateful,
    classes: CssClasses,
}

// --- MARK: BUILDERS
impl Popup {
    /// Create a closed popup.
    pub fn new() -> Self {
        let mut states = BinaryStateful::new();
        disableable::init(&mut states);
        let mut classes = CssClasses::new();
        classes.add("popup");
        Self {
            is_open: false,
            inside: HashSet::new(),
            outside: HashSet::new(),
            states,
            classes,
        }
    }

    /// Returns `true` if the popup is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    fn is_outside(&self, tree: &WidgetTree, popup_id: WidgetId, target: WidgetId) -> bool {
        // The target itself, then its ancestors.
        let closest: Vec<WidgetId> = std::iter::once(target)
            .chain(std::iter::successors(tree.parent_of(target), |&id| {
                tree.parent_of(id)
            }))
            .collect();

        if closest.iter().any(|id| self.outside.contains(id)) {
            true
        } else if closest.iter().any(|id| self.inside.contains(id)) {
            false
        } else {
            !closest.contains(&popup_id)
        }
    }
}

impl Default for Popup {
    fn default() -> Self {
        Self::new()
    }
}

// --- MARK: WIDGETMUT
impl Popup {
    #[track_caller]
    fn popup_mut<'a>(this: &'a mut WidgetMut<'_>) -> &'a mut Self {
        let id = this.id();
        let Some(popup) = this.downcast_mut::<Self>() else {
            panic!("widget {id} isn't a Popup");
        };
        popup
    }

    /// Open the popup.
    ///
    /// Emits [`Action::PopupOpened`]. Does nothing if the popup is already open.
    ///
    /// # Panics
    ///
    /// If the popup has no parent.
    #[track_caller]
    pub fn open_popup(this: &mut WidgetMut<'_>) {
        assert!(this.has_parent(), "Popup {} has no parent", this.id());
        let popup = Self::popup_mut(this);
        if popup.is_open {
            return;
        }
        popup.is_open = true;
        debug!(widget_id = this.id().trace(), "opened popup");
        this.submit_action(Action::PopupOpened);
    }

    /// Close the popup, and detach it from the tree.
    ///
    /// Emits [`Action::PopupClosed`] before detaching. Does nothing if the popup
    /// isn't open.
    #[track_caller]
    pub fn close_popup(this: &mut WidgetMut<'_>) {
        let popup = Self::popup_mut(this);
        if !popup.is_open {
            return;
        }
        // Set before emitting, so that the action never sees an open popup.
        popup.is_open = false;
        debug!(widget_id = this.id().trace(), "closed popup");
        this.submit_action(Action::PopupClosed);
        this.tree.detach(this.id);
    }

    /// Treat clicks on `id` and its subtree as inside the popup.
    #[track_caller]
    pub fn treat_as_inside(this: &mut WidgetMut<'_>, id: WidgetId) {
        let popup = Self::popup_mut(this);
        popup.outside.remove(&id);
        popup.inside.insert(id);
    }

    /// Treat clicks on `id` and its subtree as outside the popup, even if they are
    /// in the popup's own subtree.
    #[track_caller]
    pub fn treat_as_outside(this: &mut WidgetMut<'_>, id: WidgetId) {
        let popup = Self::popup_mut(this);
        popup.inside.remove(&id);
        popup.outside.insert(id);
    }

    /// Report a click on `target`.
    ///
    /// If the popup is open and the click is outside, emits
    /// [`Action::PopupOutsideClick`] and closes the popup.
    #[track_caller]
    pub fn handle_click(this: &mut WidgetMut<'_>, target: WidgetId) {
        let popup_id = this.id();
        let tree = this.tree();
        let Some(popup) = tree.downcast_ref::<Self>(popup_id) else {
            panic!("widget {popup_id} isn't a Popup");
        };
        if !popup.is_open || !popup.is_outside(tree, popup_id, target) {
            return;
        }
        this.submit_action(Action::PopupOutsideClick);
        Self::close_popup(this);
    }
}

// --- MARK: IMPL WIDGET
impl Widget for Popup {
    fn binary_states(&self) -> Option<&BinaryStateful> {
        Some(&self.states)
    }

    fn binary_states_mut(&mut self) -> Option<&mut BinaryStateful> {
        Some(&mut self.states)
    }

    fn after_state_on(&mut self, state_name: &str) {
        disableable::update_classes(&self.states, &mut self.classes, state_name);
    }

    fn after_state_off(&mut self, state_name: &str) {
        disableable::update_classes(&self.states, &mut self.classes, state_name);
    }

    fn after_remove(&mut self) {
        // Removed along with its parent, without being closed.
        self.is_open = false;
    }

    fn css_classes(&self) -> Option<&CssClasses> {
        Some(&self.classes)
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::widgets::{Button, Panel};

    fn drain_actions(tree: &mut WidgetTree) -> Vec<Action> {
        std::iter::from_fn(|| tree.pop_action())
            .map(|(_, action)| action)
            .collect()
    }

    fn is_open(tree: &WidgetTree, popup: WidgetId) -> bool {
        tree.downcast_ref::<Popup>(popup).is_some_and(Popup::is_open)
    }

    #[test]
    fn open_and_close() {
        let mut tree = WidgetTree::new();
        let root = tree.add_root(Panel::new());
        let popup = tree.add_child(root, Popup::new());

        Popup::open_popup(&mut tree.widget_mut(popup));
        Popup::open_popup(&mut tree.widget_mut(popup));
        assert!(is_open(&tree, popup));

        Popup::close_popup(&mut tree.widget_mut(popup));
        Popup::close_popup(&mut tree.widget_mut(popup));
        assert!(!is_open(&tree, popup));
        assert_eq!(tree.parent_of(popup), None);
        assert!(!tree.is_attached(popup));

        assert_eq!(
            drain_actions(&mut tree),
            [Action::PopupOpened, Action::PopupClosed]
        );
    }

    #[test]
    #[should_panic(expected = "has no parent")]
    fn open_without_parent_panics() {
        let mut tree = WidgetTree::new();
        let popup = tree.add_root(Popup::new());
        Popup::open_popup(&mut tree.widget_mut(popup));
    }

    #[test]
    fn outside_click_closes() {
        let mut tree = WidgetTree::new();
        let root = tree.add_root(Panel::new());
        let elsewhere = tree.add_child(root, Button::new("Elsewhere"));
        let popup = tree.add_child(root, Popup::new());
        let content = tree.add_child(popup, Button::new("Inside"));
        Popup::open_popup(&mut tree.widget_mut(popup));
        tree.pop_action();

        Popup::handle_click(&mut tree.widget_mut(popup), content);
        assert!(is_open(&tree, popup));
        assert!(!tree.has_pending_actions());

        Popup::handle_click(&mut tree.widget_mut(popup), elsewhere);
        assert!(!is_open(&tree, popup));
        assert_eq!(
            drain_actions(&mut tree),
            [Action::PopupOutsideClick, Action::PopupClosed]
        );
    }

    #[test]
    fn explicit_inside_and_outside() {
        let mut tree = WidgetTree::new();
        let root = tree.add_root(Panel::new());
        let trigger = tree.add_child(root, Button::new("Toggle"));
        let popup = tree.add_child(root, Popup::new());
        let close = tree.add_child(popup, Button::new("Close"));

        {
            let mut popup = tree.widget_mut(popup);
            Popup::treat_as_inside(&mut popup, trigger);
            Popup::treat_as_outside(&mut popup, close);
            Popup::open_popup(&mut popup);
        }
        tree.pop_action();

        Popup::handle_click(&mut tree.widget_mut(popup), trigger);
        assert!(is_open(&tree, popup));

        Popup::handle_click(&mut tree.widget_mut(popup), close);
        assert!(!is_open(&tree, popup));
        assert_matches!(tree.pop_action(), Some((_, Action::PopupOutsideClick)));
    }

    #[test]
    fn outside_wins_over_inside() {
        let mut tree = WidgetTree::new();
        let root = tree.add_root(Panel::new());
        let toolbar = tree.add_child(root, Panel::new());
        let button = tree.add_child(toolbar, Button::new("Bold"));
        let popup = tree.add_child(root, Popup::new());

        {
            let mut popup = tree.widget_mut(popup);
            Popup::treat_as_inside(&mut popup, toolbar);
            Popup::treat_as_outside(&mut popup, button);
            Popup::open_popup(&mut popup);
        }

        Popup::handle_click(&mut tree.widget_mut(popup), button);
        assert!(!is_open(&tree, popup));
    }

    #[test]
    fn removal_with_parent_resets_open_flag() {
        let mut tree = WidgetTree::new();
        let root = tree.add_root(Panel::new());
        let owner = tree.add_child(root, Panel::new());
        let popup = tree.add_child(owner, Popup::new());
        Popup::open_popup(&mut tree.widget_mut(popup));

        tree.detach(owner);
        assert!(!is_open(&tree, popup));
    }

    #[test]
    fn disabled_with_owner() {
        use crate::behaviors::Disableable;

        let mut tree = WidgetTree::new();
        let owner = tree.add_root(Panel::new());
        let popup = tree.add_child(owner, Popup::new());

        tree.widget_mut(owner).disable_by("busy");
        assert!(tree.widget_mut(popup).is_disabled());
    }
}
