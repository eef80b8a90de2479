// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Widgets which can be expanded and contracted, such as tree nodes or dropdowns.
//!
//! Expansion doesn't cascade: expanding a panel leaves its children as they are.

use crate::core::{CssClasses, WidgetMut};
use crate::state::BinaryStateful;

/// Name of the binary state behind [`Expandable`].
pub const STATE_NAME_EXPANDABLE: &str = "state-expandable";

/// Source used by [`Expandable::expand_widget`] and [`Expandable::contract_widget`].
pub const SOURCE_ID_DEFAULT: &str = "default";

/// Class held while the widget is expanded.
pub const CLASS_EXPANDED: &str = "widget-expanded";
/// Class held while the widget is contracted.
pub const CLASS_CONTRACTED: &str = "widget-contracted";

/// Register the expanded state. Call when creating the widget.
pub fn init(states: &mut BinaryStateful) {
    states.add_binary_state(STATE_NAME_EXPANDABLE, false);
}

/// Sync the expanded/contracted classes with the state.
pub fn update_classes(states: &BinaryStateful, classes: &mut CssClasses, state_name: &str) {
    if state_name != STATE_NAME_EXPANDABLE {
        return;
    }
    let is_expanded = states.is_state_on(STATE_NAME_EXPANDABLE);
    classes.toggle(CLASS_EXPANDED, is_expanded);
    classes.toggle(CLASS_CONTRACTED, !is_expanded);
}

/// Expanding and contracting a widget.
pub trait Expandable {
    /// Expand the widget with the default source.
    fn expand_widget(&mut self) -> &mut Self;

    /// Withdraw the default source.
    fn contract_widget(&mut self) -> &mut Self;

    /// Expand the widget on behalf of `source_id`.
    fn expand_by(&mut self, source_id: &str) -> &mut Self;

    /// Withdraw `source_id`.
    fn contract_by(&mut self, source_id: &str) -> &mut Self;

    /// Returns `true` if at least one source expands the widget.
    fn is_expanded(&self) -> bool;
}

impl Expandable for WidgetMut<'_> {
    #[track_caller]
    fn expand_widget(&mut self) -> &mut Self {
        self.expand_by(SOURCE_ID_DEFAULT)
    }

    #[track_caller]
    fn contract_widget(&mut self) -> &mut Self {
        self.contract_by(SOURCE_ID_DEFAULT)
    }

    #[track_caller]
    fn expand_by(&mut self, source_id: &str) -> &mut Self {
        self.add_binary_state_source(STATE_NAME_EXPANDABLE, source_id)
    }

    #[track_caller]
    fn contract_by(&mut self, source_id: &str) -> &mut Self {
        self.remove_binary_state_source(STATE_NAME_EXPANDABLE, Some(source_id))
    }

    #[track_caller]
    fn is_expanded(&self) -> bool {
        self.is_state_on(STATE_NAME_EXPANDABLE)
    }
}
