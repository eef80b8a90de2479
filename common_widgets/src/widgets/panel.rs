// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! A generic container widget.

use crate::behaviors::{disableable, expandable, highlightable};
use crate::core::{CssClasses, Widget};
use crate::state::BinaryStateful;

/// A container which can be disabled, expanded and highlighted.
///
/// Children are added through [`WidgetTree::add_child`](crate::core::WidgetTree::add_child).
/// Disabling a panel disables all of its disableable descendants.
#[derive(Debug, Clone)]
pub struct Panel {
    states: BinaryStateful,
    classes: CssClasses,
}

impl Panel {
    /// Create an empty panel.
    pub fn new() -> Self {
        let mut states = BinaryStateful::new();
        disableable::init(&mut states);
        expandable::init(&mut states);
        highlightable::init(&mut states);
        let mut classes = CssClasses::new();
        classes.add("panel");
        Self { states, classes }
    }

    fn update_classes(&mut self, state_name: &str) {
        disableable::update_classes(&self.states, &mut self.classes, state_name);
        expandable::update_classes(&self.states, &mut self.classes, state_name);
        highlightable::update_classes(&self.states, &mut self.classes, state_name);
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Panel {
    fn binary_states(&self) -> Option<&BinaryStateful> {
        Some(&self.states)
    }

    fn binary_states_mut(&mut self) -> Option<&mut BinaryStateful> {
        Some(&mut self.states)
    }

    fn after_state_on(&mut self, state_name: &str) {
        self.update_classes(state_name);
    }

    fn after_state_off(&mut self, state_name: &str) {
        self.update_classes(state_name);
    }

    fn css_classes(&self) -> Option<&CssClasses> {
        Some(&self.classes)
    }
}
