// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! A button widget.

use tracing::trace;

use crate::behaviors::{Disableable, disableable};
use crate::core::{Action, CssClasses, Widget, WidgetMut};
use crate::state::BinaryStateful;

/// A button with a text label, which can be disabled.
///
/// Emits [`Action::ButtonClicked`] when clicked while enabled.
#[derive(Debug, Clone)]
pub struct Button {
    text: String,
    states: BinaryStateful,
    classes: CssClasses,
}

// --- MARK: BUILDERS
impl Button {
    /// Create a new button with a text label.
    pub fn new(text: impl Into<String>) -> Self {
        let mut states = BinaryStateful::new();
        disableable::init(&mut states);
        let mut classes = CssClasses::new();
        classes.add("button");
        Self {
            text: text.into(),
            states,
            classes,
        }
    }

    /// The text of the button.
    pub fn text(&self) -> &str {
        &self.text
    }
}

// --- MARK: WIDGETMUT
impl Button {
    /// Set the text.
    pub fn set_text(this: &mut WidgetMut<'_>, text: impl Into<String>) {
        let Some(button) = this.downcast_mut::<Self>() else {
            debug_panic!("Button::set_text called on a widget which isn't a Button");
            return;
        };
        button.text = text.into();
    }

    /// Click the button.
    ///
    /// Does nothing while the button is disabled.
    pub fn click_button(this: &mut WidgetMut<'_>) {
        if this.is_disabled() {
            trace!(widget_id = this.id().trace(), "ignored click on disabled button");
            return;
        }
        this.submit_action(Action::ButtonClicked);
    }
}

// --- MARK: IMPL WIDGET
impl Widget for Button {
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

    fn css_classes(&self) -> Option<&CssClasses> {
        Some(&self.classes)
    }
}
