// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! A label widget.

use crate::core::{CssClasses, Widget, WidgetMut};

/// A widget displaying a line of text.
///
/// Labels have no binary states: they are skipped by cascades, and descendants
/// look past them when resolving inherited states.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    classes: CssClasses,
}

// --- MARK: BUILDERS
impl Label {
    /// Create a new label.
    pub fn new(text: impl Into<String>) -> Self {
        let mut classes = CssClasses::new();
        classes.add("label");
        Self {
            text: text.into(),
            classes,
        }
    }

    /// The text of the label.
    pub fn text(&self) -> &str {
        &self.text
    }
}

// --- MARK: WIDGETMUT
impl Label {
    /// Set the text.
    pub fn set_text(this: &mut WidgetMut<'_>, text: impl Into<String>) {
        let Some(label) = this.downcast_mut::<Self>() else {
            debug_panic!("Label::set_text called on a widget which isn't a Label");
            return;
        };
        label.text = text.into();
    }
}

// --- MARK: IMPL WIDGET
impl Widget for Label {
    fn css_classes(&self) -> Option<&CssClasses> {
        Some(&self.classes)
    }
}
