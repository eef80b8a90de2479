// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Widgets which can be highlighted, e.g. to mark a search match or a selection.

use crate::core::{CssClasses, WidgetMut};
use crate::state::{BinaryStateful, SourceError, validate_source};

/// Name of the binary state behind [`Highlightable`].
pub const STATE_NAME_HIGHLIGHTABLE: &str = "state-highlightable";

/// Source used when no highlight id is given.
pub const SOURCE_ID_HIGHLIGHTED: &str = "highlighted";

/// Class held while the widget is highlighted.
pub const CLASS_HIGHLIGHTED: &str = "widget-highlighted";

/// Register the highlighted state. Call when creating the widget.
pub fn init(states: &mut BinaryStateful) {
    states.add_binary_state(STATE_NAME_HIGHLIGHTABLE, false);
}

/// Sync the highlighted class with the state.
pub fn update_classes(states: &BinaryStateful, classes: &mut CssClasses, state_name: &str) {
    if state_name != STATE_NAME_HIGHLIGHTABLE {
        return;
    }
    classes.toggle(
        CLASS_HIGHLIGHTED,
        states.is_state_on(STATE_NAME_HIGHLIGHTABLE),
    );
}

fn resolve_source(highlight_id: Option<&str>) -> Result<&str, SourceError> {
    match highlight_id {
        Some(highlight_id) => {
            validate_source(highlight_id)?;
            Ok(highlight_id)
        }
        None => Ok(SOURCE_ID_HIGHLIGHTED),
    }
}

/// Highlighting a widget under one or more highlight ids.
///
/// Highlight ids are caller-chosen sources. `None` stands for
/// [`SOURCE_ID_HIGHLIGHTED`], so an absent id is spelled `None` rather than `""`:
/// empty ids are refused by this crate's rule. Empty ids, and ids starting with the
/// reserved [`SOURCE_ID_IMPOSED`](crate::state::SOURCE_ID_IMPOSED) prefix, are
/// rejected with a [`SourceError`] and leave the widget untouched.
pub trait Highlightable {
    /// Highlight the widget under `highlight_id`.
    fn highlight_on(&mut self, highlight_id: Option<&str>) -> Result<&mut Self, SourceError>;

    /// Withdraw `highlight_id`.
    fn highlight_off(&mut self, highlight_id: Option<&str>) -> Result<&mut Self, SourceError>;

    /// With `Some(id)`, returns `true` if the widget is highlighted under that id.
    /// With `None`, returns `true` if the widget is highlighted under any id.
    fn is_highlighted(&self, highlight_id: Option<&str>) -> Result<bool, SourceError>;
}

impl Highlightable for WidgetMut<'_> {
    #[track_caller]
    fn highlight_on(&mut self, highlight_id: Option<&str>) -> Result<&mut Self, SourceError> {
        let source_id = resolve_source(highlight_id)?;
        Ok(self.add_binary_state_source(STATE_NAME_HIGHLIGHTABLE, source_id))
    }

    #[track_caller]
    fn highlight_off(&mut self, highlight_id: Option<&str>) -> Result<&mut Self, SourceError> {
        let source_id = resolve_source(highlight_id)?;
        Ok(self.remove_binary_state_source(STATE_NAME_HIGHLIGHTABLE, Some(source_id)))
    }

    #[track_caller]
    fn is_highlighted(&self, highlight_id: Option<&str>) -> Result<bool, SourceError> {
        let state = self.binary_state(STATE_NAME_HIGHLIGHTABLE);
        match highlight_id {
            Some(highlight_id) => {
                validate_source(highlight_id)?;
                Ok(state.has_source(highlight_id))
            }
            None => Ok(state.is_state_on()),
        }
    }
}
