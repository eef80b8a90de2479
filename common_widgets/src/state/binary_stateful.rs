// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use hashbrown::HashMap;

use crate::state::BinaryState;

/// Identifier of the source imposed on a widget by a cascading ancestor.
///
/// Reserved: callers must never add or remove a source with this id themselves.
///
/// The whole `imposed` prefix is reserved, not just the exact id: detaching a widget
/// strips every source starting with it, so a caller source such as `imposedByUser`
/// would be lost silently. Such ids are rejected up front instead.
pub const SOURCE_ID_IMPOSED: &str = "imposed";

/// Returns `true` if `source_id` starts with the reserved [`SOURCE_ID_IMPOSED`] prefix.
pub fn is_imposed_source(source_id: &str) -> bool {
    source_id.starts_with(SOURCE_ID_IMPOSED)
}

/// The binary states of one widget, keyed by state name.
///
/// Widgets hold a `BinaryStateful` by value and expose it through
/// [`Widget::binary_states`](crate::core::Widget::binary_states).
/// States are registered with [`add_binary_state`](Self::add_binary_state), usually
/// when the widget is created. Sources are added and removed through
/// [`WidgetMut`](crate::core::WidgetMut), which propagates changes to the tree.
///
/// Accessing a state which was never registered is a programming error, and panics.
#[derive(Debug, Default, Clone)]
pub struct BinaryStateful {
    states: HashMap<String, BinaryState>,
}

impl BinaryStateful {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a state.
    ///
    /// Registering a name twice keeps the existing state, with its sources and flag.
    pub fn add_binary_state(&mut self, state_name: &str, is_cascading: bool) -> &mut Self {
        if !self.states.contains_key(state_name) {
            self.states
                .insert(state_name.to_string(), BinaryState::new(is_cascading));
        }
        self
    }

    /// Returns `true` if the state is registered.
    pub fn has_binary_state(&self, state_name: &str) -> bool {
        self.states.contains_key(state_name)
    }

    /// The named state, if registered.
    pub fn get(&self, state_name: &str) -> Option<&BinaryState> {
        self.states.get(state_name)
    }

    /// The named state.
    ///
    /// # Panics
    ///
    /// If the state isn't registered.
    #[track_caller]
    pub fn binary_state(&self, state_name: &str) -> &BinaryState {
        let Some(state) = self.states.get(state_name) else {
            panic!("binary state '{state_name}' is not registered");
        };
        state
    }

    #[track_caller]
    pub(crate) fn binary_state_mut(&mut self, state_name: &str) -> &mut BinaryState {
        let Some(state) = self.states.get_mut(state_name) else {
            panic!("binary state '{state_name}' is not registered");
        };
        state
    }

    /// Returns `true` if the named state has at least one source.
    ///
    /// # Panics
    ///
    /// If the state isn't registered.
    #[track_caller]
    pub fn is_state_on(&self, state_name: &str) -> bool {
        self.binary_state(state_name).is_state_on()
    }

    /// Returns `true` if the named state is registered and cascading.
    pub fn is_cascading(&self, state_name: &str) -> bool {
        self.get(state_name).is_some_and(BinaryState::is_cascading)
    }

    /// Names of all registered states, in no particular order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    /// Add a source to a state, without propagation.
    ///
    /// Returns `true` if the state just switched on.
    #[track_caller]
    pub(crate) fn add_source(&mut self, state_name: &str, source_id: &str) -> bool {
        let state = self.binary_state_mut(state_name);
        let count_before = state.source_count();
        state.add_source(source_id);
        count_before == 0 && state.source_count() > 0
    }

    /// Remove a source (or all of them) from a state, without propagation.
    ///
    /// Returns `true` if the state just switched off.
    #[track_caller]
    pub(crate) fn remove_source(&mut self, state_name: &str, source_id: Option<&str>) -> bool {
        let state = self.binary_state_mut(state_name);
        let count_before = state.source_count();
        state.remove_source(source_id);
        count_before > 0 && state.source_count() == 0
    }
}
