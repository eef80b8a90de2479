// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Binary state operations which reach beyond a single widget.
//!
//! Two directions are involved:
//!
//! - *Push on change*: when a widget's state switches on or off, every descendant in
//!   its full subtree which registered the same state as cascading gains or loses
//!   the imposed source. Imposition itself never recurses: the originating widget
//!   already enumerates all of its descendants.
//! - *Pull on attach*: when a widget is attached, each of its registered states looks
//!   at the nearest ancestor which registered the same state, and picks up the
//!   imposed source if that ancestor's state is on. This applies to non-cascading
//!   states too: the cascading flag only decides whether later changes are pushed.
//!
//! Descendant sets are snapshots taken at the start of a cascade.

use tracing::{trace, trace_span};

use crate::core::{WidgetId, WidgetMut};
use crate::state::{BinaryState, BinaryStateful, SOURCE_ID_IMPOSED, is_imposed_source};

impl WidgetMut<'_> {
    // --- MARK: REGISTRY

    #[track_caller]
    fn states(&self) -> &BinaryStateful {
        let widget = self.widget();
        let Some(states) = widget.binary_states() else {
            panic!(
                "{} {} has no binary states",
                widget.short_type_name(),
                self.id
            );
        };
        states
    }

    #[track_caller]
    fn states_mut(&mut self) -> &mut BinaryStateful {
        let id = self.id;
        let widget = self.widget_mut();
        let type_name = widget.short_type_name();
        let Some(states) = widget.binary_states_mut() else {
            panic!("{type_name} {id} has no binary states");
        };
        states
    }

    /// Returns `true` if the widget has a binary state registry.
    pub fn is_stateful(&self) -> bool {
        self.widget().binary_states().is_some()
    }

    /// Register a state on the widget.
    ///
    /// Registering a name twice keeps the existing state. Registering doesn't look at
    /// ancestors: inherited state is only resolved when the widget is attached.
    ///
    /// # Panics
    ///
    /// If the widget isn't stateful.
    #[track_caller]
    pub fn add_binary_state(&mut self, state_name: &str, is_cascading: bool) -> &mut Self {
        self.states_mut().add_binary_state(state_name, is_cascading);
        self
    }

    /// The named state.
    ///
    /// # Panics
    ///
    /// If the widget isn't stateful, or the state isn't registered.
    #[track_caller]
    pub fn binary_state(&self, state_name: &str) -> &BinaryState {
        self.states().binary_state(state_name)
    }

    /// Returns `true` if the named state has at least one source.
    ///
    /// # Panics
    ///
    /// If the widget isn't stateful, or the state isn't registered.
    #[track_caller]
    pub fn is_state_on(&self, state_name: &str) -> bool {
        self.states().is_state_on(state_name)
    }

    // --- MARK: SOURCES

    /// Add a source to the named state.
    ///
    /// If the state switches on, cascading descendants receive the imposed source
    /// first, then [`Widget::after_state_on`](crate::core::Widget::after_state_on)
    /// runs on this widget.
    ///
    /// # Panics
    ///
    /// If the widget isn't stateful, or the state isn't registered.
    /// In debug builds, also if `source_id` uses the reserved imposed prefix.
    #[track_caller]
    pub fn add_binary_state_source(&mut self, state_name: &str, source_id: &str) -> &mut Self {
        if is_imposed_source(source_id) {
            debug_panic!(
                "source id '{}' is reserved for imposed state, ignoring it",
                source_id
            );
            return self;
        }
        if self.states_mut().add_source(state_name, source_id) {
            self.cascade(state_name, true);
            self.fire_state_on(state_name);
        }
        self
    }

    /// Remove a source from the named state, or all of them if `source_id` is `None`.
    ///
    /// If the state switches off, cascading descendants lose the imposed source
    /// first, then [`Widget::after_state_off`](crate::core::Widget::after_state_off)
    /// runs on this widget. Clearing all sources switches off at most once.
    ///
    /// # Panics
    ///
    /// If the widget isn't stateful, or the state isn't registered.
    /// In debug builds, also if `source_id` uses the reserved imposed prefix.
    #[track_caller]
    pub fn remove_binary_state_source(
        &mut self,
        state_name: &str,
        source_id: Option<&str>,
    ) -> &mut Self {
        if let Some(source_id) = source_id
            && is_imposed_source(source_id)
        {
            debug_panic!(
                "source id '{}' is reserved for imposed state, ignoring it",
                source_id
            );
            return self;
        }
        self.remove_source_and_cascade(state_name, source_id);
        self
    }

    #[track_caller]
    fn remove_source_and_cascade(&mut self, state_name: &str, source_id: Option<&str>) {
        if self.states_mut().remove_source(state_name, source_id) {
            self.cascade(state_name, false);
            self.fire_state_off(state_name);
        }
    }

    /// Add the imposed source to this widget only.
    ///
    /// Doesn't propagate to descendants.
    #[track_caller]
    pub fn add_imposed_state_source(&mut self, state_name: &str) -> &mut Self {
        if self.states_mut().add_source(state_name, SOURCE_ID_IMPOSED) {
            self.fire_state_on(state_name);
        }
        self
    }

    /// Remove the imposed source from this widget only.
    ///
    /// Doesn't propagate to descendants.
    #[track_caller]
    pub fn remove_imposed_state_source(&mut self, state_name: &str) -> &mut Self {
        if self
            .states_mut()
            .remove_source(state_name, Some(SOURCE_ID_IMPOSED))
        {
            self.fire_state_off(state_name);
        }
        self
    }

    /// Impose the state on this widget if the nearest ancestor which registered the
    /// same state has it on.
    ///
    /// Only the nearest such ancestor is consulted, whatever its value.
    #[track_caller]
    pub fn apply_imposed_state_source(&mut self, state_name: &str) -> &mut Self {
        if self.nearest_is_on(state_name) {
            self.add_imposed_state_source(state_name);
        }
        self
    }

    /// Change the cascading flag of the named state.
    ///
    /// Turning cascading off removes the imposed source from this widget, leaving
    /// descendants as they are. Turning it on picks up the imposed source from the
    /// nearest ancestor.
    #[track_caller]
    pub fn set_is_cascading(&mut self, state_name: &str, is_cascading: bool) -> &mut Self {
        let was_cascading = self.binary_state(state_name).is_cascading();
        if is_cascading && !was_cascading {
            self.apply_imposed_state_source(state_name);
        } else if !is_cascading && was_cascading {
            self.remove_imposed_state_source(state_name);
        }
        self.states_mut()
            .binary_state_mut(state_name)
            .set_is_cascading(is_cascading);
        self
    }

    // --- MARK: LIFECYCLE

    /// Run by the tree after the widget was attached.
    pub(crate) fn run_after_add(&mut self) {
        self.widget_mut().after_add();
        if !self.is_stateful() {
            return;
        }

        for state_name in self.state_names() {
            if self.nearest_is_on(&state_name) {
                // The hook fires once below, whatever the imposition changed.
                self.states_mut().add_source(&state_name, SOURCE_ID_IMPOSED);
            }
            if self.is_state_on(&state_name) {
                self.fire_state_on(&state_name);
            } else {
                self.fire_state_off(&state_name);
            }
        }
    }

    /// Run by the tree after the widget was detached.
    pub(crate) fn run_after_remove(&mut self) {
        self.widget_mut().after_remove();
        if !self.is_stateful() {
            return;
        }

        for state_name in self.state_names() {
            let imposed: Vec<String> = self
                .binary_state(&state_name)
                .sources()
                .filter(|source_id| is_imposed_source(source_id))
                .map(str::to_string)
                .collect();
            for source_id in imposed {
                self.remove_source_and_cascade(&state_name, Some(&source_id));
            }
        }
    }

    // --- MARK: HELPERS

    fn state_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.states().state_names().map(str::to_string).collect();
        // Deterministic hook order.
        names.sort_unstable();
        names
    }

    /// Returns `true` if the nearest ancestor which registered the state has it on.
    fn nearest_is_on(&self, state_name: &str) -> bool {
        let nearest = self.tree.ancestor(self.id, |_, widget| {
            widget
                .binary_states()
                .is_some_and(|states| states.has_binary_state(state_name))
        });
        nearest
            .and_then(|ancestor| self.tree.binary_states(ancestor))
            .is_some_and(|states| states.is_state_on(state_name))
    }

    /// Push the imposed source to (or pull it from) every cascading descendant.
    fn cascade(&mut self, state_name: &str, is_on: bool) {
        let _span = trace_span!(
            "cascade",
            widget_id = self.id.trace(),
            state_name,
            is_on
        )
        .entered();

        let targets: Vec<WidgetId> = self
            .tree
            .all_descendants(self.id)
            .into_iter()
            .filter(|&descendant| {
                self.tree
                    .binary_states(descendant)
                    .is_some_and(|states| states.is_cascading(state_name))
            })
            .collect();

        for target in targets {
            let mut descendant = self.tree.widget_mut(target);
            if is_on {
                descendant.add_imposed_state_source(state_name);
            } else {
                descendant.remove_imposed_state_source(state_name);
            }
        }
    }

    fn fire_state_on(&mut self, state_name: &str) {
        trace!(widget_id = self.id.trace(), state_name, "state on");
        self.widget_mut().after_state_on(state_name);
    }

    fn fire_state_off(&mut self, state_name: &str) {
        trace!(widget_id = self.id.trace(), state_name, "state off");
        self.widget_mut().after_state_off(state_name);
    }
}
