// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use hashbrown::HashSet;

/// A single binary state of a widget.
///
/// The state is on while at least one source is present. Sources are unique,
/// and their order is irrelevant.
///
/// A `BinaryState` knows nothing about the widget tree: detecting transitions
/// and propagating them is up to [`BinaryStateful`](crate::state::BinaryStateful).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BinaryState {
    sources: HashSet<String>,
    is_cascading: bool,
}

impl BinaryState {
    /// Create an off state.
    pub fn new(is_cascading: bool) -> Self {
        Self {
            sources: HashSet::new(),
            is_cascading,
        }
    }

    /// Add a contributing source. Adding a source twice has no effect.
    pub fn add_source(&mut self, source_id: &str) {
        if !self.sources.contains(source_id) {
            self.sources.insert(source_id.to_string());
        }
    }

    /// Remove a contributing source, or all of them if `source_id` is `None`.
    ///
    /// Removing an absent source has no effect.
    pub fn remove_source(&mut self, source_id: Option<&str>) {
        match source_id {
            Some(source_id) => {
                self.sources.remove(source_id);
            }
            None => self.sources.clear(),
        }
    }

    /// Number of contributing sources.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Returns `true` if the given source is present.
    pub fn has_source(&self, source_id: &str) -> bool {
        self.sources.contains(source_id)
    }

    /// Iterate over the contributing sources, in no particular order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(String::as_str)
    }

    /// Returns `true` if at least one source is present.
    pub fn is_state_on(&self) -> bool {
        self.source_count() > 0
    }

    /// Whether the state cascades down from ancestors.
    pub fn is_cascading(&self) -> bool {
        self.is_cascading
    }

    /// Set the cascading flag.
    ///
    /// This only stores the flag. Use
    /// [`WidgetMut::set_is_cascading`](crate::core::WidgetMut::set_is_cascading)
    /// to also update imposed sources.
    pub fn set_is_cascading(&mut self, is_cascading: bool) -> &mut Self {
        self.is_cascading = is_cascading;
        self
    }
}
