// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Helper widgets for writing tests.
//!
//! Note: Some of these types are undocumented. They're meant to help maintainers,
//! not to be user-facing.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

use crate::core::Widget;
use crate::state::BinaryStateful;

/// A stateful widget that records each time one of its hooks is called.
///
/// Its intent is to let you observe state transitions in a test.
///
/// Make one like this:
///
/// ```
/// use assert_matches::assert_matches;
/// use common_widgets::core::WidgetTree;
/// use common_widgets::testing::{Record, Recorder, Recording};
///
/// let recording = Recording::default();
/// let mut tree = WidgetTree::new();
/// let id = tree.add_root(Recorder::new(&recording).with_state("foo", false));
///
/// assert_matches!(recording.next(), Some(Record::Added));
/// assert_matches!(recording.next(), Some(Record::StateOff(name)) if name == "foo");
///
/// tree.widget_mut(id).add_binary_state_source("foo", "bar");
/// assert_matches!(recording.next(), Some(Record::StateOn(name)) if name == "foo");
/// ```
#[derive(Debug)]
pub struct Recorder {
    recording: Recording,
    states: BinaryStateful,
}

/// A recording of widget hook calls.
///
/// Internally stores a queue of [`Records`](Record).
#[derive(Debug, Clone, Default)]
pub struct Recording(Rc<RefCell<VecDeque<Record>>>);

/// A recording of a hook call on a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// The named state switched on.
    StateOn(String),
    /// The named state switched off.
    StateOff(String),
    /// The widget was attached to the tree.
    Added,
    /// The widget was detached from the tree.
    Removed,
}

impl Recording {
    /// True if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// The number of events in the recording.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Clear recorded events.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Returns the next event in the recording, if one exists.
    ///
    /// This consumes the event.
    pub fn next(&self) -> Option<Record> {
        self.0.borrow_mut().pop_front()
    }

    /// Returns a vec of events drained from the recording.
    pub fn drain(&self) -> Vec<Record> {
        self.0.borrow_mut().drain(..).collect::<Vec<_>>()
    }

    fn push(&self, event: Record) {
        self.0.borrow_mut().push_back(event);
    }
}

impl Recorder {
    /// Create a stateful widget without states, which writes to `recording`.
    pub fn new(recording: &Recording) -> Self {
        Self {
            recording: recording.clone(),
            states: BinaryStateful::new(),
        }
    }

    /// Builder-style method to register a state.
    pub fn with_state(mut self, state_name: &str, is_cascading: bool) -> Self {
        self.states.add_binary_state(state_name, is_cascading);
        self
    }
}

impl Widget for Recorder {
    fn binary_states(&self) -> Option<&BinaryStateful> {
        Some(&self.states)
    }

    fn binary_states_mut(&mut self) -> Option<&mut BinaryStateful> {
        Some(&mut self.states)
    }

    fn after_state_on(&mut self, state_name: &str) {
        self.recording.push(Record::StateOn(state_name.to_string()));
    }

    fn after_state_off(&mut self, state_name: &str) {
        self.recording.push(Record::StateOff(state_name.to_string()));
    }

    fn after_add(&mut self) {
        self.recording.push(Record::Added);
    }

    fn after_remove(&mut self) {
        self.recording.push(Record::Removed);
    }
}

/// Checks that the given expression panics in debug mode. No-op in release mode.
///
/// Meant for testing contract violations reported through `debug_panic!`.
#[macro_export]
macro_rules! assert_debug_panics {
    ($expr:expr) => {
        $crate::testing::assert_debug_panics_inner(
            || {
                $expr;
            },
            "",
        )
    };

    ($expr:expr, $needle:expr) => {
        $crate::testing::assert_debug_panics_inner(
            || {
                $expr;
            },
            $needle,
        )
    };
}

pub use crate::assert_debug_panics;

#[track_caller]
#[doc(hidden)]
pub fn assert_debug_panics_inner(callback: impl FnOnce(), needle: &str) {
    if cfg!(not(debug_assertions)) {
        return;
    }

    // Only used in tests: a broken invariant after unwinding can't cause UB here.
    let Err(err) = catch_unwind(AssertUnwindSafe(callback)) else {
        panic!("expression did not panic");
    };

    let message = if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else {
        panic!("panic payload isn't a string");
    };

    assert!(
        message.contains(needle),
        "panic message {message:?} doesn't contain {needle:?}"
    );
}
