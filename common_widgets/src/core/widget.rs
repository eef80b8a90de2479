// Copyright 2018 the Xilem Authors and the Druid Authors
// SPDX-License-Identifier: Apache-2.0

use std::any::Any;
use std::fmt;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::field::DisplayValue;

use crate::core::CssClasses;
use crate::state::BinaryStateful;

/// A unique identifier for a single [`Widget`].
///
/// `WidgetId`s are generated automatically when a widget is added to a
/// [`WidgetTree`](crate::core::WidgetTree), and are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WidgetId(pub(crate) NonZeroU64);

impl WidgetId {
    /// Allocate a new, unique `WidgetId`.
    pub(crate) fn next() -> Self {
        static WIDGET_ID_COUNTER: AtomicU64 = AtomicU64::new(1);
        let id = WIDGET_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self::from_raw(id)
    }

    /// Rebuild an id from an arena node id.
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(NonZeroU64::new(raw).expect("widget ids are never zero"))
    }

    /// Returns the integer value of the `WidgetId`.
    pub fn to_raw(self) -> u64 {
        self.0.into()
    }

    /// A serialized representation of the `WidgetId` for debugging purposes.
    pub fn trace(self) -> DisplayValue<Self> {
        tracing::field::display(self)
    }
}

impl From<WidgetId> for u64 {
    fn from(id: WidgetId) -> Self {
        id.0.into()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The trait implemented by all widgets.
///
/// Widgets which take part in binary state propagation hold a [`BinaryStateful`]
/// registry by value and return it from [`binary_states`](Self::binary_states)
/// and [`binary_states_mut`](Self::binary_states_mut). Widgets returning `None`
/// are skipped by cascades and by ancestor lookups.
///
/// The state hooks only get access to the widget itself, never to the tree.
/// State changes can't start new tree mutations from inside a cascade.
pub trait Widget: Any + fmt::Debug {
    /// The binary states of this widget, if it has any.
    fn binary_states(&self) -> Option<&BinaryStateful> {
        None
    }

    /// Mutable access to the binary states of this widget, if it has any.
    ///
    /// Must return `Some` exactly when [`binary_states`](Self::binary_states) does.
    fn binary_states_mut(&mut self) -> Option<&mut BinaryStateful> {
        None
    }

    /// Called after the named state switched from off to on.
    ///
    /// Also called when the widget is added to the tree with the state on.
    fn after_state_on(&mut self, state_name: &str) {
        let _ = state_name;
    }

    /// Called after the named state switched from on to off.
    ///
    /// Also called when the widget is added to the tree with the state off.
    fn after_state_off(&mut self, state_name: &str) {
        let _ = state_name;
    }

    /// Called when the widget has been attached to the tree, before its binary
    /// states are resolved against its ancestors.
    fn after_add(&mut self) {}

    /// Called when the widget has been detached from the tree, before it
    /// relinquishes imposed state sources.
    fn after_remove(&mut self) {}

    /// The CSS classes of this widget, if it keeps any.
    fn css_classes(&self) -> Option<&CssClasses> {
        None
    }

    /// Get the (verbose) type name of the widget for debugging purposes.
    /// You should not override this method.
    #[doc(hidden)]
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Get the (abridged) type name of the widget for debugging purposes.
    /// You should not override this method.
    #[doc(hidden)]
    fn short_type_name(&self) -> &'static str {
        let name = self.type_name();
        name.split('<')
            .next()
            .unwrap_or(name)
            .split("::")
            .last()
            .unwrap_or(name)
    }
}

impl dyn Widget {
    /// Attempt to downcast to a concrete widget type.
    pub fn downcast_ref<W: Widget>(&self) -> Option<&W> {
        (self as &dyn Any).downcast_ref::<W>()
    }

    /// Attempt to downcast to a concrete widget type.
    pub fn downcast_mut<W: Widget>(&mut self) -> Option<&mut W> {
        (self as &mut dyn Any).downcast_mut::<W>()
    }
}
