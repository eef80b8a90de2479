// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Common Widgets provides reusable widget behaviors built on *binary states*.
//!
//! A binary state is a named boolean flag on a widget which is on while at least
//! one *source* keeps it on. Widgets store their states in a [`BinaryStateful`]
//! registry and expose it to the [`WidgetTree`] through [`Widget::binary_states`].
//!
//! States can be *cascading*: when a widget's cascading state switches on, every
//! descendant which registered the same state as cascading receives the reserved
//! [`SOURCE_ID_IMPOSED`] source, and loses it again when the state switches off.
//! Widgets attached under an ancestor whose state is on pick up the imposed
//! source from their nearest matching ancestor.
//!
//! On top of that, this crate provides:
//!
//! - [`Disableable`][behaviors::Disableable], a cascading enabled/disabled state.
//! - [`Expandable`][behaviors::Expandable], a non-cascading expanded/contracted state.
//! - [`Highlightable`][behaviors::Highlightable], a non-cascading highlight state with
//!   a default source.
//! - A handful of widgets composing those: [`Button`][widgets::Button],
//!   [`Label`][widgets::Label], [`Panel`][widgets::Panel] and [`Popup`][widgets::Popup].
//!
//! ```
//! use common_widgets::behaviors::Disableable;
//! use common_widgets::core::WidgetTree;
//! use common_widgets::widgets::{Button, Panel};
//!
//! let mut tree = WidgetTree::new();
//! let panel = tree.add_root(Panel::new());
//! let button = tree.add_child(panel, Button::new("OK"));
//!
//! tree.widget_mut(panel).disable_by("loading");
//! assert!(tree.widget_mut(button).is_disabled());
//!
//! tree.widget_mut(panel).enable_by("loading");
//! assert!(!tree.widget_mut(button).is_disabled());
//! ```
//!
//! [`BinaryStateful`]: state::BinaryStateful
//! [`SOURCE_ID_IMPOSED`]: state::SOURCE_ID_IMPOSED
//! [`WidgetTree`]: core::WidgetTree
//! [`Widget::binary_states`]: core::Widget::binary_states

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
pub mod util;

pub mod behaviors;
pub mod core;
pub mod state;
pub mod testing;
pub mod tracing_backend;
pub mod widgets;

#[cfg(test)]
mod tests;
