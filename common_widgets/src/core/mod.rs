// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Basic types and traits the widget behaviors are built on.

mod action;
mod css_classes;
mod widget;
mod widget_mut;
mod widget_tree;

pub use action::Action;
pub use css_classes::CssClasses;
pub use widget::{Widget, WidgetId};
pub use widget_mut::WidgetMut;
pub use widget_tree::WidgetTree;
