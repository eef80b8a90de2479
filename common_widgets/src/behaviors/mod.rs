// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Behaviors built on top of binary states.
//!
//! A behavior is made of three parts:
//!
//! - a state name, registered on the widget's [`BinaryStateful`](crate::state::BinaryStateful)
//!   by the behavior's `init` function;
//! - an extension trait implemented for [`WidgetMut`](crate::core::WidgetMut), with the
//!   operations callers use;
//! - an `update_classes` function, which widgets call from their
//!   [`after_state_on`](crate::core::Widget::after_state_on) and
//!   [`after_state_off`](crate::core::Widget::after_state_off) hooks to keep their
//!   [`CssClasses`](crate::core::CssClasses) in sync.

pub mod disableable;
pub mod expandable;
pub mod highlightable;

pub use disableable::Disableable;
pub use expandable::Expandable;
pub use highlightable::Highlightable;
