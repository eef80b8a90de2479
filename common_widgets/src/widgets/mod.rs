// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Common widgets.

mod button;
mod label;
mod panel;
mod popup;

pub use button::Button;
pub use label::Label;
pub use panel::Panel;
pub use popup::Popup;
