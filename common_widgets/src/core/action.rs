// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

/// Actions are emitted by widgets when something happens the application may need to handle.
///
/// They are queued on the [`WidgetTree`](crate::core::WidgetTree) together with the id of
/// the widget which emitted them, and drained with
/// [`pop_action`](crate::core::WidgetTree::pop_action).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// An enabled [`Button`](crate::widgets::Button) was clicked.
    ButtonClicked,
    /// A [`Popup`](crate::widgets::Popup) was opened.
    PopupOpened,
    /// A [`Popup`](crate::widgets::Popup) was closed.
    PopupClosed,
    /// The user clicked outside an open [`Popup`](crate::widgets::Popup).
    PopupOutsideClick,
}
