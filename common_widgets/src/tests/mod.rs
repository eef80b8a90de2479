// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! We test state propagation across widgets here, with the helper widgets from
//! [`testing`](crate::testing) and the widgets from [`widgets`](crate::widgets).

mod propagation;
