// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Miscellaneous utility functions.

/// Panics if `debug_assertions` is on, otherwise logs an error.
///
/// Used for contract violations which the library can recover from.
#[macro_export]
macro_rules! debug_panic {
    ($msg:expr$(,)?) => {
        if cfg!(debug_assertions) {
            panic!($msg);
        } else {
            tracing::error!($msg);
        }
    };
    ($fmt:expr, $($arg:tt)+) => {
        if cfg!(debug_assertions) {
            panic!($fmt, $($arg)*);
        } else {
            tracing::error!($fmt, $($arg)*);
        }
    };
}

pub use crate::debug_panic;
