// Copyright 2024 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Configures a suitable default [`tracing`] implementation for widget trees.
//!
//! This uses a concise log format: the time is printed without the date, with
//! millisecond precision, and the target is skipped.
//! The default filter can be overwritten using `RUST_LOG`.
//! It includes all [`DEBUG`](tracing::Level::DEBUG) messages in debug mode,
//! and all [`INFO`](tracing::Level::INFO) level messages in release mode.
//!
//! If a `tracing` backend is already configured, this will not overwrite that.

use time::macros::format_description;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

/// An error indicating that a tracing subscriber has been set before.
#[derive(Debug, thiserror::Error)]
#[error("A tracing subscriber has been set before.")]
pub struct TracingSubscriberHasBeenSetError;

/// Get the subscriber we wish to set up, filtering at `default_level` unless
/// `RUST_LOG` says otherwise.
fn default_tracing_subscriber(default_level: LevelFilter, for_tests: bool) -> impl Subscriber {
    // Use EnvFilter to allow the user to override the log level without recompiling.
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var("RUST_LOG")
        .from_env_lossy();

    let timer = UtcTime::new(format_description!(
        // We append a `Z` here to indicate clearly that this is a UTC time
        "[hour repr:24]:[minute]:[second].[subsecond digits:3]Z"
    ));

    // Only one of the two layers is ever present.
    let (console_layer, test_layer) = if for_tests {
        let layer = tracing_subscriber::fmt::layer()
            .with_timer(timer)
            .with_target(false)
            .with_test_writer();
        (None, Some(layer))
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .with_timer(timer)
            .with_target(false);
        (Some(layer), None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(test_layer)
        .with(env_filter)
}

/// Initialise tracing with the default subscriber.
///
/// Logs at `DEBUG` in debug builds and at `INFO` in release builds,
/// unless `RUST_LOG` overrides the level.
pub fn try_init_tracing() -> Result<(), TracingSubscriberHasBeenSetError> {
    let default_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    default_tracing_subscriber(default_level, false)
        .try_init()
        .map_err(|_| TracingSubscriberHasBeenSetError)
}

/// Initialise tracing with a default subscriber for a unit test.
///
/// Output goes through the test writer, so it's only shown for failing tests.
/// Calling this more than once is harmless; later calls return an error which
/// tests can ignore.
pub fn try_init_test_tracing() -> Result<(), TracingSubscriberHasBeenSetError> {
    default_tracing_subscriber(LevelFilter::TRACE, true)
        .try_init()
        .map_err(|_| TracingSubscriberHasBeenSetError)
}
